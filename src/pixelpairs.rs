// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the color distance of a pixel pair
//!
//! Given two pixels, the distance between them is the squared
//! difference of each of the R, G, and B channels, summed.  This is
//! the rusty expression of:
//!
//! ```text
//! D(p,q) = (Δr)² + (Δg)² + (Δb)²
//! ```

use image::{Pixel, Primitive};
use num_traits::{pow, NumCast};

/// (Pixel, Pixel) -> squared color distance.
///
/// Works on any pixel type; grayscale pixels promote to RGB first, so
/// a gray step of `d` costs `3d²`.
#[inline]
pub fn color_distance<P, S>(p1: &P, p2: &P) -> u32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let c1 = p1.to_rgb().channels().to_owned();
    let c2 = p2.to_rgb().channels().to_owned();
    c1.iter()
        .zip(c2.iter())
        .map(|(a, b)| {
            let a: i32 = NumCast::from(*a).unwrap();
            let b: i32 = NumCast::from(*b).unwrap();
            pow(a - b, 2)
        })
        .fold(0, |acc, c| acc + <u32 as NumCast>::from(c).unwrap())
}
