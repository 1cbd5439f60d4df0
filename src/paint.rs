// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recolor a seam so it can be seen.

use crate::seam::Seam;
use image::{Pixel, Rgb, RgbImage};

/// Paint every pixel on the seam's path with a fixed highlight color
/// (pure red), in place.
pub fn paint_seam(image: &mut RgbImage, seam: &Seam) {
    let highlight: Rgb<u8> = *Pixel::from_slice(&[255, 0, 0]);
    for (x, y) in seam.coordinates() {
        image.put_pixel(x, y, highlight);
    }
}
