// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the square root of the summed horizontal
//! and vertical color distances of its neighborhood.  The neighborhood
//! is unusual at the borders: the *sampling origin* reflects one pixel
//! inward before its neighbors are taken, so column 0 samples the
//! neighbors of column 1, and the far column samples the neighbors of
//! the one just inside it.  Rows reflect the same way.

use crate::cq;
use crate::error::SeamError;
use crate::pixelpairs::color_distance;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

/// A finished energy grid bundled with the maximum value observed in
/// it.  The maximum is what normalization scales by.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelEnergies {
    grid: TwoDimensionalMap<f64>,
    max_energy: f64,
}

impl PixelEnergies {
    /// Wrap an energy grid, recording its maximum value.  An empty or
    /// all-zero grid has a maximum of zero.
    pub fn from_grid(grid: TwoDimensionalMap<f64>) -> Self {
        let max_energy = grid.as_slice().iter().cloned().fold(0.0, f64::max);
        PixelEnergies { grid, max_energy }
    }

    /// The energy grid itself.
    pub fn grid(&self) -> &TwoDimensionalMap<f64> {
        &self.grid
    }

    /// The largest energy in the grid.
    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }
}

/// Compute the energy of every pixel in an image.  Generic on the
/// image type; color images use their R, G, and B channels directly
/// and grayscale images promote to RGB.
///
/// Fails with `InvalidDimension` when either dimension is below 2,
/// since a single-pixel row or column has no neighborhood to sample.
pub fn calculate_energy<I, P, S>(image: &I) -> Result<PixelEnergies, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if width < 2 || height < 2 {
        return Err(SeamError::InvalidDimension { width, height });
    }
    let (mw, mh) = (width - 1, height - 1);

    let mut grid = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        // The borders reflect the sampling origin inward by one, not
        // the missing neighbor.
        let ox = cq!(x == 0, 1, cq!(x == mw, mw - 1, x));
        let oy = cq!(y == 0, 1, cq!(y == mh, mh - 1, y));
        // On a two-pixel axis the reflected origin's outer neighbor
        // would land outside the image; keep the sample inside.
        let (west, east, north, south) = (
            image.get_pixel(cq!(ox == 0, 0, ox - 1), y),
            image.get_pixel(cq!(ox == mw, mw, ox + 1), y),
            image.get_pixel(x, cq!(oy == 0, 0, oy - 1)),
            image.get_pixel(x, cq!(oy == mh, mh, oy + 1)),
        );
        let distance = color_distance(&west, &east) + color_distance(&north, &south);
        grid[(x, y)] = f64::from(distance).sqrt();
    }
    Ok(PixelEnergies::from_grid(grid))
}
