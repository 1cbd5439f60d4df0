// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rescale an energy grid into something a human can look at.

use crate::cq;
use crate::energy::PixelEnergies;
use image::{GrayImage, ImageBuffer, Pixel};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

/// Render an energy grid as an 8-bit grayscale image: intensity is
/// 255·energy/max, floored and clamped to [0, 255].
///
/// An all-zero grid (a solid-color image, say) has no maximum to scale
/// by; it comes back solid black rather than dividing by zero.
pub fn energy_to_image(energies: &PixelEnergies) -> GrayImage {
    let grid = energies.grid();
    let (width, height) = (grid.width(), grid.height());
    let max_energy = energies.max_energy();

    let mut out: GrayImage = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let intensity = cq!(
            max_energy > 0.0,
            (255.0 * grid[(x, y)] / max_energy).floor(),
            0.0
        );
        let cs = [NumCast::from(clamp(intensity, 0.0, 255.0)).unwrap()];
        out.put_pixel(x, y, *Pixel::from_slice(&cs));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    fn energies(width: u32, height: u32, cells: &[f64]) -> PixelEnergies {
        PixelEnergies::from_grid(TwoDimensionalMap::from_raw(width, height, cells.to_vec()).unwrap())
    }

    #[test]
    fn intensity_scales_to_the_grid_maximum_and_floors() {
        let img = energy_to_image(&energies(2, 2, &[0.0, 5.0, 10.0, 20.0]));
        // 255·5/20 = 63.75 and 255·10/20 = 127.5 both truncate down.
        assert_eq!(img.into_raw(), vec![0, 63, 127, 255]);
    }

    #[test]
    fn all_zero_energy_renders_solid_black() {
        let img = energy_to_image(&energies(2, 2, &[0.0; 4]));
        assert_eq!(img.into_raw(), vec![0, 0, 0, 0]);
    }
}
