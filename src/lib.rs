// #![deny(missing_docs)]

//! Energy maps and minimum seams for raster images.
//!
//! `calculate_energy` turns an image into a per-pixel energy grid,
//! `energy_to_seam` finds the minimum-energy top-to-bottom path
//! through it, `energy_to_image` renders the grid for inspection, and
//! `paint_seam` highlights the found path on the image.

pub mod energy;
pub mod error;
pub mod normalize;
pub mod paint;
pub mod seam;
pub mod twodmap;

mod pixelpairs;
mod ternary;

pub use energy::{calculate_energy, PixelEnergies};
pub use error::SeamError;
pub use normalize::energy_to_image;
pub use paint::paint_seam;
pub use seam::{energy_to_seam, find_seam, Seam};
pub use twodmap::TwoDimensionalMap;
