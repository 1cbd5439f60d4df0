// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the minimum-energy top-to-bottom seam of an energy grid.
//!
//! The dynamic program walks the grid row by row: each cell records
//! the cheapest cumulative cost of any valid path reaching it, plus a
//! back pointer to the column it arrived from.  Reconstruction then
//! walks the back pointers up from the cheapest bottom-row cell.

use crate::cq;
use crate::energy::calculate_energy;
use crate::error::SeamError;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::Itertools;
use std::fmt;

// The top row has nowhere to arrive from, so its parent stays None.
#[derive(Default, Debug, Copy, Clone)]
struct CostWithBackPointer {
    cost: f64,
    parent: Option<u32>,
}

/// A row-monotonic, 8-connected path from the top row to the bottom
/// row: one column index per row, with consecutive columns never more
/// than one apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    columns: Vec<u32>,
}

impl Seam {
    pub(crate) fn from_columns(columns: Vec<u32>) -> Self {
        Seam { columns }
    }

    /// Number of rows the seam crosses.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The seam's `(column, row)` coordinates, rows increasing from 0.
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.columns.iter().enumerate().map(|(y, &x)| (x, y as u32))
    }
}

impl fmt::Display for Seam {
    /// Renders the path as its coordinate pairs: `(2, 0) -> (3, 1)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.coordinates()
                .map(|(x, y)| format!("({}, {})", x, y))
                .join(" -> ")
        )
    }
}

/// Given an energy map, return the seam with the globally minimal
/// total energy among all row-monotonic, 8-connected top-to-bottom
/// paths.  Whenever candidates tie on cost, the lowest column index
/// wins, so identical input always yields an identical seam.
///
/// The grid must be non-empty; it may be as narrow as one column.
pub fn energy_to_seam(energy: &TwoDimensionalMap<f64>) -> Seam {
    let (width, height) = (energy.width(), energy.height());
    let mut target: TwoDimensionalMap<CostWithBackPointer> = TwoDimensionalMap::new(width, height);

    // The top row starts at its own energies.
    for x in 0..width {
        target[(x, 0)].cost = energy[(x, 0)];
    }

    let mw = width - 1;
    // Every later cell extends the cheapest of the up-to-three seams
    // ending just above it.  min_by keeps the first of equal
    // candidates, which is exactly the lowest-column tie-break.
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == mw, mw, x + 1);
            let parent_x = range
                .min_by(|a, b| target[(*a, y - 1)].cost.total_cmp(&target[(*b, y - 1)].cost))
                .unwrap();
            target[(x, y)] = CostWithBackPointer {
                cost: target[(parent_x, y - 1)].cost + energy[(x, y)],
                parent: Some(parent_x),
            };
        }
    }

    // Cheapest endpoint on the bottom row, then walk the back pointers
    // up.  One push per row: the seam is exactly `height` long.
    let last_row = height - 1;
    let mut seam_col = (0..width)
        .min_by(|a, b| {
            target[(*a, last_row)]
                .cost
                .total_cmp(&target[(*b, last_row)].cost)
        })
        .unwrap();
    let mut columns = Vec::with_capacity(height as usize);
    for y in (0..height).rev() {
        columns.push(seam_col);
        if let Some(parent) = target[(seam_col, y)].parent {
            seam_col = parent;
        }
    }
    columns.reverse();
    Seam { columns }
}

/// A convenience wrapper: image in, minimum vertical seam out.
pub fn find_seam<I, P, S>(image: &I) -> Result<Seam, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    Ok(energy_to_seam(calculate_energy(image)?.grid()))
}
