// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-energy seam discovery.
//!
//! The energy field is an implicit DAG: every pixel has up to three
//! downward edges, to the pixels below-left, below, and below-right,
//! each weighted by the destination's energy.  Because edges only ever
//! point to the next row, a plain top-to-bottom sweep is a topological
//! order, and a single relaxation pass per row finds the cheapest
//! top-to-bottom path without any priority queue.  The topology is
//! computed from coordinates, never stored.

use crate::cq;
use crate::energy::calculate_energy;
use crate::grid::{EnergyAndBackPointer, Grid};
use crate::transpose::transpose;
use image::{GenericImageView, Pixel, Primitive};

/// Seam discovery as a capability.  It's a primitive interface, just
/// enough to leave room for other engines over the same image types.
pub trait SeamFinder {
    /// The minimum-energy top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32>;

    /// The minimum-energy left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<u32>;
}

/// Given an energy field, return the list of x-coordinates that, when
/// zipped with the range `(0..height)`, give the XY coordinates of the
/// cheapest top-to-bottom seam.
///
/// Ties are broken toward the lowest column, both when choosing a
/// cell's parent and when choosing the bottom-row endpoint; scanning
/// candidates in increasing column order with a strict comparison makes
/// the first minimum win.  The tie-break is observable in the output
/// and must not change.
pub fn energy_to_vertical_seam(energy: &Grid<f64>) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);
    let mut target: Grid<EnergyAndBackPointer<f64>> = Grid::new(width, height);

    // The top row is reached for free: cumulative cost is each pixel's
    // own energy, and there is no parent to record.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // Every later cell is reached through the cheapest of the up-to-three
    // cells above it.
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let mut parent_x = *range.start();
            for candidate in range {
                if target[(candidate, y - 1)].energy < target[(parent_x, y - 1)].energy {
                    parent_x = candidate;
                }
            }
            target[(x, y)] = EnergyAndBackPointer {
                energy: energy[(x, y)] + target[(parent_x, y - 1)].energy,
                parent: parent_x,
            };
        }
    }

    // Find the x coordinate of the bottommost cell with the least
    // cumulative energy.
    let mut seam_col = 0;
    for x in 1..width {
        if target[(x, height - 1)].energy < target[(seam_col, height - 1)].energy {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// The cheapest top-to-bottom seam of an image, energy field included.
pub fn vertical_seam<I, P, S>(image: &I) -> Vec<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    energy_to_vertical_seam(&calculate_energy(image))
}

/// The cheapest left-to-right seam of an image: the vertical seam of
/// the transposed image, already expressed in original coordinates
/// (entry `x` is the row the seam passes through in column `x`).
pub fn horizontal_seam<I, P, S>(image: &I) -> Vec<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    energy_to_vertical_seam(&calculate_energy(&transpose(image)))
}
