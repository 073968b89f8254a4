// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient energy of an image.
//!
//! Each pixel's energy is the squared color gradient between its
//! horizontal neighbors plus the same for its vertical neighbors, a
//! cheap proxy for visual importance: the flatter the neighborhood,
//! the safer the pixel is to carve away.  Border pixels are pinned to
//! [`BORDER_ENERGY`] so seams anchor to interior content instead of
//! sliding along the frame.

use crate::grid::Grid;
use image::{GenericImageView, Pixel, Primitive};
use num_traits::NumCast;

/// The fixed energy of every pixel on the outer edge of the image:
/// `3 * 255 * 255`, the largest value a single squared RGB gradient
/// can take.  Reproduced exactly for output compatibility with other
/// implementations of the same measure.
pub const BORDER_ENERGY: f64 = 195_075.0;

// (Pixel, Pixel) -> summed squared channel differences.  This is the
// rusty expression of:
//
//        |Δ|² = (Δr)² + (Δg)² + (Δb)²
fn gradient_square<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let c1 = p1.to_rgb();
    let c2 = p2.to_rgb();
    c1.channels()
        .iter()
        .zip(c2.channels())
        .map(|(a, b)| {
            let a: f64 = NumCast::from(*a).unwrap();
            let b: f64 = NumCast::from(*b).unwrap();
            (a - b) * (a - b)
        })
        .sum()
}

/// The energy of a single pixel under the dual-gradient measure,
/// reflecting the image as it is right now.  The coordinate must be
/// valid for the current dimensions; [`crate::SeamCarver::energy`] is
/// the bounds-checked entry point.
pub fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    debug_assert!(x < width && y < height);
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }
    gradient_square(&image.get_pixel(x - 1, y), &image.get_pixel(x + 1, y))
        + gradient_square(&image.get_pixel(x, y - 1), &image.get_pixel(x, y + 1))
}

/// Compute the energy of every pixel in an image.  The field is
/// materialized fresh on every call and never cached across mutations,
/// so it cannot go stale after a seam removal.
pub fn calculate_energy<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            emap[(x, y)] = pixel_energy(image, x, y);
        }
    }
    emap
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn interior_energy_is_the_dual_gradient() {
        let mut buf = RgbImage::new(3, 3);
        buf.put_pixel(0, 1, Rgb([10, 20, 30]));
        buf.put_pixel(2, 1, Rgb([40, 10, 50]));
        buf.put_pixel(1, 0, Rgb([0, 0, 0]));
        buf.put_pixel(1, 2, Rgb([5, 5, 5]));
        // x: 30^2 + 10^2 + 20^2, y: 5^2 + 5^2 + 5^2
        assert_eq!(pixel_energy(&buf, 1, 1), 1400.0 + 75.0);
    }

    #[test]
    fn border_pixels_get_the_fixed_constant() {
        let buf = RgbImage::from_fn(4, 3, |x, y| Rgb([(x * 50) as u8, (y * 80) as u8, 7]));
        let emap = calculate_energy(&buf);
        for x in 0..4 {
            assert_eq!(emap[(x, 0)], BORDER_ENERGY);
            assert_eq!(emap[(x, 2)], BORDER_ENERGY);
        }
        for y in 0..3 {
            assert_eq!(emap[(0, y)], BORDER_ENERGY);
            assert_eq!(emap[(3, y)], BORDER_ENERGY);
        }
    }

    #[test]
    fn one_pixel_wide_images_are_all_border() {
        let buf = RgbImage::from_fn(1, 5, |_, y| Rgb([(y * 40) as u8, 0, 200]));
        let emap = calculate_energy(&buf);
        assert!(emap.as_slice().iter().all(|&e| e == BORDER_ENERGY));
    }
}
