// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image transposition.
//!
//! A horizontal seam of an image is a vertical seam of its transpose.
//! Rather than maintaining a second, left-to-right dynamic program
//! that can drift out of sync with the vertical one, the carver flips
//! the buffer, reuses the vertical machinery, and flips back.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// A new image with the axes swapped: pixel `(x, y)` of the input lands
/// at `(y, x)` of the output.  Transposing twice restores the original
/// dimensions and pixel content.
pub fn transpose<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(height, width);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(y, x, image.get_pixel(x, y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn transpose_swaps_dimensions_and_coordinates() {
        let buf = RgbImage::from_fn(4, 2, |x, y| Rgb([x as u8, y as u8, 0]));
        let flipped = transpose(&buf);
        assert_eq!(flipped.dimensions(), (2, 4));
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(flipped.get_pixel(y, x), buf.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn double_transpose_is_the_identity() {
        let buf = RgbImage::from_fn(5, 3, |x, y| Rgb([(x * 31) as u8, (y * 57) as u8, 99]));
        assert_eq!(transpose(&transpose(&buf)), buf);
    }
}
