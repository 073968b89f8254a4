// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving engine.
//!
//! A [`SeamCarver`] owns one mutable RGB image and exposes the whole
//! public surface: bounds-checked energy queries, seam discovery in
//! both directions, validated seam removal, and a driver that carves
//! repeatedly down to a target size.  Every call is synchronous and
//! CPU-bound; callers sharing an instance across threads must
//! serialize access themselves.

use crate::energy::pixel_energy;
use crate::error::CarveError;
use crate::finder::{self, SeamFinder};
use crate::transpose::transpose;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, RgbImage};
use itertools::Itertools;
use log::debug;

// Copy every pixel except the seam pixel of its row; everything to the
// right of the cut shifts left by one.  The seam must already have been
// validated against the image.
fn drop_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..width {
            if x < cut {
                out.put_pixel(x, y, image.get_pixel(x, y));
            } else if x > cut {
                out.put_pixel(x - 1, y, image.get_pixel(x, y));
            }
        }
    }
    out
}

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.
#[derive(PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

/// The seam-carving engine.  Takes exclusive ownership of the image;
/// the width and height shrink by one with every removed seam.
pub struct SeamCarver {
    image: RgbImage,
}

impl SeamCarver {
    /// Wrap an image for carving.
    pub fn new(image: RgbImage) -> Self {
        SeamCarver { image }
    }

    /// Width of the current image.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the current image.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The current image.
    pub fn picture(&self) -> &RgbImage {
        &self.image
    }

    /// Give the (possibly carved) image back.
    pub fn into_picture(self) -> RgbImage {
        self.image
    }

    /// The dual-gradient energy of the pixel at (`col`, `row`),
    /// computed against the current image.  Fails if the coordinate
    /// lies outside the current dimensions.
    pub fn energy(&self, col: u32, row: u32) -> Result<f64, CarveError> {
        if col >= self.width() || row >= self.height() {
            return Err(CarveError::CoordinateOutOfRange {
                col,
                row,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(pixel_energy(&self.image, col, row))
    }

    // A seam is acceptable when it has one entry per row (or column),
    // every entry lands inside the perpendicular dimension, and no two
    // consecutive entries are more than one pixel apart.  All of this
    // runs before any mutation.
    fn validate_seam(seam: &[u32], expected: usize, bound: u32) -> Result<(), CarveError> {
        if seam.len() != expected {
            return Err(CarveError::SeamLength {
                expected,
                actual: seam.len(),
            });
        }
        if let Some((index, &value)) = seam.iter().enumerate().find(|&(_, &v)| v >= bound) {
            return Err(CarveError::SeamEntryOutOfRange {
                index,
                value,
                bound,
            });
        }
        for (index, (&from, &to)) in seam.iter().tuple_windows().enumerate() {
            if from.max(to) - from.min(to) > 1 {
                return Err(CarveError::SeamNotConnected { index, from, to });
            }
        }
        Ok(())
    }

    /// Remove a previously computed vertical seam, shrinking the image
    /// by one column.  Fails without touching the image when the seam
    /// is malformed or the image is already a single column wide.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        if self.width() <= 1 {
            return Err(CarveError::ImageTooSmall {
                width: self.width(),
                height: self.height(),
            });
        }
        Self::validate_seam(seam, self.height() as usize, self.width())?;
        self.image = drop_vertical_seam(&self.image, seam);
        Ok(())
    }

    /// Remove a previously computed horizontal seam, shrinking the
    /// image by one row.  The vertical case applied to the transposed
    /// image, then transposed back.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        if self.height() <= 1 {
            return Err(CarveError::ImageTooSmall {
                width: self.width(),
                height: self.height(),
            });
        }
        Self::validate_seam(seam, self.width() as usize, self.height())?;
        let flipped = transpose(&self.image);
        self.image = transpose(&drop_vertical_seam(&flipped, seam));
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<(), CarveError> {
        if direction == Carve::Height {
            let seam = self.find_horizontal_seam();
            self.remove_horizontal_seam(&seam)?;
        } else {
            let seam = self.find_vertical_seam();
            self.remove_vertical_seam(&seam)?;
        }
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Repeatedly carve seams out of the image until it reaches the
    /// requested size, alternating directions while both dimensions
    /// still have seams to lose.  Greedy, one seam at a time; there is
    /// no multi-seam optimality guarantee.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), CarveError> {
        let (width, height) = self.image.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::TargetTooSmall {
                new_width,
                new_height,
            });
        }
        if new_width > width || new_height > height {
            return Err(CarveError::CannotUpscale {
                width,
                height,
                new_width,
                new_height,
            });
        }

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_vertical_seam(&self) -> Vec<u32> {
        finder::vertical_seam(&self.image)
    }

    fn find_horizontal_seam(&self) -> Vec<u32> {
        finder::horizontal_seam(&self.image)
    }
}
