// #![deny(missing_docs)]

//! Content-aware image resizing through seam carving.
//!
//! A seam is a connected path of pixels, one per row (or column), whose
//! removal shrinks an image by a single column (or row) without scaling
//! or cropping it. The [`SeamCarver`] owns an image and repeatedly finds
//! and removes the seam with the least total dual-gradient energy.

mod ternary;

pub mod carver;
pub mod energy;
pub mod error;
pub mod finder;
pub mod grid;
pub mod transpose;

pub use crate::carver::SeamCarver;
pub use crate::energy::{calculate_energy, pixel_energy, BORDER_ENERGY};
pub use crate::error::CarveError;
pub use crate::finder::SeamFinder;
pub use crate::transpose::transpose;
