// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything the carving engine can refuse to do.
//!
//! All failures are detected up front, before any pixel moves: a call
//! that returns an error leaves the image exactly as it was.

use failure::Fail;

/// The error taxonomy of the carving engine.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// An energy query addressed a pixel outside the current image.
    #[fail(
        display = "coordinate ({}, {}) lies outside the {}x{} image",
        col, row, width, height
    )]
    CoordinateOutOfRange {
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    /// A seam did not have one entry per row (or per column).
    #[fail(display = "seam has {} entries, expected {}", actual, expected)]
    SeamLength { expected: usize, actual: usize },

    /// A seam entry pointed outside the perpendicular dimension.
    #[fail(
        display = "seam entry {} at index {} lies outside [0, {})",
        value, index, bound
    )]
    SeamEntryOutOfRange { index: usize, value: u32, bound: u32 },

    /// Consecutive seam entries were more than one pixel apart.
    #[fail(
        display = "seam jumps from {} to {} at index {}; adjacent entries may differ by at most 1",
        from, to, index
    )]
    SeamNotConnected { index: usize, from: u32, to: u32 },

    /// Removing a seam from this image would leave a zero-sized axis.
    #[fail(display = "cannot remove a seam from a {}x{} image", width, height)]
    ImageTooSmall { width: u32, height: u32 },

    /// Seam carving only shrinks; it cannot grow an image.
    #[fail(
        display = "cannot upscale a {}x{} image to {}x{}",
        width, height, new_width, new_height
    )]
    CannotUpscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    /// A carve target of zero width or height was requested.
    #[fail(
        display = "carve target {}x{} must be at least 1x1",
        new_width, new_height
    )]
    TargetTooSmall { new_width: u32, new_height: u32 },
}
