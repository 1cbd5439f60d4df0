// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a run can fail.  Every one of them ends the run: this is a
//! single-pass batch tool, so there is no retry path and no partial
//! output.

use failure::Fail;
use std::io;

/// Errors surfaced by the energy and seam pipeline.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// Gradient sampling reflects around each pixel, which needs at
    /// least one neighbor on every axis.
    #[fail(
        display = "image is {}x{}; energy sampling needs at least 2x2",
        width, height
    )]
    InvalidDimension { width: u32, height: u32 },

    /// The image source could not be decoded.
    #[fail(display = "could not read image: {}", _0)]
    ImageUnreadable(#[fail(cause)] image::ImageError),

    /// The output artifact could not be written.
    #[fail(display = "could not write image: {}", _0)]
    ImageWriteFailed(#[fail(cause)] io::Error),
}

impl From<image::ImageError> for SeamError {
    fn from(err: image::ImageError) -> SeamError {
        SeamError::ImageUnreadable(err)
    }
}

impl From<io::Error> for SeamError {
    fn from(err: io::Error) -> SeamError {
        SeamError::ImageWriteFailed(err)
    }
}
