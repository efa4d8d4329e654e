// Copyright 2019 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

// Permission is hereby granted, free of charge, to any person obtaining a copy of this
// software and associated documentation files (the "Software"), to deal in the Software
// without restriction, including without limitation the rights to use, copy, modify,
// merge, publish, distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED,
// INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT
// HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
#![warn(missing_docs)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]
#![allow(
    clippy::too_many_arguments, // API design
    clippy::similar_names, // This requires effort to ensure
    // Yield false positives
    clippy::must_use_candidate,
)]

//! Frame converter is a library to convert planar YUV 4:2:0 (I420) video
//! frames into a packed 32-bit-per-pixel ABGR buffer, ready for a texture
//! upload path.
//!
//! A [`FrameConverter`] owns one output buffer, sized once at construction
//! and reused for every frame: no heap allocation happens inside
//! [`convert`](FrameConverter::convert). Each call overwrites the previous
//! frame and returns a borrowed view of the result, valid until the next
//! call on the same converter.
//!
//! ABGR here means one little-endian `0xAABBGGRR` word per pixel, that is
//! the memory byte order R, G, B, A, with alpha always set to 255.
//!
//! The supported color models are:
//! * ycbcr, ITU-R Recommendation BT.601 (standard video system)
//! * ycbcr, ITU-R Recommendation BT.709 (CSC systems)
//!
//! Both standard range (16-235) and full range (0-255) are supported.
//!
//! # Examples
//!
//! Convert a frame with tightly packed planes, with Bt601 color space:
//! ```
//! use frame_converter as fc;
//! use fc::{ErrorKind, FrameConverter, STRIDE_AUTO};
//!
//! fn convert() -> Result<(), ErrorKind> {
//!     const WIDTH: u32 = 640;
//!     const HEIGHT: u32 = 480;
//!
//!     let y_plane = vec![16_u8; (WIDTH as usize) * (HEIGHT as usize)];
//!     let u_plane = vec![128_u8; (WIDTH as usize) * (HEIGHT as usize) / 4];
//!     let v_plane = vec![128_u8; (WIDTH as usize) * (HEIGHT as usize) / 4];
//!
//!     let mut converter = FrameConverter::new(WIDTH, HEIGHT)?;
//!     let frame = converter.convert(
//!         WIDTH,
//!         HEIGHT,
//!         &y_plane,
//!         STRIDE_AUTO,
//!         &u_plane,
//!         STRIDE_AUTO,
//!         &v_plane,
//!         STRIDE_AUTO,
//!     )?;
//!
//!     assert_eq!(frame.len(), 4 * (WIDTH as usize) * (HEIGHT as usize));
//!     Ok(())
//! }
//! ```
//!
//! Convert a frame whose planes carry alignment padding at the end of each
//! row:
//! ```
//! use frame_converter as fc;
//! use fc::{plane_sizes, ErrorKind, FrameConverter};
//!
//! fn convert_padded() -> Result<(), ErrorKind> {
//!     const WIDTH: u32 = 638;
//!     const HEIGHT: u32 = 480;
//!     const Y_STRIDE: usize = 640;
//!     const C_STRIDE: usize = 320;
//!
//!     let sizes = plane_sizes(WIDTH, HEIGHT, &[Y_STRIDE, C_STRIDE, C_STRIDE])?;
//!     let y_plane = vec![0_u8; sizes[0]];
//!     let u_plane = vec![0_u8; sizes[1]];
//!     let v_plane = vec![0_u8; sizes[2]];
//!
//!     let mut converter = FrameConverter::new(WIDTH, HEIGHT)?;
//!     converter.convert(
//!         WIDTH,
//!         HEIGHT,
//!         &y_plane,
//!         Y_STRIDE,
//!         &u_plane,
//!         C_STRIDE,
//!         &v_plane,
//!         C_STRIDE,
//!     )?;
//!
//!     Ok(())
//! }
//! ```
mod color_space;
mod convert;
mod plane;

use std::error;
use std::fmt;

pub use color_space::ColorSpace;
pub use plane::{plane_sizes, STRIDE_AUTO};

/// An enumeration of errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Width or height is zero, or the requested dimensions overflow
    /// the addressable buffer size
    InvalidDimensions,
    /// The requested conversion does not fit in the buffer allocated
    /// at construction time
    BufferTooSmall,
    /// A stride is smaller than the minimum required to hold one row
    /// of samples for the requested width
    StrideTooSmall,
    /// A plane contains fewer bytes than its stride and the requested
    /// height demand
    PlaneTooShort,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::InvalidDimensions => {
                write!(f, "Width and height must be greater than zero")
            }
            ErrorKind::BufferTooSmall => write!(
                f,
                "The requested conversion exceeds the converter buffer capacity"
            ),
            ErrorKind::StrideTooSmall => {
                write!(f, "A plane stride is too small for the requested width")
            }
            ErrorKind::PlaneTooShort => write!(f, "Not enough data provided in a plane"),
        }
    }
}

impl error::Error for ErrorKind {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Converts planar YUV 4:2:0 frames into one reusable packed ABGR buffer.
///
/// The buffer capacity is fixed when the converter is built and is never
/// resized afterwards. Conversions whose output would not fit are rejected
/// with [`ErrorKind::BufferTooSmall`]; conversions at or below the
/// construction dimensions reuse the same storage, call after call.
///
/// The converter is not internally synchronized: `convert` takes
/// `&mut self`, so exactly one caller at a time drives it and the returned
/// view cannot outlive the next conversion.
pub struct FrameConverter {
    frame: Vec<u8>,
    frame_len: usize,
    max_width: u32,
    max_height: u32,
    color_space: ColorSpace,
}

impl FrameConverter {
    /// Creates a converter for frames up to `width` x `height` pixels,
    /// interpreting input as BT.601 standard range.
    ///
    /// Allocates the `width * height * 4` bytes output buffer, zero
    /// initialized. This is the only allocation the converter ever makes.
    ///
    /// # Errors
    ///
    /// * [`InvalidDimensions`] if `width` or `height` is zero, or if
    ///   `width * height * 4` does not fit in `usize`
    ///
    /// [`InvalidDimensions`]: ErrorKind::InvalidDimensions
    pub fn new(width: u32, height: u32) -> Result<Self, ErrorKind> {
        Self::with_color_space(width, height, ColorSpace::Bt601)
    }

    /// Creates a converter like [`new`](Self::new), with an explicit input
    /// color space.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_color_space(
        width: u32,
        height: u32,
        color_space: ColorSpace,
    ) -> Result<Self, ErrorKind> {
        let len = output_len(width, height).ok_or(ErrorKind::InvalidDimensions)?;

        Ok(Self {
            frame: vec![0; len],
            frame_len: len,
            max_width: width,
            max_height: height,
            color_space,
        })
    }

    /// The dimensions the converter was built for.
    pub fn max_dimensions(&self) -> (u32, u32) {
        (self.max_width, self.max_height)
    }

    /// The color space applied to input frames.
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// A view of the most recently converted frame.
    ///
    /// After a failed [`convert`](Self::convert) this still returns the
    /// last good frame, untouched. Before the first conversion it returns
    /// the zero-initialized buffer.
    pub fn frame(&self) -> &[u8] {
        &self.frame[..self.frame_len]
    }

    /// Converts one I420 frame into the internal ABGR buffer and returns
    /// a view of it.
    ///
    /// # Arguments
    /// * `width` - Width of the frame to convert in pixels
    /// * `height` - Height of the frame to convert in pixels
    /// * `y_plane` - Luma samples, `height` rows
    /// * `y_stride` - Distance in bytes between starts of consecutive luma
    ///   rows, or [`STRIDE_AUTO`] for tightly packed data
    /// * `u_plane` - Blue-difference chroma samples, `(height + 1) / 2` rows
    /// * `u_stride` - Distance in bytes between starts of consecutive U
    ///   rows, or [`STRIDE_AUTO`]
    /// * `v_plane` - Red-difference chroma samples, `(height + 1) / 2` rows
    /// * `v_stride` - Distance in bytes between starts of consecutive V
    ///   rows, or [`STRIDE_AUTO`]
    ///
    /// The returned slice is `width * height * 4` bytes, tightly packed
    /// (`width * 4` bytes per row), and stays valid until the next call on
    /// this converter. Chroma planes are upsampled nearest-neighbor, so odd
    /// widths and heights are accepted.
    ///
    /// All preconditions are checked before the buffer is written: when an
    /// error is returned the previous frame contents are intact.
    ///
    /// # Errors
    ///
    /// * [`InvalidDimensions`] if `width` or `height` is zero
    ///
    /// * [`BufferTooSmall`] if `width * height * 4` exceeds the capacity
    ///   allocated at construction
    ///
    /// * [`StrideTooSmall`] if a stride is not [`STRIDE_AUTO`] and is less
    ///   than the minimum row size for `width` (`width` bytes for Y,
    ///   `(width + 1) / 2` bytes for U and V)
    ///
    /// * [`PlaneTooShort`] if a plane holds fewer than `stride * rows`
    ///   bytes, where `rows` is `height` for Y and `(height + 1) / 2` for
    ///   U and V
    ///
    /// [`InvalidDimensions`]: ErrorKind::InvalidDimensions
    /// [`BufferTooSmall`]: ErrorKind::BufferTooSmall
    /// [`StrideTooSmall`]: ErrorKind::StrideTooSmall
    /// [`PlaneTooShort`]: ErrorKind::PlaneTooShort
    pub fn convert(
        &mut self,
        width: u32,
        height: u32,
        y_plane: &[u8],
        y_stride: usize,
        u_plane: &[u8],
        u_stride: usize,
        v_plane: &[u8],
        v_stride: usize,
    ) -> Result<&[u8], ErrorKind> {
        if width == 0 || height == 0 {
            return Err(ErrorKind::InvalidDimensions);
        }

        let out_len = output_len(width, height).ok_or(ErrorKind::BufferTooSmall)?;
        if out_len > self.frame.len() {
            return Err(ErrorKind::BufferTooSmall);
        }

        let luma_rows = height as usize;
        let chroma_rows = plane::chroma_rows(height);
        let y_stride = plane::resolve_stride(y_stride, width as usize)?;
        let u_stride = plane::resolve_stride(u_stride, plane::chroma_samples(width))?;
        let v_stride = plane::resolve_stride(v_stride, plane::chroma_samples(width))?;

        plane::check_plane(y_plane, y_stride, luma_rows)?;
        plane::check_plane(u_plane, u_stride, chroma_rows)?;
        plane::check_plane(v_plane, v_stride, chroma_rows)?;

        convert::i420_to_abgr(
            width as usize,
            height as usize,
            y_plane,
            y_stride,
            u_plane,
            u_stride,
            v_plane,
            v_stride,
            self.color_space,
            &mut self.frame[..out_len],
        );

        self.frame_len = out_len;
        Ok(&self.frame[..out_len])
    }
}

fn output_len(width: u32, height: u32) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|area| area.checked_mul(4))
}
