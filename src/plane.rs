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
use crate::ErrorKind;

/// If a plane stride is assigned to this constant, the plane will be assumed to contain packed data
pub const STRIDE_AUTO: usize = 0;

/// Number of rows in each chroma plane under 4:2:0 subsampling.
pub(crate) fn chroma_rows(height: u32) -> usize {
    (height as usize).div_ceil(2)
}

/// Number of samples per chroma row under 4:2:0 subsampling.
pub(crate) fn chroma_samples(width: u32) -> usize {
    (width as usize).div_ceil(2)
}

/// Replaces `STRIDE_AUTO` with the packed row size and rejects explicit
/// strides below it.
pub(crate) fn resolve_stride(stride: usize, min_stride: usize) -> Result<usize, ErrorKind> {
    if stride == STRIDE_AUTO {
        Ok(min_stride)
    } else if stride < min_stride {
        Err(ErrorKind::StrideTooSmall)
    } else {
        Ok(stride)
    }
}

/// Checks a plane holds at least `stride * rows` bytes.
pub(crate) fn check_plane(plane: &[u8], stride: usize, rows: usize) -> Result<(), ErrorKind> {
    let required = stride.checked_mul(rows).ok_or(ErrorKind::PlaneTooShort)?;
    if plane.len() < required {
        return Err(ErrorKind::PlaneTooShort);
    }

    Ok(())
}

/// Compute the number of bytes required to store each plane of an I420
/// frame, given its dimensions and per-plane strides.
///
/// `strides` holds the Y, U and V strides in this order; [`STRIDE_AUTO`]
/// entries stand for tightly packed data (`width` bytes per luma row,
/// `(width + 1) / 2` bytes per chroma row). The returned array follows the
/// same plane order.
///
/// # Examples
/// ```
/// use frame_converter::{plane_sizes, STRIDE_AUTO};
///
/// let sizes = plane_sizes(640, 480, &[STRIDE_AUTO; 3]).unwrap();
/// assert_eq!(sizes, [640 * 480, 320 * 240, 320 * 240]);
/// ```
///
/// # Errors
///
/// * [`InvalidDimensions`] if `width` or `height` is zero, or a plane size
///   overflows `usize`
///
/// * [`StrideTooSmall`] if an explicit stride is less than the packed row
///   size for `width`
///
/// [`InvalidDimensions`]: ErrorKind::InvalidDimensions
/// [`StrideTooSmall`]: ErrorKind::StrideTooSmall
pub fn plane_sizes(
    width: u32,
    height: u32,
    strides: &[usize; 3],
) -> Result<[usize; 3], ErrorKind> {
    if width == 0 || height == 0 {
        return Err(ErrorKind::InvalidDimensions);
    }

    let y_stride = resolve_stride(strides[0], width as usize)?;
    let u_stride = resolve_stride(strides[1], chroma_samples(width))?;
    let v_stride = resolve_stride(strides[2], chroma_samples(width))?;

    let y_size = y_stride
        .checked_mul(height as usize)
        .ok_or(ErrorKind::InvalidDimensions)?;
    let u_size = u_stride
        .checked_mul(chroma_rows(height))
        .ok_or(ErrorKind::InvalidDimensions)?;
    let v_size = v_stride
        .checked_mul(chroma_rows(height))
        .ok_or(ErrorKind::InvalidDimensions)?;

    Ok([y_size, u_size, v_size])
}
