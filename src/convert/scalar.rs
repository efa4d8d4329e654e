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
use crate::color_space::ColorSpace;
use crate::convert::common::{fix_to_u8_sat, mulhi_i32, BACKWARD_WEIGHTS, DEFAULT_ALPHA, FIX6};

/// Converts one I420 frame into tightly packed ABGR (memory order
/// r, g, b, a).
///
/// Chroma is upsampled nearest-neighbor: each chroma sample covers a 2x2
/// luma block, truncated at the right and bottom edges for odd dimensions.
///
/// Callers must have validated strides and plane lengths already; `dst`
/// must be exactly `width * height * 4` bytes.
pub(crate) fn i420_to_abgr(
    width: usize,
    height: usize,
    y_plane: &[u8],
    y_stride: usize,
    u_plane: &[u8],
    u_stride: usize,
    v_plane: &[u8],
    v_stride: usize,
    color_space: ColorSpace,
    dst: &mut [u8],
) {
    let [xxym, rcrm, gcrm, gcbm, bcbm, rn, gp, bn] = BACKWARD_WEIGHTS[color_space as usize];

    let chroma_width = width.div_ceil(2);
    let abgr_stride = 4 * width;

    for (row, abgr_row) in dst.chunks_exact_mut(abgr_stride).take(height).enumerate() {
        let y_row = &y_plane[row * y_stride..row * y_stride + width];
        let u_row = &u_plane[(row / 2) * u_stride..(row / 2) * u_stride + chroma_width];
        let v_row = &v_plane[(row / 2) * v_stride..(row / 2) * v_stride + chroma_width];

        // Two horizontally adjacent pixels share one chroma sample.
        let groups = abgr_row
            .chunks_mut(8)
            .zip(y_row.chunks(2))
            .zip(u_row.iter().zip(v_row.iter()));

        for ((abgr_pair, y_pair), (&cb, &cr)) in groups {
            let cb = i32::from(cb);
            let cr = i32::from(cr);

            let sr = mulhi_i32(cr, rcrm) - rn;
            let sg = -mulhi_i32(cb, gcbm) - mulhi_i32(cr, gcrm) + gp;
            let sb = mulhi_i32(cb, bcbm) - bn;

            for (abgr, &luma) in abgr_pair.chunks_exact_mut(4).zip(y_pair.iter()) {
                let sy = mulhi_i32(i32::from(luma), xxym);

                abgr[0] = fix_to_u8_sat(sy + sr, FIX6);
                abgr[1] = fix_to_u8_sat(sy + sg, FIX6);
                abgr[2] = fix_to_u8_sat(sy + sb, FIX6);
                abgr[3] = DEFAULT_ALPHA;
            }
        }
    }
}
