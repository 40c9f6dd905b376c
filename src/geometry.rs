// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Geometry normalization.
//!
//! The accelerator cannot address pixels at negative destination
//! coordinates, but the renderer legitimately asks for partially
//! off-buffer placements. Before validation, the normalizer clamps such a
//! destination back into its buffer and shrinks the source rectangle
//! proportionally in 14-bit fixed point, so the visible part of the blit
//! is unchanged. Afterwards the clip window is intersected with the
//! (possibly corrected) destination rectangle.

use crate::desc::BlitDescriptor;

/// Fractional bits of the source-edge interpolation.
const FIXED_POINT_BITS: u32 = 14;

/// Rounding term for half-up rounding before the shift back.
const FIXED_POINT_HALF: i64 = 1 << (FIXED_POINT_BITS - 1);

/// Corrects a destination placed at negative coordinates.
///
/// Each negative axis is handled independently:
/// 1. the destination extent is clamped to the part that falls inside the
///    full buffer (width derived from `stride / bpp`, height from
///    `full_height`),
/// 2. both source edges on that axis are recomputed by fixed-point linear
///    interpolation, with the *pre-clamp* destination extent as divisor,
/// 3. the destination origin is reset to 0.
///
/// Idempotent when both origins are already non-negative. Returns `false`
/// when the correction is impossible (zero-area destination, non-positive
/// stride or bytes-per-pixel) or when a corrected rectangle degenerates;
/// the caller treats that as a rejection, never an error.
pub fn normalize(d: &mut BlitDescriptor) -> bool {
    if d.dst.x >= 0 && d.dst.y >= 0 {
        return true;
    }

    if d.dst.bpp <= 0 || d.dst.stride <= 0 {
        return false;
    }

    // All interpolation runs in i64 on values widened straight from the
    // descriptor, so an extreme origin or extent cannot overflow before
    // the coordinate-range feasibility check sees the result. The
    // visible-extent guard also bounds both fractions by one, keeping the
    // fixed-point products within i64.
    if d.dst.x < 0 {
        let full_w = i64::from(d.dst.stride / d.dst.bpp);
        let visible = (i64::from(d.dst.w) + i64::from(d.dst.x)).min(full_w);
        if visible <= 0 {
            return false;
        }

        let orig_w = i64::from(d.dst.w);
        let near = ((-i64::from(d.dst.x)) << FIXED_POINT_BITS) / orig_w;
        let far = ((visible - i64::from(d.dst.x)) << FIXED_POINT_BITS) / orig_w;

        if let Some(src) = d.src.as_mut() {
            let sw = i64::from(src.w);
            let lo = (sw * near + FIXED_POINT_HALF) >> FIXED_POINT_BITS;
            let hi = (sw * far + FIXED_POINT_HALF) >> FIXED_POINT_BITS;
            let sx = i64::from(src.x) + lo;
            if sx > i64::from(i32::MAX) || sx < i64::from(i32::MIN) {
                return false;
            }
            src.x = sx as i32;
            src.w = (hi - lo) as i32;
        }

        d.dst.w = visible as i32;
        d.dst.x = 0;
    }

    if d.dst.y < 0 {
        let visible = (i64::from(d.dst.h) + i64::from(d.dst.y)).min(i64::from(d.dst.full_height));
        if visible <= 0 {
            return false;
        }

        let orig_h = i64::from(d.dst.h);
        let near = ((-i64::from(d.dst.y)) << FIXED_POINT_BITS) / orig_h;
        let far = ((visible - i64::from(d.dst.y)) << FIXED_POINT_BITS) / orig_h;

        if let Some(src) = d.src.as_mut() {
            let sh = i64::from(src.h);
            let lo = (sh * near + FIXED_POINT_HALF) >> FIXED_POINT_BITS;
            let hi = (sh * far + FIXED_POINT_HALF) >> FIXED_POINT_BITS;
            let sy = i64::from(src.y) + lo;
            if sy > i64::from(i32::MAX) || sy < i64::from(i32::MIN) {
                return false;
            }
            src.y = sy as i32;
            src.h = (hi - lo) as i32;
        }

        d.dst.h = visible as i32;
        d.dst.y = 0;
    }

    if d.dst.w <= 0 || d.dst.h <= 0 {
        return false;
    }
    if let Some(src) = d.src {
        if src.w <= 0 || src.h <= 0 {
            return false;
        }
    }

    true
}

/// Intersects the clip window with the destination rectangle.
///
/// Runs after origin correction so the clip can only shrink. A degenerate
/// result is detected by the caller via [`Clip::is_degenerate`].
///
/// [`Clip::is_degenerate`]: crate::desc::Clip::is_degenerate
pub fn intersect_clip(d: &mut BlitDescriptor) {
    if d.clip.l < d.dst.x {
        d.clip.l = d.dst.x;
    }
    if d.clip.t < d.dst.y {
        d.clip.t = d.dst.y;
    }
    if d.clip.r > d.dst.x + d.dst.w {
        d.clip.r = d.dst.x + d.dst.w;
    }
    if d.clip.b > d.dst.y + d.dst.h {
        d.clip.b = d.dst.y + d.dst.h;
    }
}
