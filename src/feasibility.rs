// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Feasibility filter.
//!
//! Pure total predicates over a normalized descriptor: can the selected
//! accelerator generation execute this operation at all. Every check is a
//! capability question answered from the generation's tables; nothing
//! here consults the driver or mutates the descriptor. A failed check is
//! a rejection the caller answers with the software path.

use crate::desc::{BlitDescriptor, Plane, TransferMode, TransformClass};
use crate::generation::Capabilities;
use crate::verdict::Reject;
use tracing::debug;

/// Coordinate bound guarding the downstream fixed-point math.
const COORD_LIMIT: i32 = 8000;

fn plane_layout_ok(plane: &Plane) -> bool {
    plane.stride > 0 && plane.bpp > 0
}

fn within_coord_limit(plane: &Plane) -> bool {
    // Widened so a hostile extent cannot wrap past the bound.
    let limit = i64::from(COORD_LIMIT);
    i64::from(plane.x) + i64::from(plane.w) <= limit
        && i64::from(plane.y) + i64::from(plane.h) <= limit
}

/// Checks whether the hardware can execute the operation at all.
///
/// Evaluated after geometry normalization. Invariant violations (a plane
/// with zero stride or bytes-per-pixel) are answered as rejections, never
/// faults.
pub fn check_possible(d: &BlitDescriptor, caps: &Capabilities) -> Result<(), Reject> {
    if let Some(src) = &d.src {
        if !caps.supports_src_format(src.format) {
            return Err(Reject::SrcFormat(src.format));
        }
        if !plane_layout_ok(src) {
            return Err(Reject::PlaneLayout);
        }
    }

    if !caps.supports_dst_format(d.dst.format) {
        return Err(Reject::DstFormat(d.dst.format));
    }
    if !plane_layout_ok(&d.dst) {
        return Err(Reject::PlaneLayout);
    }

    if let Some(msk) = &d.msk {
        if !plane_layout_ok(msk) {
            return Err(Reject::PlaneLayout);
        }
    }

    if !caps.supports_blend(d.mode) {
        return Err(Reject::BlendMode(d.mode));
    }

    if d.color_filter {
        return Err(Reject::ColorFilter);
    }

    if d.transform.class == TransformClass::Affine {
        return Err(Reject::AffineTransform);
    }
    if d.transform.sx < 0.0 || d.transform.sy < 0.0 {
        return Err(Reject::NegativeScale);
    }

    if let Some(src) = &d.src {
        if !within_coord_limit(src) {
            return Err(Reject::CoordinateRange);
        }
    }
    if !within_coord_limit(&d.dst) {
        return Err(Reject::CoordinateRange);
    }

    if d.clip.t < 0 || d.clip.b < 0 || d.clip.l < 0 || d.clip.r < 0 {
        debug!(
            "invalid clip window: TBLR = ({}, {}, {}, {})",
            d.clip.t, d.clip.b, d.clip.l, d.clip.r
        );
        return Err(Reject::InvalidClip);
    }
    if d.clip.t >= d.clip.b || d.clip.l >= d.clip.r {
        debug!(
            "inverted clip window: TBLR = ({}, {}, {}, {})",
            d.clip.t, d.clip.b, d.clip.l, d.clip.r
        );
        return Err(Reject::InvalidClip);
    }

    Ok(())
}

/// Rejects blend modes the hardware only evaluates correctly at full
/// opacity when the global alpha is not 255.
///
/// This is a correctness limitation of the blend unit, not a heuristic:
/// the non-linear operators ignore the global alpha stage.
pub fn check_translucent_modes(d: &BlitDescriptor, caps: &Capabilities) -> Result<(), Reject> {
    if caps.restricts_translucent(d.mode) && d.alpha != 255 {
        return Err(Reject::TranslucentBlend(d.mode));
    }
    Ok(())
}

/// True exactly when the transfer mode is the keep-destination identity.
///
/// The whole pipeline short-circuits to a no-op success on this mode: the
/// destination already holds the result.
pub fn is_dst_mode(d: &BlitDescriptor) -> bool {
    d.mode == TransferMode::Dst
}
