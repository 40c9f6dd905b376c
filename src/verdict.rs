// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Pipeline outcome types.
//!
//! Every stage of the offload pipeline yields a tagged pass/reject result;
//! the engine folds them into a single [`Verdict`] for the caller. All
//! signaling is by value: a rejection is the normal "render it in
//! software" answer, never a fault.

use crate::desc::{ColorFormat, TransferMode};
use core::fmt;

/// Reason an operation was not (fully) executed in hardware.
///
/// Grouped by the stage that produced it: geometry, feasibility,
/// cost model, translation, dispatch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Reject {
    /// Origin correction produced an empty source or destination rect.
    DegenerateGeometry,
    /// Source color format outside the generation's source set.
    SrcFormat(ColorFormat),
    /// Destination color format outside the generation's destination set.
    DstFormat(ColorFormat),
    /// Transfer mode outside the generation's blend set.
    BlendMode(TransferMode),
    /// Blend mode the hardware only evaluates correctly at full opacity.
    TranslucentBlend(TransferMode),
    /// A color filter is attached; only the software path applies those.
    ColorFilter,
    /// General affine transform; only translation/scale is representable.
    AffineTransform,
    /// Negative scale factor.
    NegativeScale,
    /// A rect exceeds the 8000-unit coordinate bound.
    CoordinateRange,
    /// Clip window with negative or inverted components.
    InvalidClip,
    /// Clip window left empty after intersection with the destination.
    DegenerateClip,
    /// Plane with a non-null address but zero stride or bytes-per-pixel.
    PlaneLayout,
    /// Feasible, but too small to beat the software path.
    BelowCostThreshold,
    /// Rotation angle outside 0/90/180/270 degrees.
    Rotation(i32),
    /// Descriptor reached translation with a value the command format
    /// cannot express; upstream admission should have caught it.
    Untranslatable,
    /// The driver reported a negative submission status.
    Driver(i32),
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::DegenerateGeometry => write!(f, "degenerate geometry after origin correction"),
            Reject::SrcFormat(c) => write!(f, "unsupported source format {c:?}"),
            Reject::DstFormat(c) => write!(f, "unsupported destination format {c:?}"),
            Reject::BlendMode(m) => write!(f, "unsupported blend mode {m:?}"),
            Reject::TranslucentBlend(m) => {
                write!(f, "blend mode {m:?} requires opaque global alpha")
            }
            Reject::ColorFilter => write!(f, "color filter attached"),
            Reject::AffineTransform => write!(f, "general affine transform"),
            Reject::NegativeScale => write!(f, "negative scale factor"),
            Reject::CoordinateRange => write!(f, "coordinate exceeds 8000-unit bound"),
            Reject::InvalidClip => write!(f, "invalid clip window"),
            Reject::DegenerateClip => write!(f, "empty clip window"),
            Reject::PlaneLayout => write!(f, "plane with zero stride or bytes-per-pixel"),
            Reject::BelowCostThreshold => write!(f, "below offload cost threshold"),
            Reject::Rotation(deg) => write!(f, "unsupported rotation {deg} degrees"),
            Reject::Untranslatable => write!(f, "descriptor not expressible as a command"),
            Reject::Driver(status) => write!(f, "driver submission failed with {status}"),
        }
    }
}

/// Outcome of one blit request.
///
/// Two distinguishable successes exist: the hardware executed the
/// operation, or the operation was the keep-destination identity and
/// nothing needed to run. Both are success to the caller; the distinction
/// is kept for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Verdict {
    /// The accelerator executed the operation.
    Executed,
    /// Identity (Dst) mode: succeeded without touching the hardware.
    Noop,
    /// Not offloaded; the caller renders this operation in software.
    Rejected(Reject),
}

impl Verdict {
    /// True for both success states.
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Executed | Verdict::Noop)
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Verdict::Noop)
    }

    /// The rejection reason, when there is one.
    pub fn rejection(&self) -> Option<Reject> {
        match self {
            Verdict::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Executed => write!(f, "executed"),
            Verdict::Noop => write!(f, "no-op"),
            Verdict::Rejected(r) => write!(f, "rejected: {r}"),
        }
    }
}
