// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Offload cost model.
//!
//! Submitting a command to the accelerator has a fixed cost (driver entry,
//! cache maintenance, completion wait) that dwarfs small blits. The cost
//! model is the compromise between the two paths: it approves offload only
//! when the clipped pixel area is large enough to amortize that overhead.
//! Each generation picks its own strategy: a measured per-format,
//! per-shape threshold table on the older parts, a single area floor on
//! the V4L2 part.

use crate::desc::{BlitDescriptor, Clip, ColorFormat};
use crate::verdict::Reject;

/// Operation shape bucket of the threshold table.
///
/// Global alpha and scaling each change the per-pixel cost of both the
/// hardware and the software path, so thresholds are tabulated per
/// combination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bucket {
    OpaqueUnscaled = 0,
    TranslucentUnscaled = 1,
    OpaqueScaled = 2,
    TranslucentScaled = 3,
}

/// Classifies an operation into its threshold bucket.
pub fn bucket(d: &BlitDescriptor) -> Bucket {
    match (d.is_scaled(), d.is_opaque()) {
        (false, true) => Bucket::OpaqueUnscaled,
        (false, false) => Bucket::TranslucentUnscaled,
        (true, true) => Bucket::OpaqueScaled,
        (true, false) => Bucket::TranslucentScaled,
    }
}

/// Minimum effective pixel areas, indexed by
/// `[destination class][source class][bucket]`.
///
/// Classes are Rgb565 = 0, Argb4444 = 1, Argb8888 = 2; formats outside
/// those three have no entry and are rejected explicitly rather than
/// indexed by enum offset.
#[derive(Debug)]
pub struct CompromiseTable {
    pub thresholds: [[[i32; 4]; 3]; 3],
    /// Absolute clip area at or above which a bilinear-filtered, scaled
    /// operation is always offloaded: software filtering is expensive
    /// enough to override the table.
    pub filter_scale_floor: i32,
}

/// Per-generation offload approval strategy.
#[derive(Debug)]
pub enum CostModel {
    /// Threshold table over (formats, shape bucket) with an anisotropic
    /// effective-area metric.
    Table(&'static CompromiseTable),
    /// Single absolute clip-area floor.
    Floor { min_area: i32 },
    /// Offload everything feasible; for builds that disable the
    /// compromise heuristic.
    Always,
}

/// Table index of the formats the threshold tables cover.
fn format_class(format: ColorFormat) -> Option<usize> {
    match format {
        ColorFormat::Rgb565 => Some(0),
        ColorFormat::Argb4444 => Some(1),
        ColorFormat::Argb8888 => Some(2),
        _ => None,
    }
}

/// Effective pixel area of the clipped operation, in double precision so
/// exact-threshold clips compare consistently.
///
/// The width is weighted up and the height down: hardware throughput is
/// asymmetric between the row and column directions.
fn effective_area(clip: &Clip) -> f64 {
    (f64::from(clip.width()) * 1.2) * (f64::from(clip.height()) * 0.8)
}

impl CostModel {
    /// Decides whether offloading this feasible operation beats software.
    ///
    /// Approval is monotone in clip area: for a fixed format pair and
    /// bucket, growing the clip can never turn an approval into a
    /// rejection.
    pub fn approves(&self, d: &BlitDescriptor) -> Result<(), Reject> {
        match self {
            CostModel::Table(table) => table.approves(d),
            CostModel::Floor { min_area } => {
                if d.clip.width() * d.clip.height() < *min_area {
                    Err(Reject::BelowCostThreshold)
                } else {
                    Ok(())
                }
            }
            CostModel::Always => Ok(()),
        }
    }
}

impl CompromiseTable {
    fn approves(&self, d: &BlitDescriptor) -> Result<(), Reject> {
        let dst_class = match format_class(d.dst.format) {
            Some(c) => c,
            None => return Err(Reject::DstFormat(d.dst.format)),
        };
        // Solid fills carry no source plane; the fill is generated in the
        // destination format, so the destination class stands in.
        let src_format = d.src.map(|s| s.format).unwrap_or(d.dst.format);
        let src_class = match format_class(src_format) {
            Some(c) => c,
            None => return Err(Reject::SrcFormat(src_format)),
        };

        let shape = bucket(d);

        if matches!(shape, Bucket::OpaqueScaled | Bucket::TranslucentScaled)
            && d.filter == crate::desc::FilterMode::Bilinear
            && d.clip.width() * d.clip.height() >= self.filter_scale_floor
        {
            return Ok(());
        }

        let threshold = self.thresholds[dst_class][src_class][shape as usize];
        if effective_area(&d.clip) < f64::from(threshold) {
            Err(Reject::BelowCostThreshold)
        } else {
            Ok(())
        }
    }
}
