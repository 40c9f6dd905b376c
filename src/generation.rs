// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Per-generation capability tables.
//!
//! Three generations of the blit accelerator share one pipeline; what
//! differs between them is data. Each [`Generation`] selects an immutable
//! [`Capabilities`] describing the format and blend sets it can execute,
//! the channel-order and hardware-format tables the translator consumes,
//! and the cost-model strategy tuned for that part. The engine picks the
//! tables once at initialization, never by branching per call.

use crate::cost::{CompromiseTable, CostModel};
use crate::desc::{ColorFormat, TransferMode};
use blit_hal::{BlitOp, ChannelOrder, HwFormat};

/// Accelerator generation the engine is driving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Generation {
    /// Second-generation part, hybrid-tuned cost thresholds.
    Gen2,
    /// Fourth-generation part, full blend set, 0-256 alpha scale.
    Gen4,
    /// V4L2-driven part: reduced format/blend sets, floor cost model.
    V4L2,
}

impl Generation {
    /// The immutable capability tables of this generation.
    pub fn capabilities(self) -> &'static Capabilities {
        match self {
            Generation::Gen2 => &GEN2,
            Generation::Gen4 => &GEN4,
            Generation::V4L2 => &V4L2,
        }
    }
}

/// Everything the pipeline needs to know about one generation.
///
/// Pure data: the feasibility filter checks membership in the sets, the
/// cost model applies the strategy, the translator reads the lookup
/// tables.
#[derive(Debug)]
pub struct Capabilities {
    pub name: &'static str,
    /// Source formats the fetch unit decodes.
    pub src_formats: &'static [ColorFormat],
    /// Destination formats the write-back unit encodes.
    pub dst_formats: &'static [ColorFormat],
    /// Transfer modes the blend unit implements.
    pub blend_modes: &'static [TransferMode],
    /// Modes the blend unit only evaluates correctly at full opacity;
    /// rejected whenever global alpha is not 255.
    pub translucent_restricted: &'static [TransferMode],
    /// Channel order per color format, as the fetch/write-back units
    /// expect it.
    pub channel_orders: &'static [(ColorFormat, ChannelOrder)],
    /// Hardware format selector per color format.
    pub hw_formats: &'static [(ColorFormat, HwFormat)],
    /// Transfer mode to hardware blend operation.
    pub blend_ops: &'static [(TransferMode, BlitOp)],
    pub cost: CostModel,
}

impl Capabilities {
    pub fn supports_src_format(&self, format: ColorFormat) -> bool {
        self.src_formats.contains(&format)
    }

    pub fn supports_dst_format(&self, format: ColorFormat) -> bool {
        self.dst_formats.contains(&format)
    }

    pub fn supports_blend(&self, mode: TransferMode) -> bool {
        self.blend_modes.contains(&mode)
    }

    pub fn restricts_translucent(&self, mode: TransferMode) -> bool {
        self.translucent_restricted.contains(&mode)
    }

    pub fn channel_order(&self, format: ColorFormat) -> Option<ChannelOrder> {
        self.channel_orders
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, o)| *o)
    }

    pub fn hw_format(&self, format: ColorFormat) -> Option<HwFormat> {
        self.hw_formats
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, h)| *h)
    }

    /// Hardware blend operation for a transfer mode; modes with no table
    /// entry are not expressible.
    pub fn blend_op(&self, mode: TransferMode) -> BlitOp {
        self.blend_ops
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, op)| *op)
            .unwrap_or(BlitOp::Unsupported)
    }
}

pub const RGB_FORMATS: &[ColorFormat] = &[
    ColorFormat::Rgb565,
    ColorFormat::Argb4444,
    ColorFormat::Argb8888,
];

pub const V4L2_FORMATS: &[ColorFormat] = &[ColorFormat::Rgb565, ColorFormat::Argb8888];

pub const FULL_BLEND_SET: &[TransferMode] = &[
    TransferMode::SrcOver,
    TransferMode::Clear,
    TransferMode::Src,
    TransferMode::Dst,
    TransferMode::SrcIn,
    TransferMode::DstIn,
    TransferMode::DstOut,
    TransferMode::SrcAtop,
    TransferMode::Plus,
    TransferMode::Multiply,
    TransferMode::Screen,
    TransferMode::Darken,
    TransferMode::Lighten,
    TransferMode::DstOver,
    TransferMode::SrcOut,
    TransferMode::DstAtop,
    TransferMode::Xor,
];

pub const V4L2_BLEND_SET: &[TransferMode] = &[
    TransferMode::SrcOver,
    TransferMode::Clear,
    TransferMode::Src,
    TransferMode::Dst,
];

/// Modes whose hardware evaluation is only correct at full source opacity.
pub const TRANSLUCENT_RESTRICTED: &[TransferMode] = &[
    TransferMode::Multiply,
    TransferMode::Screen,
    TransferMode::Lighten,
    TransferMode::Darken,
    TransferMode::DstOver,
    TransferMode::SrcOut,
    TransferMode::DstAtop,
    TransferMode::Xor,
];

pub const CHANNEL_ORDERS: &[(ColorFormat, ChannelOrder)] = &[
    (ColorFormat::Rgb565, ChannelOrder::AxRgb),
    (ColorFormat::Argb4444, ChannelOrder::RgbAx),
    (ColorFormat::Argb8888, ChannelOrder::AxBgr),
];

pub const HW_FORMATS: &[(ColorFormat, HwFormat)] = &[
    (ColorFormat::Alpha1, HwFormat::Msk1Bit),
    (ColorFormat::Alpha8, HwFormat::Msk8Bit),
    (ColorFormat::Rgb565, HwFormat::Rgb565),
    (ColorFormat::Argb4444, HwFormat::Argb4444),
    (ColorFormat::Argb8888, HwFormat::Argb8888),
];

pub const BLEND_OPS: &[(TransferMode, BlitOp)] = &[
    (TransferMode::Clear, BlitOp::Clear),
    (TransferMode::Src, BlitOp::Src),
    (TransferMode::Dst, BlitOp::Dst),
    (TransferMode::SrcOver, BlitOp::SrcOver),
    (TransferMode::DstOver, BlitOp::DstOver),
    (TransferMode::SrcIn, BlitOp::SrcIn),
    (TransferMode::DstIn, BlitOp::DstIn),
    (TransferMode::SrcOut, BlitOp::SrcOut),
    (TransferMode::DstOut, BlitOp::DstOut),
    (TransferMode::SrcAtop, BlitOp::SrcAtop),
    (TransferMode::DstAtop, BlitOp::DstAtop),
    (TransferMode::Xor, BlitOp::Xor),
    (TransferMode::Plus, BlitOp::Add),
    (TransferMode::Multiply, BlitOp::Multiply),
    (TransferMode::Screen, BlitOp::Screen),
    (TransferMode::Overlay, BlitOp::Unsupported),
    (TransferMode::Darken, BlitOp::Darken),
    (TransferMode::Lighten, BlitOp::Lighten),
    (TransferMode::ColorDodge, BlitOp::Unsupported),
    (TransferMode::ColorBurn, BlitOp::Unsupported),
    (TransferMode::HardLight, BlitOp::Unsupported),
    (TransferMode::SoftLight, BlitOp::Unsupported),
    (TransferMode::Difference, BlitOp::Unsupported),
    (TransferMode::Exclusion, BlitOp::Unsupported),
];

/* Minimum effective pixel areas per [dst][src][bucket], measured against
 * the software path on the respective part.
 *     [dst]/[src]: 0 Rgb565, 1 Argb4444, 2 Argb8888
 *     [bucket]:    global alpha / scale
 *     0: X / X    1: O / X    2: X / O    3: O / O
 */
static GEN4_TABLE: CompromiseTable = CompromiseTable {
    thresholds: [
        [
            [480 * 800, 78 * 130, 168 * 280, 66 * 110],
            [78 * 130, 54 * 90, 80 * 140, 66 * 110],
            [204 * 340, 216 * 360, 102 * 170, 72 * 120],
        ],
        [
            [54 * 90, 42 * 70, 54 * 90, 42 * 70],
            [54 * 90, 48 * 80, 54 * 90, 48 * 80],
            [66 * 110, 54 * 90, 66 * 110, 54 * 90],
        ],
        [
            [84 * 140, 54 * 90, 84 * 130, 54 * 90],
            [102 * 170, 78 * 130, 96 * 160, 78 * 130],
            [180 * 300, 66 * 110, 96 * 160, 72 * 120],
        ],
    ],
    filter_scale_floor: 48 * 80,
};

static GEN2_TABLE: CompromiseTable = CompromiseTable {
    thresholds: [
        [
            [360 * 600, 78 * 130, 168 * 280, 66 * 110],
            [78 * 130, 54 * 90, 80 * 140, 66 * 110],
            [168 * 280, 162 * 270, 102 * 170, 72 * 120],
        ],
        [
            [54 * 90, 42 * 70, 54 * 90, 42 * 70],
            [54 * 90, 48 * 80, 54 * 90, 48 * 80],
            [66 * 110, 54 * 90, 66 * 110, 54 * 90],
        ],
        [
            [84 * 140, 54 * 90, 84 * 130, 54 * 90],
            [102 * 170, 78 * 130, 96 * 160, 78 * 130],
            [120 * 200, 66 * 110, 96 * 160, 72 * 120],
        ],
    ],
    filter_scale_floor: 48 * 80,
};

static GEN2: Capabilities = Capabilities {
    name: "gen2",
    src_formats: RGB_FORMATS,
    dst_formats: RGB_FORMATS,
    blend_modes: FULL_BLEND_SET,
    translucent_restricted: TRANSLUCENT_RESTRICTED,
    channel_orders: CHANNEL_ORDERS,
    hw_formats: HW_FORMATS,
    blend_ops: BLEND_OPS,
    cost: CostModel::Table(&GEN2_TABLE),
};

static GEN4: Capabilities = Capabilities {
    name: "gen4",
    src_formats: RGB_FORMATS,
    dst_formats: RGB_FORMATS,
    blend_modes: FULL_BLEND_SET,
    translucent_restricted: TRANSLUCENT_RESTRICTED,
    channel_orders: CHANNEL_ORDERS,
    hw_formats: HW_FORMATS,
    blend_ops: BLEND_OPS,
    cost: CostModel::Table(&GEN4_TABLE),
};

static V4L2: Capabilities = Capabilities {
    name: "v4l2",
    src_formats: V4L2_FORMATS,
    dst_formats: V4L2_FORMATS,
    blend_modes: V4L2_BLEND_SET,
    // The reduced blend set already excludes every restricted mode.
    translucent_restricted: &[],
    channel_orders: CHANNEL_ORDERS,
    hw_formats: HW_FORMATS,
    blend_ops: BLEND_OPS,
    cost: CostModel::Floor {
        min_area: 480 * 480,
    },
};
