// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Command translation.
//!
//! Maps a validated, normalized descriptor onto the accelerator's native
//! [`BlitCommand`], field for field. Translation is mechanical: every
//! admission decision has already been made, so a descriptor that cannot
//! be expressed here is an upstream bug, asserted in debug builds and
//! rejected in release.

use crate::desc::{BlitDescriptor, FilterMode, Plane};
use crate::generation::Capabilities;
use crate::verdict::Reject;
use blit_hal::{
    AddrSpace, BlitCommand, BlitOp, BufferDesc, ClipBlock, HwRect, HwRotation, ImageSpec,
    PremultMode, ScaleBlock, ScaleMode,
};

fn rotation(degrees: i32) -> Result<HwRotation, Reject> {
    match degrees {
        0 => Ok(HwRotation::Origin),
        90 => Ok(HwRotation::Rot90),
        180 => Ok(HwRotation::Rot180),
        270 => Ok(HwRotation::Rot270),
        other => Err(Reject::Rotation(other)),
    }
}

fn scale_mode(filter: FilterMode) -> ScaleMode {
    match filter {
        FilterMode::Nearest => ScaleMode::Nearest,
        FilterMode::Bilinear => ScaleMode::Bilinear,
    }
}

fn rect(plane: &Plane) -> HwRect {
    HwRect {
        left: plane.x,
        top: plane.y,
        right: plane.x + plane.w,
        bottom: plane.y + plane.h,
    }
}

/// Builds the per-plane image descriptor for a color plane.
///
/// Caller memory is submitted with user addressing, cacheable, unpinned;
/// the hardware's notion of the buffer width is the full row in pixels.
fn color_image(plane: &Plane, caps: &Capabilities) -> Result<ImageSpec, Reject> {
    let order = caps.channel_order(plane.format);
    let fmt = caps.hw_format(plane.format);
    let (order, fmt) = match (order, fmt) {
        (Some(order), Some(fmt)) => (order, fmt),
        _ => {
            debug_assert!(false, "untranslatable format {:?}", plane.format);
            return Err(Reject::Untranslatable);
        }
    };

    Ok(ImageSpec {
        addr: BufferDesc {
            space: AddrSpace::User,
            start: plane.buf.addr(),
            size: (plane.stride as usize) * (plane.full_height as usize),
            cacheable: true,
            pinned: false,
        },
        width: plane.stride / plane.bpp,
        height: plane.full_height,
        stride: plane.stride,
        order,
        fmt,
    })
}

/// Builds the mask image descriptor.
///
/// Masks keep a fixed channel order and report the rect width rather than
/// the full row, matching what the mask fetch unit expects.
fn mask_image(plane: &Plane, caps: &Capabilities) -> Result<ImageSpec, Reject> {
    let fmt = match caps.hw_format(plane.format) {
        Some(fmt) => fmt,
        None => {
            debug_assert!(false, "untranslatable mask format {:?}", plane.format);
            return Err(Reject::Untranslatable);
        }
    };

    Ok(ImageSpec {
        addr: BufferDesc {
            space: AddrSpace::User,
            start: plane.buf.addr(),
            size: (plane.stride as usize) * (plane.full_height as usize),
            cacheable: true,
            pinned: false,
        },
        width: plane.w,
        height: plane.full_height,
        stride: plane.stride,
        order: blit_hal::ChannelOrder::AxRgb,
        fmt,
    })
}

/// Translates a fully admitted descriptor into one native command.
///
/// The sequence number is left at zero; the dispatcher stamps its own
/// correlation ID when the command is actually submitted.
pub fn translate(d: &BlitDescriptor, caps: &Capabilities) -> Result<BlitCommand, Reject> {
    let rotate = rotation(d.rotation)?;

    let op = caps.blend_op(d.mode);
    if op == BlitOp::Unsupported {
        debug_assert!(false, "unsupported blend mode {:?} reached translation", d.mode);
        return Err(Reject::Untranslatable);
    }

    // The stretch unit engages only when extents differ; a mask-driven
    // fill scales by the mask extent instead.
    let scaling = match &d.src {
        Some(src) if src.w != d.dst.w || src.h != d.dst.h => Some(ScaleBlock {
            mode: scale_mode(d.filter),
            src_w: src.w,
            src_h: src.h,
            dst_w: d.dst.w,
            dst_h: d.dst.h,
        }),
        _ => match &d.msk {
            Some(msk) if msk.w != d.dst.w || msk.h != d.dst.h => Some(ScaleBlock {
                mode: scale_mode(d.filter),
                src_w: msk.w,
                src_h: msk.h,
                dst_w: d.dst.w,
                dst_h: d.dst.h,
            }),
            _ => None,
        },
    };

    let (src, src_rect) = match &d.src {
        Some(plane) => (Some(color_image(plane, caps)?), Some(rect(plane))),
        None => (None, None),
    };

    let dst = color_image(&d.dst, caps)?;
    let dst_rect = rect(&d.dst);

    let (msk, msk_rect) = match &d.msk {
        Some(plane) => (Some(mask_image(plane, caps)?), Some(rect(plane))),
        None => (None, None),
    };

    Ok(BlitCommand {
        op,
        global_alpha: d.alpha,
        premult: PremultMode::Premultiplied,
        dither: d.dither,
        rotate,
        solid_color: d.fill_color,
        scaling,
        src,
        src_rect,
        dst,
        dst_rect,
        msk,
        msk_rect,
        clip: ClipBlock {
            enable: true,
            x1: d.clip.l,
            y1: d.clip.t,
            x2: d.clip.r,
            y2: d.clip.b,
        },
        seq_no: 0,
    })
}
