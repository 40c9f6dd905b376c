// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # Blit Accelerator HAL
//!
//! Native command structures and the driver seam for the 2D blit
//! accelerator. This crate defines the exact submission format the hardware
//! expects (image planes, blend operation, scaling, clipping) plus the
//! [`Accelerator`] trait through which a command is handed to the driver.
//!
//! The engine crate (`edgefirst-blit`) decides *whether* and *how* to build
//! a [`BlitCommand`]; this crate only describes *what* the hardware consumes.
//! The driver itself (ioctl or ring-buffer protocol) lives behind
//! [`Accelerator`] and is out of scope here.

pub use libc::c_int;

/// Hardware blend operation selector.
///
/// One entry per register value the accelerator understands. Transfer modes
/// the hardware cannot express map to [`BlitOp::Unsupported`]; the engine
/// must have rejected those before translation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlitOp {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcAtop,
    DstAtop,
    Xor,
    Add,
    Multiply,
    Screen,
    Darken,
    Lighten,
    Unsupported,
}

/// Rotation selector, clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HwRotation {
    Origin,
    Rot90,
    Rot180,
    Rot270,
}

/// Channel arrangement of a plane as the accelerator reads it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Alpha/padding first, then R, G, B (16-bit RGB packings).
    AxRgb,
    /// R, G, B first, alpha/padding last (4444 packings).
    RgbAx,
    /// Alpha/padding first, then B, G, R (32-bit ARGB packings).
    AxBgr,
}

/// Pixel format selector of the accelerator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HwFormat {
    Rgb565,
    Argb4444,
    Argb8888,
    Msk1Bit,
    Msk8Bit,
}

/// Scaling filter the stretch unit applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    Nearest,
    Bilinear,
}

/// Alpha interpretation of the source pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PremultMode {
    Premultiplied,
    NonPremultiplied,
}

/// Addressing mode of a plane buffer.
///
/// Caller memory is always submitted as user-space addresses; the driver
/// resolves or pins the pages itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddrSpace {
    User,
}

/// One plane buffer as the hardware sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferDesc {
    pub space: AddrSpace,
    /// Start address in the caller's address space.
    pub start: usize,
    /// Total buffer size in bytes (stride x full height).
    pub size: usize,
    pub cacheable: bool,
    pub pinned: bool,
}

/// Full description of one image plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageSpec {
    pub addr: BufferDesc,
    /// Buffer width in pixels, derived as stride / bytes-per-pixel.
    pub width: i32,
    /// Full buffer height in rows.
    pub height: i32,
    /// Row stride in bytes.
    pub stride: i32,
    pub order: ChannelOrder,
    pub fmt: HwFormat,
}

/// Rectangle in plane coordinates, edges exclusive on the right/bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HwRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Stretch unit configuration, present only when extents differ.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScaleBlock {
    pub mode: ScaleMode,
    pub src_w: i32,
    pub src_h: i32,
    pub dst_w: i32,
    pub dst_h: i32,
}

/// Destination clip window, always enabled by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClipBlock {
    pub enable: bool,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// One complete submission for the accelerator.
///
/// Field layout mirrors the driver's blit request: operation and global
/// attributes first, then the optional stretch block, the three planes with
/// their rects, the clip window, and the diagnostic sequence number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlitCommand {
    pub op: BlitOp,
    pub global_alpha: u32,
    pub premult: PremultMode,
    pub dither: bool,
    pub rotate: HwRotation,
    /// ARGB32 fill color, consumed when no source plane is attached.
    pub solid_color: u32,
    pub scaling: Option<ScaleBlock>,
    pub src: Option<ImageSpec>,
    pub src_rect: Option<HwRect>,
    pub dst: ImageSpec,
    pub dst_rect: HwRect,
    pub msk: Option<ImageSpec>,
    pub msk_rect: Option<HwRect>,
    pub clip: ClipBlock,
    /// Submission correlation ID. Wraps silently; diagnostic only.
    pub seq_no: u32,
}

/// Synchronous driver interface for the blit accelerator.
///
/// Both calls block until the hardware reports completion. A negative
/// return is a hard failure: the operation produced no partial visual
/// effect and the caller must render in software instead.
pub trait Accelerator {
    /// Submit one command and wait for it to finish.
    fn submit(&self, cmd: &BlitCommand) -> c_int;

    /// Wait for every previously submitted command to retire.
    ///
    /// Only needed by callers that submit asynchronously; the synchronous
    /// path in [`submit`](Accelerator::submit) already waits.
    fn wait_idle(&self) -> c_int;
}
