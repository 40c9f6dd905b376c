// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Blit operation descriptor.
//!
//! A [`BlitDescriptor`] is the plain-data request for one compositing
//! operation: where the pixels come from, where they go, how they blend,
//! and how they are clipped. The caller fills one per call, the geometry
//! normalizer is the only stage allowed to mutate it, and it is discarded
//! after dispatch. Pixel memory is never copied; planes hold non-owning
//! [`BufferRef`] views into caller memory.

/// Source and destination pixel formats the renderer produces.
///
/// Only a subset is representable by the accelerator; the feasibility
/// filter checks membership against the selected generation's tables.
/// Indexed-palette surfaces are never hardware-representable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    /// 1-bit alpha mask.
    Alpha1,
    /// 8-bit alpha mask.
    Alpha8,
    /// 8-bit indexed palette (software only).
    Index8,
    Rgb565,
    Argb4444,
    Argb8888,
}

/// Porter-Duff and arithmetic transfer modes of the rendering pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransferMode {
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
    Plus,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
}

/// Sampling filter requested for scaled operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Bilinear,
}

/// Transform classification of the source-to-destination mapping.
///
/// Only translation and axis-aligned scaling are hardware-representable;
/// anything carrying rotation/skew terms is classified [`Affine`] and
/// rejected by the feasibility filter.
///
/// [`Affine`]: TransformClass::Affine
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformClass {
    Translate,
    Scale,
    Affine,
}

/// Transform classification plus the per-axis scale factors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub class: TransformClass,
    pub sx: f32,
    pub sy: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        class: TransformClass::Translate,
        sx: 0.0,
        sy: 0.0,
    };
}

/// Non-owning view of a caller-owned pixel buffer.
///
/// The engine only marshals the address and length into the driver
/// command; it never reads or writes through the pointer.
///
/// # Contract
///
/// The referenced memory must stay valid, and must not be mutated by any
/// other thread, for the duration of the synchronous blit call. This is a
/// caller obligation and is not enforced here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferRef {
    addr: *const u8,
    len: usize,
}

impl BufferRef {
    /// View over a read-only buffer (source or mask planes).
    pub fn from_slice(buf: &[u8]) -> Self {
        Self {
            addr: buf.as_ptr(),
            len: buf.len(),
        }
    }

    /// View over a writable buffer (destination plane). The hardware
    /// writes through this address; the borrow ends when the call returns.
    pub fn from_mut_slice(buf: &mut [u8]) -> Self {
        Self {
            addr: buf.as_ptr(),
            len: buf.len(),
        }
    }

    /// View over raw caller memory.
    ///
    /// # Safety
    ///
    /// `addr` must point to `len` bytes that satisfy the type-level
    /// contract above for the duration of the blit call.
    pub unsafe fn from_raw(addr: *const u8, len: usize) -> Self {
        Self { addr, len }
    }

    /// Start address as the driver command expects it.
    pub fn addr(&self) -> usize {
        self.addr as usize
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One image plane of a blit request.
///
/// `x`/`y`/`w`/`h` select the operated rectangle; `stride`, `full_height`
/// and `bpp` describe the whole underlying buffer, from which the
/// translator derives the hardware's buffer width (`stride / bpp`) and
/// total size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    pub buf: BufferRef,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Full-buffer row stride in bytes (not the rect width).
    pub stride: i32,
    /// Full buffer height in rows.
    pub full_height: i32,
    /// Bytes per pixel.
    pub bpp: i32,
    pub format: ColorFormat,
}

/// Destination clip window, exclusive right/bottom edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clip {
    pub l: i32,
    pub t: i32,
    pub r: i32,
    pub b: i32,
}

impl Clip {
    pub fn width(&self) -> i32 {
        self.r - self.l
    }

    pub fn height(&self) -> i32 {
        self.b - self.t
    }

    /// True when the window encloses no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Description of one blit/compositing request.
///
/// When `src` is `None` the operation is a solid fill: the accelerator
/// paints `fill_color` through the blend unit instead of fetching source
/// pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlitDescriptor {
    pub src: Option<Plane>,
    pub dst: Plane,
    pub msk: Option<Plane>,
    pub clip: Clip,
    pub mode: TransferMode,
    /// Global alpha. 255 is opaque; 256 is also accepted as opaque on
    /// generations using a 0-256 scale.
    pub alpha: u32,
    pub dither: bool,
    pub filter: FilterMode,
    /// Rotation angle in degrees; must be one of 0/90/180/270.
    pub rotation: i32,
    /// ARGB32 fill color, used when `src` is `None`.
    pub fill_color: u32,
    /// A color filter is attached to the paint. Never offloaded.
    pub color_filter: bool,
    pub transform: Transform,
}

impl BlitDescriptor {
    /// Builds a solid-fill rectangle request over an ARGB32 destination.
    ///
    /// `color` is a premultiplied native-order pixel; it is repacked to
    /// the ARGB32 layout the fill unit expects. The clip window is the
    /// target rectangle itself.
    pub fn fill_rect(
        device: BufferRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        row_bytes: i32,
        color: u32,
    ) -> Self {
        Self {
            src: None,
            dst: Plane {
                buf: device,
                x,
                y,
                w: width,
                h: height,
                stride: row_bytes,
                full_height: y + height,
                bpp: 4,
                format: ColorFormat::Argb8888,
            },
            msk: None,
            clip: Clip {
                l: x,
                t: y,
                r: x + width,
                b: y + height,
            },
            mode: TransferMode::SrcOver,
            alpha: 0xFF,
            dither: false,
            filter: FilterMode::Nearest,
            rotation: 0,
            fill_color: argb_from_premul(color),
            color_filter: false,
            transform: Transform::IDENTITY,
        }
    }

    /// Builds a 1-bit-mask fill over an ARGB32 destination (glyph blits).
    ///
    /// The mask plane covers exactly the clip rectangle and selects where
    /// `color` is composited SrcOver into the device.
    pub fn mask_blit(
        device: Plane,
        mask: BufferRef,
        mask_row_bytes: i32,
        clip: Clip,
        color: u32,
    ) -> Self {
        let (x, y) = (clip.l, clip.t);
        let (width, height) = (clip.width(), clip.height());
        Self {
            src: None,
            dst: Plane {
                x,
                y,
                w: width,
                h: height,
                ..device
            },
            msk: Some(Plane {
                buf: mask,
                x: 0,
                y: 0,
                w: width,
                h: height,
                stride: mask_row_bytes,
                full_height: height,
                bpp: 1,
                format: ColorFormat::Alpha1,
            }),
            clip,
            mode: TransferMode::SrcOver,
            alpha: 0xFF,
            dither: false,
            filter: FilterMode::Nearest,
            rotation: 0,
            fill_color: argb_from_premul(color),
            color_filter: false,
            transform: Transform::IDENTITY,
        }
    }

    /// True when source and destination extents differ and the stretch
    /// unit would engage.
    pub fn is_scaled(&self) -> bool {
        match self.src {
            Some(src) => src.w != self.dst.w || src.h != self.dst.h,
            None => match self.msk {
                Some(msk) => msk.w != self.dst.w || msk.h != self.dst.h,
                None => false,
            },
        }
    }

    /// True when global alpha is fully opaque on either alpha scale.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 255 || self.alpha == 256
    }
}

/// Repacks a premultiplied native-order color (A at bit 24, then B, G, R)
/// into the A-R-G-B word layout of the solid-fill register.
pub fn argb_from_premul(color: u32) -> u32 {
    let a = (color >> 24) & 0xFF;
    let b = (color >> 16) & 0xFF;
    let g = (color >> 8) & 0xFF;
    let r = color & 0xFF;

    (a << 24) | (r << 16) | (g << 8) | b
}
