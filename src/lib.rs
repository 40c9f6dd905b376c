// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # EdgeFirst 2D Blit Offload Engine
//!
//! This library decides whether a 2D compositing operation (copy, scale,
//! or blend of a source image onto a destination, with optional mask,
//! clip, and rotation) can and should run on the 2D blit accelerator,
//! corrects its geometry for hardware constraints, translates it into the
//! accelerator's native command format, and dispatches it synchronously.
//! A rejected operation is the normal case, not an error: the caller
//! simply renders that operation in software.
//!
//! ## Pipeline
//!
//! - **Geometry normalizer**: clamps negative destination placement and
//!   shrinks the source proportionally in fixed point.
//! - **Feasibility filter**: pure capability predicates against the
//!   selected generation's format/blend tables.
//! - **Cost model**: per-generation heuristic deciding whether offload
//!   beats the software path for this size and shape.
//! - **Command translator**: field-for-field marshalling into the
//!   native command structures of the `blit-hal` crate.
//! - **Dispatcher**: synchronous submit with a diagnostic sequence
//!   number; distinguishes executed, no-op, and rejected outcomes.
//!
//! ## Example
//!
//! ```no_run
//! use blit_hal::{c_int, Accelerator, BlitCommand};
//! use edgefirst_blit::{BlitDescriptor, BlitEngine, BufferRef, Generation};
//!
//! struct Driver; // opens the real device in production
//!
//! impl Accelerator for Driver {
//!     fn submit(&self, _cmd: &BlitCommand) -> c_int {
//!         0
//!     }
//!     fn wait_idle(&self) -> c_int {
//!         0
//!     }
//! }
//!
//! let engine = BlitEngine::new(Generation::Gen4, Driver);
//!
//! let mut frame = vec![0u8; 640 * 480 * 4];
//! let mut op = BlitDescriptor::fill_rect(
//!     BufferRef::from_mut_slice(&mut frame),
//!     0,
//!     0,
//!     640,
//!     480,
//!     640 * 4,
//!     0xFF00_00FF,
//! );
//!
//! let verdict = engine.blit(&mut op);
//! if !verdict.is_success() {
//!     // fall back to the software rasterizer for this operation
//! }
//! ```
//!
//! ## Buffers
//!
//! The engine never copies pixel data. Planes hold non-owning views into
//! caller memory that must stay valid, and unmutated by other threads,
//! for the duration of each synchronous call.

pub mod cost;
pub mod desc;
pub mod engine;
pub mod feasibility;
pub mod generation;
pub mod geometry;
pub mod translate;
pub mod verdict;

pub use desc::{
    argb_from_premul, BlitDescriptor, BufferRef, Clip, ColorFormat, FilterMode, Plane,
    TransferMode, Transform, TransformClass,
};
pub use engine::BlitEngine;
pub use generation::{Capabilities, Generation};
pub use verdict::{Reject, Verdict};
