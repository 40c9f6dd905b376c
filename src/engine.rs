// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Offload engine and dispatcher.
//!
//! [`BlitEngine`] owns the generation capability tables, the driver, and
//! the submission sequence counter, and runs the admission pipeline for
//! each request: normalize, feasibility, cost, translate, submit. One
//! synchronous call per operation, no internal concurrency; the only
//! other blocking call is the [`wait_idle`](BlitEngine::wait_idle)
//! barrier.

use crate::desc::BlitDescriptor;
use crate::generation::{Capabilities, Generation};
use crate::verdict::{Reject, Verdict};
use crate::{cost, feasibility, geometry, translate};
use blit_hal::Accelerator;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, warn};

/// First sequence number handed out; purely diagnostic.
const SEQ_NO_BASE: u32 = 100;

/// Hardware-blit offload engine for one accelerator generation.
///
/// The engine never copies pixel data: descriptors reference caller
/// memory, which must stay valid and unmutated for the duration of each
/// synchronous [`blit`](BlitEngine::blit) call. Sequence numbering is
/// atomic so callers may share an engine across threads, though the
/// driver contract itself is one operation at a time.
pub struct BlitEngine<D: Accelerator> {
    caps: &'static Capabilities,
    driver: D,
    seq_no: AtomicU32,
}

impl<D: Accelerator> BlitEngine<D> {
    /// Creates an engine for the given accelerator generation.
    ///
    /// Capability tables are selected once here; per-call work never
    /// branches on the generation again.
    pub fn new(generation: Generation, driver: D) -> Self {
        Self::with_capabilities(generation.capabilities(), driver)
    }

    /// Creates an engine from an explicit capability description, for
    /// parts whose tables differ from the stock generations.
    pub fn with_capabilities(caps: &'static Capabilities, driver: D) -> Self {
        Self {
            caps,
            driver,
            seq_no: AtomicU32::new(SEQ_NO_BASE),
        }
    }

    pub fn capabilities(&self) -> &'static Capabilities {
        self.caps
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Decides, translates, and synchronously dispatches one operation.
    ///
    /// The descriptor is mutated in place by the geometry normalizer and
    /// the clip intersection, then read-only. On any
    /// [`Verdict::Rejected`] the caller renders the operation in
    /// software; no partial visual effect has been produced, including on
    /// driver failure.
    pub fn blit(&self, d: &mut BlitDescriptor) -> Verdict {
        if !geometry::normalize(d) {
            debug!("blit rejected: {}", Reject::DegenerateGeometry);
            return Verdict::Rejected(Reject::DegenerateGeometry);
        }

        if let Err(reason) = feasibility::check_possible(d, self.caps) {
            debug!("blit rejected: {reason}");
            return Verdict::Rejected(reason);
        }

        if let Err(reason) = feasibility::check_translucent_modes(d, self.caps) {
            debug!("blit rejected: {reason}");
            return Verdict::Rejected(reason);
        }

        // Keep-destination identity: nothing to execute, report success
        // without touching the cost model or the driver.
        if feasibility::is_dst_mode(d) {
            debug!("blit no-op: keep-destination mode");
            return Verdict::Noop;
        }

        geometry::intersect_clip(d);
        if d.clip.is_degenerate() {
            debug!("blit rejected: {}", Reject::DegenerateClip);
            return Verdict::Rejected(Reject::DegenerateClip);
        }

        if let Err(reason) = self.caps.cost.approves(d) {
            debug!(
                "blit rejected by cost model ({:?} bucket): {reason}",
                cost::bucket(d)
            );
            return Verdict::Rejected(reason);
        }

        let mut cmd = match translate::translate(d, self.caps) {
            Ok(cmd) => cmd,
            Err(reason) => {
                debug!("blit rejected: {reason}");
                return Verdict::Rejected(reason);
            }
        };

        // A sequence number is consumed only once a command exists.
        let seq_no = self.seq_no.fetch_add(1, Ordering::Relaxed);
        cmd.seq_no = seq_no;

        let status = self.driver.submit(&cmd);
        if status < 0 {
            warn!("blit submission {seq_no} failed: {status}");
            return Verdict::Rejected(Reject::Driver(status));
        }

        debug!("blit submission {seq_no} executed on {}", self.caps.name);
        Verdict::Executed
    }

    /// Blocks until every prior submission has retired.
    ///
    /// Only meaningful for callers pipelining work through a driver that
    /// allows asynchronous submission; the synchronous [`blit`]
    /// path already waits per call.
    ///
    /// [`blit`]: BlitEngine::blit
    pub fn wait_idle(&self) -> bool {
        self.driver.wait_idle() >= 0
    }
}
