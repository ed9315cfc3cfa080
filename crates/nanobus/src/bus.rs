// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The registry object and its locking discipline.
//!
//! A [`Bus`] owns four fixed-capacity tables (topics, services, actions,
//! pending completions) behind a single mutex. Every public operation
//! acquires the mutex with a bounded deadline; a failed acquisition fails
//! the operation with no side effects.
//!
//! # Lock discipline
//!
//! Long-running user callbacks (service handlers, action execute steps)
//! are never invoked while the registry mutex is held: the dispatching
//! operation snapshots the callback, releases the lock, then invokes.
//! Short delivery callbacks (topic subscribers, feedback, cancel-notify,
//! pending completions) run under the lock and must not re-enter the bus.

use crate::action::ActionRecord;
use crate::error::{Error, Result};
use crate::pending::PendingRecord;
use crate::service::ServiceRecord;
use crate::topic::TopicRecord;
use crate::{MAX_ACTIONS, MAX_PENDING, MAX_SERVICES, MAX_TOPICS};
use parking_lot::{Mutex, MutexGuard};
use std::time::Duration;

/// Mutex acquisition deadline for public entry points
pub(crate) const LOCK_DEADLINE: Duration = Duration::from_millis(100);

/// Reset is allowed to wait longer for in-flight dispatches to drain
const RESET_DEADLINE: Duration = Duration::from_secs(1);

/// Network visibility of an entity.
///
/// Reserved metadata: dispatch never consults it. Carried on every record
/// and surfaced through the introspection API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Entity is reachable only inside this process
    #[default]
    LocalOnly,
    /// Entity is flagged for export by a future transport layer
    NetworkVisible,
}

/// The registry tables. Only ever touched through the [`Bus`] mutex.
pub(crate) struct Registry {
    pub(crate) topics: heapless::Vec<TopicRecord, MAX_TOPICS>,
    pub(crate) services: heapless::Vec<ServiceRecord, MAX_SERVICES>,
    pub(crate) actions: heapless::Vec<ActionRecord, MAX_ACTIONS>,
    pub(crate) pending: heapless::Vec<PendingRecord, MAX_PENDING>,
    pub(crate) running: bool,
}

impl Registry {
    fn new() -> Self {
        Self {
            topics: heapless::Vec::new(),
            services: heapless::Vec::new(),
            actions: heapless::Vec::new(),
            pending: heapless::Vec::new(),
            running: true,
        }
    }

    pub(crate) fn find_topic_mut(&mut self, name: &str) -> Option<&mut TopicRecord> {
        self.topics.iter_mut().find(|t| t.name.as_str() == name)
    }

    pub(crate) fn find_service(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.name.as_str() == name)
    }

    pub(crate) fn find_action(&self, name: &str) -> Option<&ActionRecord> {
        self.actions.iter().find(|a| a.name.as_str() == name)
    }

    pub(crate) fn find_action_mut(&mut self, name: &str) -> Option<&mut ActionRecord> {
        self.actions.iter_mut().find(|a| a.name.as_str() == name)
    }
}

/// In-process topic/service/action bus with static capacities.
///
/// `Bus` is an explicit object: create one per test for deterministic
/// state, or share one process-wide through
/// [`global()`](crate::global::global).
///
/// # Example
///
/// ```
/// use nanobus::Bus;
///
/// let bus = Bus::new();
/// bus.subscribe("/greetings", std::sync::Arc::new(|_topic: &str, bytes: &[u8]| {
///     println!("{} bytes", bytes.len());
/// }))
/// .unwrap();
/// bus.publish("/greetings", b"hello").unwrap();
/// ```
pub struct Bus {
    inner: Mutex<Registry>,
}

impl Bus {
    /// Create an empty bus with the running flag set.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Registry::new()),
        }
    }

    /// Acquire the registry with the standard deadline.
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Registry>> {
        self.lock_within(LOCK_DEADLINE)
    }

    /// Acquire the registry within `deadline`.
    pub(crate) fn lock_within(&self, deadline: Duration) -> Result<MutexGuard<'_, Registry>> {
        self.inner.try_lock_for(deadline).ok_or(Error::LockTimeout)
    }

    /// Drop every record and counter, leaving the bus as freshly created.
    ///
    /// Pending completions that were never drained are discarded.
    pub fn reset(&self) -> Result<()> {
        let mut reg = self.lock_within(RESET_DEADLINE)?;
        reg.running = false;

        reg.topics.clear();
        reg.services.clear();
        reg.actions.clear();
        reg.pending.clear();

        reg.running = true;
        log::info!("[bus] reset: all tables cleared");
        Ok(())
    }

    /// Running flag. `false` only while a reset is in progress or the
    /// registry lock could not be sampled.
    pub fn is_running(&self) -> bool {
        self.lock().map(|reg| reg.running).unwrap_or(false)
    }

    /// Number of registered topics (best effort)
    pub fn topic_count(&self) -> usize {
        self.lock().map(|reg| reg.topics.len()).unwrap_or(0)
    }

    /// Number of registered services (best effort)
    pub fn service_count(&self) -> usize {
        self.lock().map(|reg| reg.services.len()).unwrap_or(0)
    }

    /// Number of registered actions (best effort)
    pub fn action_count(&self) -> usize {
        self.lock().map(|reg| reg.actions.len()).unwrap_or(0)
    }

    /// Number of outstanding pending completions (best effort)
    pub fn pending_count(&self) -> usize {
        self.lock().map(|reg| reg.pending.len()).unwrap_or(0)
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
