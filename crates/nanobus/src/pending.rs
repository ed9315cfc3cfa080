// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cross-task completion routing.
//!
//! A pending record carries one finished async response or action result
//! from its producer back to the task that originated the request. Each
//! task drains only its own records by calling
//! [`Bus::process_pending`], which fires the stored completion callback
//! and removes the record.
//!
//! The table is shared between async service responses and action results
//! at a single fixed capacity.

use crate::action::{FeedbackCallback, Outcome, ResultCallback};
use crate::bus::Bus;
use crate::name::BusName;
use crate::payload::Payload;
use crate::service::ResponseCallback;
use std::thread::{self, ThreadId};
use std::time::Duration;

/// What fires when a pending record is drained.
pub(crate) enum Completion {
    /// Async service response
    Service(ResponseCallback),
    /// Action goal: live feedback plus the terminal result
    Action {
        feedback: Option<FeedbackCallback>,
        result: Option<ResultCallback>,
    },
}

pub(crate) struct PendingRecord {
    /// Name of the service or action this record tracks
    pub(crate) target: BusName,
    /// Task that originated the request; the only task allowed to drain it
    pub(crate) task: ThreadId,
    pub(crate) completion: Completion,
    pub(crate) response: Payload,
    /// Terminal state of the goal; `None` for service responses
    pub(crate) outcome: Option<Outcome>,
    /// True once the response/result bytes are in place
    pub(crate) ready: bool,
}

impl PendingRecord {
    pub(crate) fn is_action(&self) -> bool {
        matches!(self.completion, Completion::Action { .. })
    }
}

impl Bus {
    /// Drain every ready completion owned by the calling task.
    ///
    /// Records owned by other tasks are left untouched; remaining records
    /// keep their relative order. Completion callbacks run under the
    /// registry lock and must not re-enter the bus.
    ///
    /// `timeout` is advisory; the drain itself never blocks beyond the
    /// registry lock deadline.
    pub fn process_pending(&self, _timeout: Duration) {
        let me = thread::current().id();
        let mut reg = match self.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };

        let mut idx = 0;
        while idx < reg.pending.len() {
            if !(reg.pending[idx].ready && reg.pending[idx].task == me) {
                idx += 1;
                continue;
            }
            // Later records shift down; re-check this index next pass
            let record = reg.pending.remove(idx);
            match record.completion {
                Completion::Service(callback) => {
                    log::debug!("[pending] delivering response for '{}'", record.target);
                    callback(record.target.as_str(), record.response.as_slice());
                }
                Completion::Action { result, .. } => {
                    if let (Some(callback), Some(outcome)) = (result, record.outcome) {
                        log::debug!(
                            "[pending] delivering {:?} result for '{}'",
                            outcome,
                            record.target
                        );
                        callback(record.target.as_str(), record.response.as_slice(), outcome);
                    }
                }
            }
        }
    }
}
