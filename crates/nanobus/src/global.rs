// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide bus and the boolean convenience surface.
//!
//! Most firmware-style callers want exactly one bus for the whole process.
//! [`global()`] hands out that instance; the free functions below mirror
//! every [`Bus`] operation against it, collapsing errors to a boolean
//! verdict and logging the cause. Multi-bus code and unit tests should
//! prefer explicit [`Bus`] values.

use crate::action::{CancelCallback, FeedbackCallback, GoalExecutor, ResultCallback};
use crate::bus::Bus;
use crate::payload::Payload;
use crate::service::{ResponseCallback, ServiceHandler, ServiceMode};
use crate::topic::TopicCallback;
use std::sync::OnceLock;
use std::time::Duration;

static BUS: OnceLock<Bus> = OnceLock::new();

/// Get the process-wide bus instance, creating it on first use.
pub fn global() -> &'static Bus {
    BUS.get_or_init(Bus::new)
}

/// Initialize the process-wide bus.
///
/// First call constructs it; later calls wipe it back to the
/// freshly-constructed state.
pub fn init() {
    if let Some(bus) = BUS.get() {
        report("init", bus.reset());
    } else {
        let _ = global();
    }
}

/// Wipe the process-wide bus: all records, subscriptions, and undelivered
/// completions are dropped.
pub fn reset() -> bool {
    report("reset", global().reset())
}

/// Publish `bytes` on `topic`. See [`Bus::publish`].
pub fn publish(topic: &str, bytes: &[u8]) -> bool {
    report("publish", global().publish(topic, bytes))
}

/// Subscribe `callback` to `topic`. See [`Bus::subscribe`].
pub fn subscribe(topic: &str, callback: TopicCallback) -> bool {
    report("subscribe", global().subscribe(topic, callback))
}

/// Remove one subscription of `callback` from `topic`.
/// See [`Bus::unsubscribe`].
pub fn unsubscribe(topic: &str, callback: &TopicCallback) {
    report("unsubscribe", global().unsubscribe(topic, callback));
}

/// Register a service handler. See [`Bus::create_service`].
pub fn create_service(service: &str, handler: impl ServiceHandler, mode: ServiceMode) -> bool {
    report("create_service", global().create_service(service, handler, mode))
}

/// Call a service synchronously on this task. See [`Bus::call_sync`].
pub fn call_sync(
    service: &str,
    request: &[u8],
    response: &mut Payload,
    timeout: Duration,
) -> bool {
    report(
        "call_sync",
        global().call_sync(service, request, response, timeout),
    )
}

/// Call a service asynchronously. See [`Bus::call_async`].
pub fn call_async(
    service: &str,
    request: &[u8],
    callback: ResponseCallback,
    timeout: Duration,
) -> bool {
    report(
        "call_async",
        global().call_async(service, request, callback, timeout),
    )
}

/// Register an action. See [`Bus::create_action`].
pub fn create_action(
    action: &str,
    accept: impl Fn(&[u8]) -> bool + Send + Sync + 'static,
    executor: impl GoalExecutor,
    cancel_notify: Option<CancelCallback>,
) -> bool {
    report(
        "create_action",
        global().create_action(action, accept, executor, cancel_notify),
    )
}

/// Submit a goal. See [`Bus::send_goal`].
pub fn send_goal(
    action: &str,
    goal: &[u8],
    feedback: Option<FeedbackCallback>,
    result: Option<ResultCallback>,
    timeout: Duration,
) -> bool {
    report(
        "send_goal",
        global().send_goal(action, goal, feedback, result, timeout),
    )
}

/// Request cancellation of the goal in flight. See [`Bus::cancel_goal`].
pub fn cancel_goal(action: &str, timeout: Duration) -> bool {
    report("cancel_goal", global().cancel_goal(action, timeout))
}

/// Route feedback to the goal sender. See [`Bus::send_feedback`].
pub fn send_feedback(action: &str, bytes: &[u8]) -> bool {
    report("send_feedback", global().send_feedback(action, bytes))
}

/// Current cancel flag of `action`. See [`Bus::is_goal_canceled`].
pub fn is_goal_canceled(action: &str) -> bool {
    global().is_goal_canceled(action)
}

/// Drive one execute tick over every active goal.
/// See [`Bus::process_actions`].
pub fn process_actions() {
    global().process_actions();
}

/// Drain completions owned by the calling task.
/// See [`Bus::process_pending`].
pub fn process_pending(timeout: Duration) {
    global().process_pending(timeout);
}

/// Reserved. See [`Bus::process_services`].
pub fn process_services() {
    global().process_services();
}

/// Collapse a typed verdict to the boolean surface, logging failures.
fn report(operation: &str, verdict: crate::Result<()>) -> bool {
    match verdict {
        Ok(()) => true,
        Err(err) => {
            log::debug!("[bus] {} failed: {}", operation, err);
            false
        }
    }
}
