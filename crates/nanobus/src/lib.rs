// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # nanobus - Static-Capacity In-Process Message Bus
//!
//! An in-process publish/subscribe, request/response, and long-running-goal
//! bus for resource-constrained systems, modeled on the ROS 2 interaction
//! patterns:
//!
//! - **Topics**: fan-out delivery of opaque byte payloads to subscribers
//! - **Services**: request/response against a single registered handler,
//!   synchronous or asynchronous
//! - **Actions**: cooperative long-running goals with feedback, terminal
//!   results, and cancellation
//!
//! ## Design Constraints
//!
//! - Fixed-capacity tables, sized at compile time (no entity allocation)
//! - One coarse mutex with a bounded acquisition deadline; a failed
//!   acquisition fails the operation with no side effects
//! - Callbacks always run on the task that triggered them - there is no
//!   background worker
//! - Topic delivery is lossy by design: no buffering, no history
//!
//! ## Quick Start
//!
//! ```
//! use nanobus::{Bus, Payload, ServiceMode};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let bus = Bus::new();
//!
//! bus.subscribe("/sensors/temp", Arc::new(|topic: &str, bytes: &[u8]| {
//!     println!("{topic}: {} bytes", bytes.len());
//! }))
//! .unwrap();
//! bus.publish("/sensors/temp", &25i32.to_le_bytes()).unwrap();
//!
//! bus.create_service(
//!     "/double",
//!     |req: &[u8], resp: &mut Payload| {
//!         let n = i32::from_le_bytes(req.try_into().unwrap());
//!         resp.set(&(n * 2).to_le_bytes()).is_ok()
//!     },
//!     ServiceMode::Sync,
//! )
//! .unwrap();
//!
//! let mut resp = Payload::new();
//! bus.call_sync("/double", &7i32.to_le_bytes(), &mut resp, Duration::from_millis(100))
//!     .unwrap();
//! assert_eq!(i32::from_le_bytes(resp.as_slice().try_into().unwrap()), 14);
//! ```
//!
//! ## Tasks and Delivery
//!
//! Asynchronous responses and action results are routed back to the task
//! that originated the call: each task periodically drains its own
//! completions with [`Bus::process_pending`], and some task (often a
//! dedicated one) drives goal execution with [`Bus::process_actions`].
//!
//! ## One Bus or Many
//!
//! [`Bus`] is an ordinary value - create as many as you like. For the
//! common single-bus firmware shape, [`global()`] returns a process-wide
//! instance with a boolean convenience surface ([`publish`],
//! [`subscribe`], [`send_goal`], ...).

#![warn(missing_docs)]

/// Action engine: goals, execute steps, cancellation.
pub mod action;
/// The registry object and its locking discipline.
pub mod bus;
/// Error types.
pub mod error;
/// Process-wide bus and boolean convenience surface.
pub mod global;
/// Validated entity names.
pub mod name;
/// Bounded message payloads.
pub mod payload;
/// Cross-task completion routing.
pub mod pending;
/// Request/response services.
pub mod service;
/// Topic fan-out.
pub mod topic;

pub use crate::action::{
    AcceptCallback, ActionInfo, ActionState, CancelCallback, FeedbackCallback, Goal, GoalExecutor,
    Outcome, ResultCallback, Step,
};
pub use crate::bus::{Bus, Visibility};
pub use crate::error::{Error, Result};
pub use crate::global::{
    call_async, call_sync, cancel_goal, create_action, create_service, global, init,
    is_goal_canceled, process_actions, process_pending, process_services, publish, reset,
    send_feedback, send_goal, subscribe, unsubscribe,
};
pub use crate::name::BusName;
pub use crate::payload::Payload;
pub use crate::service::{ResponseCallback, ServiceHandler, ServiceInfo, ServiceMode};
pub use crate::topic::{TopicCallback, TopicInfo};

/// Maximum number of topics
pub const MAX_TOPICS: usize = 32;

/// Maximum number of services
pub const MAX_SERVICES: usize = 24;

/// Maximum number of actions
pub const MAX_ACTIONS: usize = 16;

/// Maximum number of outstanding pending completions
pub const MAX_PENDING: usize = 16;

/// Maximum subscribers on a single topic
pub const MAX_SUBSCRIBERS_PER_TOPIC: usize = 8;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD: usize = 256;

/// Maximum entity name length in bytes
pub const MAX_NAME_LEN: usize = 47;

/// Minimum entity name length in bytes
pub const MIN_NAME_LEN: usize = 2;

/// Version of nanobus
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
