// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for nanobus operations.

use core::fmt;

/// Result type for nanobus operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for nanobus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Entity name is malformed (length, leading '/', or non-ASCII)
    InvalidName,

    /// Payload exceeds the maximum message size
    PayloadTooLarge,

    /// Entity table is at capacity
    TableFull,

    /// Topic has no free subscriber slots
    SubscriberLimit,

    /// Pending table is at capacity
    PendingFull,

    /// A service or action with this name already exists
    DuplicateName,

    /// No entity registered under this name
    NotFound,

    /// A goal is already in flight on this action
    GoalActive,

    /// The goal-accept predicate declined the goal
    GoalRejected,

    /// No goal is in flight on this action
    GoalInactive,

    /// The service handler reported failure
    HandlerFailed,

    /// Registry mutex could not be acquired within the deadline
    LockTimeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidName => write!(f, "Invalid entity name"),
            Error::PayloadTooLarge => write!(f, "Payload exceeds maximum message size"),
            Error::TableFull => write!(f, "Entity table full"),
            Error::SubscriberLimit => write!(f, "Subscriber slots exhausted"),
            Error::PendingFull => write!(f, "Pending table full"),
            Error::DuplicateName => write!(f, "Entity name already registered"),
            Error::NotFound => write!(f, "Entity not found"),
            Error::GoalActive => write!(f, "Goal already in flight"),
            Error::GoalRejected => write!(f, "Goal rejected by accept predicate"),
            Error::GoalInactive => write!(f, "No goal in flight"),
            Error::HandlerFailed => write!(f, "Service handler failed"),
            Error::LockTimeout => write!(f, "Registry lock acquisition timed out"),
        }
    }
}

impl std::error::Error for Error {}
