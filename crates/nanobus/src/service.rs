// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Request/response services.
//!
//! A service binds exactly one handler to a name. Callers reach it either
//! synchronously ([`Bus::call_sync`], handler runs on the caller's task and
//! the response comes back in place) or asynchronously
//! ([`Bus::call_async`], the response is parked in the pending table and
//! delivered on the caller's next [`Bus::process_pending`] drain).
//!
//! Both call paths snapshot the handler and release the registry lock
//! before invoking it, so handlers are free to call back into the bus.

use crate::bus::{Bus, Visibility};
use crate::error::{Error, Result};
use crate::name::BusName;
use crate::payload::Payload;
use crate::pending::{Completion, PendingRecord};
use crate::MAX_PAYLOAD;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Dispatch mode requested at service creation.
///
/// Metadata: both call paths work against either mode. The mode records
/// the creator's intent and is surfaced through introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    /// Handler expected to be called through `call_sync`
    Sync,
    /// Handler expected to be called through `call_async`
    Async,
}

/// Service request handler.
///
/// Fills `response` and returns the verdict: `true` for success, `false`
/// to fail the call. Runs on the calling task with the registry lock
/// released.
pub trait ServiceHandler: Send + Sync + 'static {
    /// Handle one request.
    fn handle(&self, request: &[u8], response: &mut Payload) -> bool;
}

/// A function-based service handler.
impl<F> ServiceHandler for F
where
    F: Fn(&[u8], &mut Payload) -> bool + Send + Sync + 'static,
{
    fn handle(&self, request: &[u8], response: &mut Payload) -> bool {
        self(request, response)
    }
}

/// Completion callback for asynchronous calls: `(service name, response)`.
///
/// Runs under the registry lock during `process_pending`; must not
/// re-enter the bus.
pub type ResponseCallback = Arc<dyn Fn(&str, &[u8]) + Send + Sync>;

pub(crate) struct ServiceRecord {
    pub(crate) name: BusName,
    pub(crate) handler: Arc<dyn ServiceHandler>,
    pub(crate) mode: ServiceMode,
    pub(crate) visibility: Visibility,
}

/// Introspection snapshot of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Declared dispatch mode
    pub mode: ServiceMode,
    /// Reserved visibility metadata
    pub visibility: Visibility,
}

impl Bus {
    /// Register `handler` under `service`.
    ///
    /// # Errors
    ///
    /// Duplicate names and a full service table are rejected.
    pub fn create_service(
        &self,
        service: &str,
        handler: impl ServiceHandler,
        mode: ServiceMode,
    ) -> Result<()> {
        let name = BusName::parse(service)?;

        let mut reg = self.lock()?;
        if reg.find_service(name.as_str()).is_some() {
            return Err(Error::DuplicateName);
        }
        let record = ServiceRecord {
            name,
            handler: Arc::new(handler),
            mode,
            visibility: Visibility::default(),
        };
        if reg.services.push(record).is_err() {
            return Err(Error::TableFull);
        }
        log::debug!("[service] created '{}' ({:?})", service, mode);
        Ok(())
    }

    /// Call `service` synchronously on this task.
    ///
    /// The handler and its response land in `response`; `timeout` bounds
    /// only the registry lock acquisition; the handler itself is un-timed.
    ///
    /// # Errors
    ///
    /// Unknown services, validation failures, a lock timeout, or a `false`
    /// handler verdict fail the call.
    pub fn call_sync(
        &self,
        service: &str,
        request: &[u8],
        response: &mut Payload,
        timeout: Duration,
    ) -> Result<()> {
        let name = BusName::parse(service)?;
        if request.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLarge);
        }

        // Snapshot the handler, then release the lock before invoking:
        // the handler may take arbitrarily long and may re-enter the bus.
        let handler = {
            let reg = self.lock_within(timeout)?;
            let record = reg.find_service(name.as_str()).ok_or(Error::NotFound)?;
            Arc::clone(&record.handler)
        };

        response.clear();
        if handler.handle(request, response) {
            Ok(())
        } else {
            log::debug!("[service] '{}' handler reported failure", service);
            Err(Error::HandlerFailed)
        }
    }

    /// Call `service` asynchronously.
    ///
    /// The handler runs immediately on this task (lock released), and on
    /// success the response is parked in the pending table tagged with
    /// this task's identity. `callback` fires on this task's next
    /// [`process_pending`](Bus::process_pending) drain.
    pub fn call_async(
        &self,
        service: &str,
        request: &[u8],
        callback: ResponseCallback,
        timeout: Duration,
    ) -> Result<()> {
        let name = BusName::parse(service)?;
        if request.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLarge);
        }

        let handler = {
            let reg = self.lock_within(timeout)?;
            if reg.pending.is_full() {
                return Err(Error::PendingFull);
            }
            let record = reg.find_service(name.as_str()).ok_or(Error::NotFound)?;
            Arc::clone(&record.handler)
        };

        let mut response = Payload::new();
        if !handler.handle(request, &mut response) {
            log::debug!("[service] '{}' handler reported failure", service);
            return Err(Error::HandlerFailed);
        }

        // The lock was released around the handler; capacity may have been
        // consumed in the window, so the push is re-validated here.
        let mut reg = self.lock()?;
        let record = PendingRecord {
            target: name,
            task: thread::current().id(),
            completion: Completion::Service(callback),
            response,
            outcome: None,
            ready: true,
        };
        if reg.pending.push(record).is_err() {
            return Err(Error::PendingFull);
        }
        Ok(())
    }

    /// Reserved. Services dispatch inline on the calling task, so there is
    /// no background work to drive.
    pub fn process_services(&self) {}

    /// Snapshot of every registered service (best effort).
    pub fn list_services(&self) -> Vec<ServiceInfo> {
        self.lock()
            .map(|reg| {
                reg.services
                    .iter()
                    .map(|s| ServiceInfo {
                        name: s.name.as_str().to_string(),
                        mode: s.mode,
                        visibility: s.visibility,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
