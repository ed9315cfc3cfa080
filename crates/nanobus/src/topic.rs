// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Topic fan-out.
//!
//! A topic is a named channel with up to
//! [`MAX_SUBSCRIBERS_PER_TOPIC`](crate::MAX_SUBSCRIBERS_PER_TOPIC)
//! subscribers. Delivery is inline and lossy: `publish` invokes every
//! subscriber on the publisher's task before returning, and a publish with
//! no subscribers is discarded. There is no buffering.
//!
//! Topics come into existence on the first `publish` or `subscribe` that
//! mentions their name and are only removed by [`Bus::reset`].

use crate::bus::{Bus, Registry, Visibility};
use crate::error::{Error, Result};
use crate::name::BusName;
use crate::{MAX_PAYLOAD, MAX_SUBSCRIBERS_PER_TOPIC};
use std::sync::Arc;

/// Subscriber callback: `(topic name, payload bytes)`.
///
/// Runs on the publishing task while the registry lock is held, so it must
/// be short and must not call back into the bus.
pub type TopicCallback = Arc<dyn Fn(&str, &[u8]) + Send + Sync>;

pub(crate) struct TopicRecord {
    pub(crate) name: BusName,
    pub(crate) subscribers: heapless::Vec<TopicCallback, MAX_SUBSCRIBERS_PER_TOPIC>,
    pub(crate) visibility: Visibility,
}

impl TopicRecord {
    fn new(name: BusName) -> Self {
        Self {
            name,
            subscribers: heapless::Vec::new(),
            visibility: Visibility::default(),
        }
    }
}

/// Introspection snapshot of one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicInfo {
    /// Topic name
    pub name: String,
    /// Number of occupied subscriber slots
    pub subscriber_count: usize,
    /// Reserved visibility metadata
    pub visibility: Visibility,
}

/// Locate `name` in the topic table, auto-creating an empty record when
/// the table has room.
fn find_or_create<'a>(reg: &'a mut Registry, name: &BusName) -> Result<&'a mut TopicRecord> {
    let idx = match reg
        .topics
        .iter()
        .position(|t| t.name.as_str() == name.as_str())
    {
        Some(idx) => idx,
        None => {
            if reg.topics.push(TopicRecord::new(name.clone())).is_err() {
                return Err(Error::TableFull);
            }
            log::debug!("[topic] created '{}'", name);
            reg.topics.len() - 1
        }
    };
    Ok(&mut reg.topics[idx])
}

impl Bus {
    /// Publish `bytes` to every subscriber of `topic`.
    ///
    /// The topic is auto-created if absent. Subscribers run in insertion
    /// order on the calling task; a slow subscriber stalls the publisher.
    ///
    /// # Errors
    ///
    /// Name/payload validation, a full topic table, or a lock timeout fail
    /// the publish with no state change.
    pub fn publish(&self, topic: &str, bytes: &[u8]) -> Result<()> {
        let name = BusName::parse(topic)?;
        if bytes.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLarge);
        }

        let mut reg = self.lock()?;
        let record = find_or_create(&mut reg, &name)?;
        for callback in record.subscribers.iter() {
            callback(name.as_str(), bytes);
        }
        Ok(())
    }

    /// Register `callback` as a subscriber of `topic`, auto-creating the
    /// topic if absent.
    ///
    /// Keep a clone of the `Arc` to be able to [`unsubscribe`](Bus::unsubscribe)
    /// later; removal matches by callback identity.
    pub fn subscribe(&self, topic: &str, callback: TopicCallback) -> Result<()> {
        let name = BusName::parse(topic)?;

        let mut reg = self.lock()?;
        let record = find_or_create(&mut reg, &name)?;
        record
            .subscribers
            .push(callback)
            .map_err(|_| Error::SubscriberLimit)
    }

    /// Remove the first subscriber of `topic` whose callback is the same
    /// `Arc` as `callback`. Later slots shift down, preserving insertion
    /// order. Unknown topics and unmatched callbacks are silent no-ops.
    pub fn unsubscribe(&self, topic: &str, callback: &TopicCallback) -> Result<()> {
        let name = BusName::parse(topic)?;

        let mut reg = self.lock()?;
        if let Some(record) = reg.find_topic_mut(name.as_str()) {
            if let Some(idx) = record
                .subscribers
                .iter()
                .position(|cb| Arc::ptr_eq(cb, callback))
            {
                record.subscribers.remove(idx);
            }
        }
        Ok(())
    }

    /// Snapshot of every registered topic (best effort).
    pub fn list_topics(&self) -> Vec<TopicInfo> {
        self.lock()
            .map(|reg| {
                reg.topics
                    .iter()
                    .map(|t| TopicInfo {
                        name: t.name.as_str().to_string(),
                        subscriber_count: t.subscribers.len(),
                        visibility: t.visibility,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
