// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal pub/sub: one task publishes a counter, the main task
//! subscribes and prints what arrives.
//!
//! ```sh
//! cargo run --example basic_pubsub
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    nanobus::init();

    nanobus::subscribe(
        "/numbers",
        Arc::new(|_topic: &str, bytes: &[u8]| {
            let number = i32::from_le_bytes(bytes.try_into().unwrap());
            println!("Received: {number}");
        }),
    );

    // Publisher task
    thread::spawn(|| {
        let mut counter = 0i32;
        loop {
            nanobus::publish("/numbers", &counter.to_le_bytes());
            println!("Published: {counter}");
            counter += 1;
            thread::sleep(Duration::from_secs(1));
        }
    });

    println!("PubSub example ready, publishing numbers every second...");
    loop {
        nanobus::process_pending(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(10));
    }
}
