// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Request/response: a doubling service called synchronously and
//! asynchronously from a client task.
//!
//! ```sh
//! cargo run --example services
//! ```

use nanobus::{Payload, ServiceMode};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    nanobus::init();

    nanobus::create_service(
        "/double",
        |request: &[u8], response: &mut Payload| {
            let input = i32::from_le_bytes(request.try_into().unwrap());
            let output = input * 2;
            println!("Service: {input} -> {output}");
            response.set(&output.to_le_bytes()).is_ok()
        },
        ServiceMode::Sync,
    );

    // Client task
    thread::spawn(|| {
        let timeout = Duration::from_secs(1);
        let mut counter = 1i32;
        loop {
            let mut response = Payload::new();
            if nanobus::call_sync("/double", &counter.to_le_bytes(), &mut response, timeout) {
                let doubled = i32::from_le_bytes(response.as_slice().try_into().unwrap());
                println!("Sync call: {counter} -> {doubled}");
            }

            nanobus::call_async(
                "/double",
                &counter.to_le_bytes(),
                Arc::new(|_service: &str, response: &[u8]| {
                    let result = i32::from_le_bytes(response.try_into().unwrap());
                    println!("Async result: {result}");
                }),
                timeout,
            );
            // Async responses come back on this task's own drain
            nanobus::process_pending(Duration::from_millis(10));

            counter += 1;
            thread::sleep(Duration::from_secs(2));
        }
    });

    println!("Services example ready, calling every 2 seconds...");
    loop {
        nanobus::process_pending(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(10));
    }
}
