// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! A counting action: each execute tick advances the count by one and
//! emits feedback; the client cancels the goal after three seconds.
//!
//! ```sh
//! cargo run --example actions
//! ```

use nanobus::{Goal, Outcome, Payload, Step};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    nanobus::init();

    let mut current = 0i32;
    nanobus::create_action(
        "/counter",
        |goal: &[u8]| {
            let target = i32::from_le_bytes(goal.try_into().unwrap());
            println!("Goal accepted: count to {target}");
            true
        },
        move |goal: Goal<'_>| -> Step {
            let target = i32::from_le_bytes(goal.bytes().try_into().unwrap());
            if goal.is_canceled() {
                println!("Action canceled!");
                return Step::Done(
                    Outcome::Canceled,
                    Payload::from_bytes(&current.to_le_bytes()).unwrap(),
                );
            }
            if current >= target {
                return Step::Done(
                    Outcome::Succeeded,
                    Payload::from_bytes(&current.to_le_bytes()).unwrap(),
                );
            }
            current += 1;
            nanobus::send_feedback("/counter", &current.to_le_bytes());
            println!("Counting: {current}/{target}");
            Step::Pending
        },
        Some(Arc::new(|| println!("Cancel requested"))),
    );

    // Client task: send the goal, let it run, then cancel
    thread::spawn(|| {
        let timeout = Duration::from_secs(1);
        nanobus::send_goal(
            "/counter",
            &10i32.to_le_bytes(),
            Some(Arc::new(|_action: &str, feedback: &[u8]| {
                let progress = i32::from_le_bytes(feedback.try_into().unwrap());
                println!("Progress: {progress}");
            })),
            Some(Arc::new(|_action: &str, result: &[u8], outcome| {
                let count = i32::from_le_bytes(result.try_into().unwrap());
                println!("Result: count={count}, status={outcome:?}");
            })),
            timeout,
        );
        println!("Started counting action!");

        thread::sleep(Duration::from_secs(3));
        nanobus::cancel_goal("/counter", timeout);

        // Keep draining so the result callback (owned by this task) fires
        loop {
            nanobus::process_pending(Duration::from_millis(10));
            thread::sleep(Duration::from_millis(100));
        }
    });

    println!("Actions example ready, counting (cancel after 3 seconds)...");
    loop {
        nanobus::process_actions();
        nanobus::process_pending(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(500));
    }
}
