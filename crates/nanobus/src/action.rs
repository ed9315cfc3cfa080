// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Long-running goals with feedback, results, and cooperative cancellation.
//!
//! An action binds three pieces of user logic to a name: a goal-accept
//! predicate, a resumable execute step, and an optional cancel
//! notification. A goal moves through the lifecycle
//!
//! ```text
//!           send_goal (accepted)
//!   (idle) ------------------------> Accepted
//!                                       |   process_actions tick
//!                                       v
//!                                   Executing --+
//!                                    |  ^       | Step::Pending
//!                                    |  +-------+
//!                                    | Step::Done(outcome, result)
//!                                    v
//!                    {Succeeded, Canceled, Aborted}
//!                                    |
//!                                    v
//!                 result parked for the goal sender's task
//! ```
//!
//! Execute steps run with the registry lock released, so a step may call
//! [`Bus::send_feedback`] and [`Bus::is_goal_canceled`] freely.
//! Cancellation is cooperative: [`Bus::cancel_goal`] raises a flag; the
//! goal terminates when a later step observes it and returns
//! [`Step::Done`] with [`Outcome::Canceled`].

use crate::bus::{Bus, Registry, Visibility};
use crate::error::{Error, Result};
use crate::name::BusName;
use crate::payload::Payload;
use crate::pending::{Completion, PendingRecord};
use crate::MAX_PAYLOAD;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Lifecycle state of an action's current (or most recent) goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    /// Goal accepted, first execute step not yet taken
    Accepted,
    /// Execute step in progress across ticks
    Executing,
    /// Goal finished successfully
    Succeeded,
    /// Goal observed the cancel request and stopped
    Canceled,
    /// Goal gave up
    Aborted,
}

/// The three ways a goal can retire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Work completed
    Succeeded,
    /// Stopped in response to a cancel request
    Canceled,
    /// Stopped on its own because the work cannot be done
    Aborted,
}

impl From<Outcome> for ActionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Succeeded => ActionState::Succeeded,
            Outcome::Canceled => ActionState::Canceled,
            Outcome::Aborted => ActionState::Aborted,
        }
    }
}

/// Verdict of one execute step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Progress was made; call again on the next tick
    Pending,
    /// Goal retired with this outcome and result bytes
    Done(Outcome, Payload),
}

/// View of the in-flight goal handed to each execute step.
#[derive(Clone, Copy)]
pub struct Goal<'a> {
    bytes: &'a [u8],
    cancel_requested: bool,
}

impl<'a> Goal<'a> {
    /// Goal payload as sent by the client
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// True once `cancel_goal` has been called for this goal
    pub fn is_canceled(&self) -> bool {
        self.cancel_requested
    }
}

/// Resumable execute step: a state-carrying generator driven by
/// [`Bus::process_actions`] ticks.
///
/// Each invocation performs bounded work and returns [`Step::Pending`] to
/// be called again or [`Step::Done`] to retire the goal. Per-goal progress
/// lives in the implementor's own state.
pub trait GoalExecutor: Send + 'static {
    /// Advance the goal by one bounded slice of work.
    fn step(&mut self, goal: Goal<'_>) -> Step;
}

/// A function-based executor.
impl<F> GoalExecutor for F
where
    F: FnMut(Goal<'_>) -> Step + Send + 'static,
{
    fn step(&mut self, goal: Goal<'_>) -> Step {
        self(goal)
    }
}

/// Goal-accept predicate: `true` admits the goal. Runs under the registry
/// lock; must not re-enter the bus.
pub type AcceptCallback = Arc<dyn Fn(&[u8]) -> bool + Send + Sync>;

/// Cancel notification. Runs under the registry lock; must not re-enter
/// the bus.
pub type CancelCallback = Arc<dyn Fn() + Send + Sync>;

/// Feedback delivery: `(action name, feedback bytes)`. Runs under the
/// registry lock on the task that called `send_feedback`.
pub type FeedbackCallback = Arc<dyn Fn(&str, &[u8]) + Send + Sync>;

/// Terminal result delivery: `(action name, result bytes, outcome)`.
/// Runs during `process_pending` on the task that sent the goal.
pub type ResultCallback = Arc<dyn Fn(&str, &[u8], Outcome) + Send + Sync>;

pub(crate) type SharedExecutor = Arc<Mutex<Box<dyn GoalExecutor>>>;

pub(crate) struct ActionRecord {
    pub(crate) name: BusName,
    pub(crate) accept: AcceptCallback,
    pub(crate) executor: SharedExecutor,
    pub(crate) cancel_notify: Option<CancelCallback>,
    /// `None` until the first goal is sent
    pub(crate) state: Option<ActionState>,
    pub(crate) active: bool,
    pub(crate) cancel_requested: bool,
    pub(crate) goal: Payload,
    pub(crate) visibility: Visibility,
}

impl ActionRecord {
    /// A goal is in flight and still wants execute ticks.
    fn wants_tick(&self) -> bool {
        self.active
            && matches!(
                self.state,
                Some(ActionState::Accepted) | Some(ActionState::Executing)
            )
    }
}

/// Introspection snapshot of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    /// Action name
    pub name: String,
    /// Lifecycle state of the current or most recent goal
    pub state: Option<ActionState>,
    /// True while a goal is in flight
    pub active: bool,
    /// Reserved visibility metadata
    pub visibility: Visibility,
}

impl Bus {
    /// Register an action under `action`.
    ///
    /// # Arguments
    /// * `accept` - goal-accept predicate, consulted by `send_goal`
    /// * `executor` - resumable execute step driven by `process_actions`
    /// * `cancel_notify` - optional callback fired when a cancel is requested
    ///
    /// # Errors
    ///
    /// Duplicate names and a full action table are rejected.
    pub fn create_action(
        &self,
        action: &str,
        accept: impl Fn(&[u8]) -> bool + Send + Sync + 'static,
        executor: impl GoalExecutor,
        cancel_notify: Option<CancelCallback>,
    ) -> Result<()> {
        let name = BusName::parse(action)?;

        let mut reg = self.lock()?;
        if reg.find_action(name.as_str()).is_some() {
            return Err(Error::DuplicateName);
        }
        let record = ActionRecord {
            name,
            accept: Arc::new(accept),
            executor: Arc::new(Mutex::new(Box::new(executor))),
            cancel_notify,
            state: None,
            active: false,
            cancel_requested: false,
            goal: Payload::new(),
            visibility: Visibility::default(),
        };
        if reg.actions.push(record).is_err() {
            return Err(Error::TableFull);
        }
        log::debug!("[action] created '{}'", action);
        Ok(())
    }

    /// Submit a goal to `action`.
    ///
    /// The accept predicate is consulted first; on acceptance the goal
    /// bytes are buffered, the action becomes active, and a pending record
    /// is parked so the eventual result reaches this task's
    /// [`process_pending`](Bus::process_pending) drain.
    ///
    /// # Errors
    ///
    /// Fails on validation, unknown actions, a goal already in flight, a
    /// declined accept predicate, or a full pending table, all without
    /// state change.
    pub fn send_goal(
        &self,
        action: &str,
        goal: &[u8],
        feedback: Option<FeedbackCallback>,
        result: Option<ResultCallback>,
        timeout: Duration,
    ) -> Result<()> {
        let name = BusName::parse(action)?;
        if goal.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLarge);
        }

        let mut reg = self.lock_within(timeout)?;
        // Checked before the accept predicate runs: an accepted goal must
        // always get a result tracker.
        if reg.pending.is_full() {
            return Err(Error::PendingFull);
        }
        {
            let record = reg.find_action_mut(name.as_str()).ok_or(Error::NotFound)?;
            if record.active {
                return Err(Error::GoalActive);
            }
            if !(record.accept)(goal) {
                log::debug!("[action] '{}' rejected goal", action);
                return Err(Error::GoalRejected);
            }
            record.goal.set(goal)?;
            record.active = true;
            record.state = Some(ActionState::Accepted);
            record.cancel_requested = false;
        }

        let tracker = PendingRecord {
            target: name,
            task: thread::current().id(),
            completion: Completion::Action { feedback, result },
            response: Payload::new(),
            outcome: None,
            ready: false,
        };
        if reg.pending.push(tracker).is_err() {
            // Capacity was pre-checked under this same lock hold
            if let Some(record) = reg.find_action_mut(action) {
                record.active = false;
            }
            return Err(Error::PendingFull);
        }
        log::debug!("[action] '{}' accepted goal ({} bytes)", action, goal.len());
        Ok(())
    }

    /// Request cooperative cancellation of the goal in flight on `action`.
    ///
    /// Raises the cancel flag and fires the cancel notification; the goal
    /// actually terminates when a later execute step observes the flag.
    pub fn cancel_goal(&self, action: &str, timeout: Duration) -> Result<()> {
        let name = BusName::parse(action)?;

        let mut reg = self.lock_within(timeout)?;
        let notify = {
            let record = reg.find_action_mut(name.as_str()).ok_or(Error::NotFound)?;
            if !record.active {
                return Err(Error::GoalInactive);
            }
            record.cancel_requested = true;
            record.cancel_notify.clone()
        };
        log::debug!("[action] cancel requested for '{}'", action);
        if let Some(callback) = notify {
            callback();
        }
        Ok(())
    }

    /// Route progress feedback for the goal in flight on `action` to the
    /// goal sender's feedback callback.
    ///
    /// Feedback is lossy: with no goal in flight, or no feedback callback
    /// registered, the bytes are silently discarded.
    pub fn send_feedback(&self, action: &str, bytes: &[u8]) -> Result<()> {
        let name = BusName::parse(action)?;
        if bytes.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLarge);
        }

        let reg = self.lock()?;
        for record in reg.pending.iter() {
            if record.ready || record.target.as_str() != name.as_str() {
                continue;
            }
            if let Completion::Action {
                feedback: Some(callback),
                ..
            } = &record.completion
            {
                callback(name.as_str(), bytes);
                break;
            }
        }
        Ok(())
    }

    /// Current cancel flag of `action`, or `false` when unknown.
    pub fn is_goal_canceled(&self, action: &str) -> bool {
        let Ok(name) = BusName::parse(action) else {
            return false;
        };
        self.lock()
            .ok()
            .and_then(|reg| {
                reg.find_action(name.as_str())
                    .map(|record| record.cancel_requested)
            })
            .unwrap_or(false)
    }

    /// Drive one execute tick over every action with a goal in flight.
    ///
    /// For each such action the executor runs on this task with the
    /// registry lock released. [`Step::Pending`] leaves the goal
    /// executing; [`Step::Done`] retires it and parks the result for the
    /// goal sender's next [`process_pending`](Bus::process_pending) drain.
    ///
    /// Concurrent ticks are safe: each action's executor is guarded by its
    /// own mutex, and a tick that finds an executor busy skips it.
    pub fn process_actions(&self) {
        let mut idx = 0;
        loop {
            // Phase 1: pick the next goal that wants a tick
            let (name, executor) = {
                let reg = match self.lock() {
                    Ok(guard) => guard,
                    Err(_) => return,
                };
                if idx >= reg.actions.len() {
                    return;
                }
                let record = &reg.actions[idx];
                idx += 1;
                if !record.wants_tick() {
                    continue;
                }
                (record.name.clone(), Arc::clone(&record.executor))
            };

            // Phase 2: win the executor; another task may be stepping it
            let mut exec = match executor.try_lock() {
                Some(guard) => guard,
                None => continue,
            };

            // Phase 3: re-check eligibility and snapshot the goal. The
            // commit below happens before the executor unlocks, so a
            // retired goal can never receive an extra step.
            let (goal, cancel_requested) = {
                let reg = match self.lock() {
                    Ok(guard) => guard,
                    Err(_) => return,
                };
                match reg.find_action(name.as_str()) {
                    Some(record) if record.wants_tick() => {
                        (record.goal.clone(), record.cancel_requested)
                    }
                    _ => continue,
                }
            };

            // Phase 4: one bounded slice of work, lock released
            let step = exec.step(Goal {
                bytes: goal.as_slice(),
                cancel_requested,
            });

            // Phase 5: commit
            match self.lock() {
                Ok(mut reg) => commit_step(&mut reg, name.as_str(), step),
                Err(_) => return,
            }
        }
    }

    /// Snapshot of every registered action (best effort).
    pub fn list_actions(&self) -> Vec<ActionInfo> {
        self.lock()
            .map(|reg| {
                reg.actions
                    .iter()
                    .map(|a| ActionInfo {
                        name: a.name.as_str().to_string(),
                        state: a.state,
                        active: a.active,
                        visibility: a.visibility,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Apply a step verdict to the registry. A goal whose action vanished
/// (reset raced the step) is discarded.
fn commit_step(reg: &mut Registry, name: &str, step: Step) {
    match step {
        Step::Pending => {
            if let Some(record) = reg.find_action_mut(name) {
                if record.active {
                    record.state = Some(ActionState::Executing);
                }
            }
        }
        Step::Done(outcome, result) => {
            let retired = match reg.find_action_mut(name) {
                Some(record) if record.active => {
                    record.state = Some(outcome.into());
                    record.active = false;
                    true
                }
                _ => false,
            };
            if !retired {
                return;
            }
            log::debug!("[action] '{}' finished: {:?}", name, outcome);
            // The in-flight goal's tracker is the non-ready one; a ready
            // record under the same name is an undrained earlier result.
            if let Some(tracker) = reg
                .pending
                .iter_mut()
                .find(|p| !p.ready && p.target.as_str() == name && p.is_action())
            {
                tracker.response = result;
                tracker.outcome = Some(outcome);
                tracker.ready = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ACTIONS;
    use std::sync::atomic::{AtomicU32, Ordering};

    const TICK_TIMEOUT: Duration = Duration::from_millis(100);

    /// Executor counting up to the goal value, one increment per tick,
    /// emitting feedback after each increment.
    fn counting_executor(bus: &Arc<Bus>, action: &'static str) -> impl GoalExecutor {
        let bus = Arc::clone(bus);
        let mut progress = 0u32;
        move |goal: Goal<'_>| -> Step {
            let Ok(bytes) = <[u8; 4]>::try_from(goal.bytes()) else {
                return Step::Done(Outcome::Aborted, Payload::new());
            };
            let target = u32::from_le_bytes(bytes);
            let partial = Payload::from_bytes(&progress.to_le_bytes()).unwrap();
            if goal.is_canceled() {
                return Step::Done(Outcome::Canceled, partial);
            }
            if progress >= target {
                return Step::Done(Outcome::Succeeded, partial);
            }
            progress += 1;
            bus.send_feedback(action, &progress.to_le_bytes()).unwrap();
            Step::Pending
        }
    }

    fn accept_four_bytes(goal: &[u8]) -> bool {
        goal.len() == 4
    }

    #[test]
    fn goal_runs_to_completion_with_feedback() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/counter",
            accept_four_bytes,
            counting_executor(&bus, "/counter"),
            None,
        )
        .unwrap();

        let feedback_log: Arc<parking_lot::Mutex<Vec<u32>>> =
            Arc::new(parking_lot::Mutex::new(Vec::new()));
        let results = Arc::new(AtomicU32::new(0));

        let fb_log = Arc::clone(&feedback_log);
        let res_count = Arc::clone(&results);
        bus.send_goal(
            "/counter",
            &3u32.to_le_bytes(),
            Some(Arc::new(move |_: &str, bytes: &[u8]| {
                fb_log
                    .lock()
                    .push(u32::from_le_bytes(bytes.try_into().unwrap()));
            })),
            Some(Arc::new(move |action: &str, result: &[u8], outcome| {
                assert_eq!(action, "/counter");
                assert_eq!(outcome, Outcome::Succeeded);
                assert_eq!(u32::from_le_bytes(result.try_into().unwrap()), 3);
                res_count.fetch_add(1, Ordering::SeqCst);
            })),
            TICK_TIMEOUT,
        )
        .unwrap();

        // Three ticks advance the counter, the fourth retires the goal
        for _ in 0..3 {
            bus.process_actions();
        }
        assert_eq!(feedback_log.lock().as_slice(), &[1, 2, 3]);
        assert_eq!(results.load(Ordering::SeqCst), 0);

        bus.process_actions();
        assert_eq!(results.load(Ordering::SeqCst), 0);

        bus.process_pending(TICK_TIMEOUT);
        assert_eq!(results.load(Ordering::SeqCst), 1);

        // Exactly one result: draining again delivers nothing
        bus.process_pending(TICK_TIMEOUT);
        assert_eq!(results.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_terminates_on_the_next_tick() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/long",
            accept_four_bytes,
            counting_executor(&bus, "/long"),
            None,
        )
        .unwrap();

        let outcomes: Arc<parking_lot::Mutex<Vec<(Outcome, u32)>>> =
            Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&outcomes);
        bus.send_goal(
            "/long",
            &100u32.to_le_bytes(),
            None,
            Some(Arc::new(move |_: &str, result: &[u8], outcome| {
                sink.lock()
                    .push((outcome, u32::from_le_bytes(result.try_into().unwrap())));
            })),
            TICK_TIMEOUT,
        )
        .unwrap();

        bus.process_actions();
        bus.process_actions();
        assert!(!bus.is_goal_canceled("/long"));

        bus.cancel_goal("/long", TICK_TIMEOUT).unwrap();
        assert!(bus.is_goal_canceled("/long"));

        // The flag is monotonic until the goal terminates
        bus.process_actions();
        bus.process_pending(TICK_TIMEOUT);

        let delivered = outcomes.lock();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0], (Outcome::Canceled, 2));
    }

    #[test]
    fn cancel_notify_fires_immediately() {
        let bus = Arc::new(Bus::new());
        let notified = Arc::new(AtomicU32::new(0));

        let flag = Arc::clone(&notified);
        bus.create_action(
            "/notify",
            accept_four_bytes,
            counting_executor(&bus, "/notify"),
            Some(Arc::new(move || {
                flag.fetch_add(1, Ordering::SeqCst);
            })),
        )
        .unwrap();

        bus.send_goal("/notify", &9u32.to_le_bytes(), None, None, TICK_TIMEOUT)
            .unwrap();
        bus.cancel_goal("/notify", TICK_TIMEOUT).unwrap();
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejected_goal_leaves_no_trace() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/picky",
            |goal: &[u8]| goal.len() == 4,
            |_: Goal<'_>| Step::Done(Outcome::Succeeded, Payload::new()),
            None,
        )
        .unwrap();

        assert_eq!(
            bus.send_goal("/picky", b"wrong size", None, None, TICK_TIMEOUT),
            Err(Error::GoalRejected)
        );
        assert_eq!(bus.pending_count(), 0);

        let info = &bus.list_actions()[0];
        assert!(!info.active);
        assert_eq!(info.state, None);
    }

    #[test]
    fn second_goal_while_active_is_rejected() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/busy",
            accept_four_bytes,
            counting_executor(&bus, "/busy"),
            None,
        )
        .unwrap();

        bus.send_goal("/busy", &5u32.to_le_bytes(), None, None, TICK_TIMEOUT)
            .unwrap();
        assert_eq!(
            bus.send_goal("/busy", &5u32.to_le_bytes(), None, None, TICK_TIMEOUT),
            Err(Error::GoalActive)
        );
    }

    #[test]
    fn active_tracks_lifecycle_states() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/watched",
            accept_four_bytes,
            counting_executor(&bus, "/watched"),
            None,
        )
        .unwrap();

        bus.send_goal("/watched", &1u32.to_le_bytes(), None, None, TICK_TIMEOUT)
            .unwrap();
        let info = &bus.list_actions()[0];
        assert!(info.active);
        assert_eq!(info.state, Some(ActionState::Accepted));

        bus.process_actions();
        let info = &bus.list_actions()[0];
        assert!(info.active);
        assert_eq!(info.state, Some(ActionState::Executing));

        bus.process_actions();
        let info = &bus.list_actions()[0];
        assert!(!info.active);
        assert_eq!(info.state, Some(ActionState::Succeeded));
    }

    #[test]
    fn cancel_without_goal_fails() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/idle",
            accept_four_bytes,
            counting_executor(&bus, "/idle"),
            None,
        )
        .unwrap();

        assert_eq!(
            bus.cancel_goal("/idle", TICK_TIMEOUT),
            Err(Error::GoalInactive)
        );
        assert_eq!(
            bus.cancel_goal("/unknown", TICK_TIMEOUT),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn unknown_action_is_never_canceled() {
        let bus = Bus::new();
        assert!(!bus.is_goal_canceled("/missing"));
        assert!(!bus.is_goal_canceled("bad name"));
    }

    #[test]
    fn action_table_is_bounded() {
        let bus = Arc::new(Bus::new());
        for i in 0..MAX_ACTIONS {
            bus.create_action(
                &format!("/act{i}"),
                accept_four_bytes,
                |_: Goal<'_>| Step::Done(Outcome::Succeeded, Payload::new()),
                None,
            )
            .unwrap();
        }
        assert_eq!(
            bus.create_action(
                "/overflow",
                accept_four_bytes,
                |_: Goal<'_>| Step::Done(Outcome::Succeeded, Payload::new()),
                None,
            ),
            Err(Error::TableFull)
        );
    }

    #[test]
    fn duplicate_action_names_are_rejected() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/dup",
            accept_four_bytes,
            counting_executor(&bus, "/dup"),
            None,
        )
        .unwrap();
        assert_eq!(
            bus.create_action(
                "/dup",
                accept_four_bytes,
                counting_executor(&bus, "/dup"),
                None,
            ),
            Err(Error::DuplicateName)
        );
    }

    #[test]
    fn aborting_executor_delivers_aborted_outcome() {
        let bus = Arc::new(Bus::new());
        bus.create_action(
            "/fragile",
            |_: &[u8]| true,
            |_: Goal<'_>| Step::Done(Outcome::Aborted, Payload::from_bytes(b"gave up").unwrap()),
            None,
        )
        .unwrap();

        let outcomes = Arc::new(AtomicU32::new(0));
        let sink = Arc::clone(&outcomes);
        bus.send_goal(
            "/fragile",
            b"anything",
            None,
            Some(Arc::new(move |_: &str, result: &[u8], outcome| {
                assert_eq!(outcome, Outcome::Aborted);
                assert_eq!(result, b"gave up");
                sink.fetch_add(1, Ordering::SeqCst);
            })),
            TICK_TIMEOUT,
        )
        .unwrap();

        bus.process_actions();
        bus.process_pending(TICK_TIMEOUT);
        assert_eq!(outcomes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn executor_can_query_cancel_flag_through_the_bus() {
        let bus = Arc::new(Bus::new());
        let bus_in_step = Arc::clone(&bus);
        bus.create_action(
            "/introspective",
            |_: &[u8]| true,
            move |_: Goal<'_>| -> Step {
                if bus_in_step.is_goal_canceled("/introspective") {
                    Step::Done(Outcome::Canceled, Payload::new())
                } else {
                    Step::Pending
                }
            },
            None,
        )
        .unwrap();

        bus.send_goal("/introspective", b"go", None, None, TICK_TIMEOUT)
            .unwrap();
        bus.process_actions();
        bus.cancel_goal("/introspective", TICK_TIMEOUT).unwrap();
        bus.process_actions();

        let info = &bus.list_actions()[0];
        assert_eq!(info.state, Some(ActionState::Canceled));
        assert!(!info.active);
    }
}
