//! Transitions - Timed alpha changes driven by the host.
//!
//! There are no timers or threads. The host advances every pending
//! transition by calling [`advance_transitions`] with the elapsed time of a
//! frame.
//!
//! # Completion guarantee
//!
//! A transition's completion callback runs exactly once, whichever happens
//! first:
//!
//! - the transition reaches its end in [`advance_transitions`]
//! - [`finish_transitions`] jumps every transition to its end
//! - [`cancel_transition`] interrupts it
//! - [`reset_transitions`] clears the queue
//!
//! Replacement presets put structural removal in the completion, so a removal
//! is never lost to an interrupted fade.
//!
//! # Example
//!
//! ```ignore
//! let id = animate(TransitionConfig::FADE, move |t| view.set_alpha(t), None);
//! advance_transitions(Duration::from_millis(16));
//! ```

use std::cell::{Cell, RefCell};
use std::time::Duration;

// =============================================================================
// Configuration
// =============================================================================

/// Timing of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub delay: Duration,
}

impl TransitionConfig {
    /// Fade used by `remove_and_fade_in`.
    pub const FADE_IN: Self = Self::new(Duration::from_millis(300), Duration::ZERO);
    /// Fade used by `cross_fade` and the outgoing half of `fade_out_and_fade_in`.
    pub const FADE: Self = Self::new(Duration::from_millis(330), Duration::ZERO);
    /// Incoming half of `fade_out_and_fade_in`, starting after the old value faded.
    pub const FADE_IN_AFTER_FADE_OUT: Self =
        Self::new(Duration::from_millis(330), Duration::from_millis(400));

    pub const fn new(duration: Duration, delay: Duration) -> Self {
        Self { duration, delay }
    }

    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::FADE
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Handle to a scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(usize);

type Step = Box<dyn Fn(f32)>;
type Completion = Box<dyn FnOnce()>;

struct Transition {
    id: TransitionId,
    config: TransitionConfig,
    elapsed: Duration,
    step: Step,
    completion: Option<Completion>,
}

impl Transition {
    /// Eased progress in `0.0..=1.0`, or `None` while still delayed.
    fn progress(&self) -> Option<f32> {
        let active = self.elapsed.checked_sub(self.config.delay)?;
        if self.config.duration.is_zero() {
            return Some(1.0);
        }
        let linear = (active.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0);
        Some(ease_in_out(linear))
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.config.delay + self.config.duration
    }

    /// Jump to the end and run the completion.
    fn finish(mut self) {
        (self.step)(1.0);
        if let Some(completion) = self.completion.take() {
            completion();
        }
    }
}

impl Drop for Transition {
    fn drop(&mut self) {
        if let Some(completion) = self.completion.take() {
            completion();
        }
    }
}

thread_local! {
    static TRANSITIONS: RefCell<Vec<Transition>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<usize> = const { Cell::new(0) };
}

/// Smoothstep ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// =============================================================================
// Public API
// =============================================================================

/// Schedule a transition.
///
/// `step` receives eased progress from `0.0` to `1.0`. `completion` runs once
/// the transition ends or is interrupted.
pub fn animate(
    config: TransitionConfig,
    step: impl Fn(f32) + 'static,
    completion: Option<Box<dyn FnOnce()>>,
) -> TransitionId {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        TransitionId(id)
    });
    tracing::trace!(id = id.0, ?config, "transition scheduled");

    TRANSITIONS.with(|transitions| {
        transitions.borrow_mut().push(Transition {
            id,
            config,
            elapsed: Duration::ZERO,
            step: Box::new(step),
            completion,
        });
    });
    id
}

/// Advance all pending transitions by `elapsed`.
///
/// Steps and completions run with the queue unlocked, so they may schedule
/// new transitions; those start on the next call.
pub fn advance_transitions(elapsed: Duration) {
    let pending = TRANSITIONS.with(|transitions| std::mem::take(&mut *transitions.borrow_mut()));

    let mut running = Vec::with_capacity(pending.len());
    for mut transition in pending {
        transition.elapsed += elapsed;
        if transition.is_done() {
            transition.finish();
        } else {
            if let Some(progress) = transition.progress() {
                (transition.step)(progress);
            }
            running.push(transition);
        }
    }

    requeue(running);
}

/// Run every pending transition to its end.
pub fn finish_transitions() {
    // Completions may schedule more transitions; drain until quiet
    loop {
        let pending = TRANSITIONS.with(|transitions| std::mem::take(&mut *transitions.borrow_mut()));
        if pending.is_empty() {
            break;
        }
        for transition in pending {
            transition.finish();
        }
    }
}

/// Interrupt a transition. Its completion still runs; its step does not.
///
/// Returns `false` when the transition already ended.
pub fn cancel_transition(id: TransitionId) -> bool {
    let cancelled = TRANSITIONS.with(|transitions| {
        let mut transitions = transitions.borrow_mut();
        let index = transitions.iter().position(|t| t.id == id)?;
        Some(transitions.remove(index))
    });
    // Dropped outside the borrow: the completion runs in Drop
    cancelled.is_some()
}

pub fn pending_transitions() -> usize {
    TRANSITIONS.with(|transitions| transitions.borrow().len())
}

pub fn is_pending(id: TransitionId) -> bool {
    TRANSITIONS.with(|transitions| transitions.borrow().iter().any(|t| t.id == id))
}

/// Clear all transitions, running their completions (for testing).
pub fn reset_transitions() {
    let pending = TRANSITIONS.with(|transitions| std::mem::take(&mut *transitions.borrow_mut()));
    // Completions run on drop and may schedule; their ids must stay unique
    NEXT_ID.with(|next| next.set(0));
    drop(pending);
}

fn requeue(running: Vec<Transition>) {
    TRANSITIONS.with(|transitions| {
        let mut transitions = transitions.borrow_mut();
        let scheduled = std::mem::replace(&mut *transitions, running);
        transitions.extend(scheduled);
    });
}
