// SPDX-License-Identifier: MPL-2.0
//! Two-phase close: begin (exit transition plays) then commit (caller notified).
//!
//! Each scheduled close carries a [`CloseTicket`]. Cancelling bumps the
//! generation, so a timer that fires after the viewer was re-opened or torn
//! down presents a stale ticket and is ignored.

use crate::domain::ui::ExitTransition;
use std::time::Duration;

/// Identifies one scheduled close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// Closing sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    generation: u64,
    pending: Option<CloseTicket>,
    committed: bool,
    transition: ExitTransition,
}

/// Messages for the closing sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A close was requested.
    Begin,
    /// The exit transition timer fired.
    TimerElapsed(CloseTicket),
    /// Invalidate any pending close (re-open or teardown).
    Cancel,
}

/// Effects produced by the closing sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Start a timer that reports back with `ticket` after `delay`.
    Schedule { ticket: CloseTicket, delay: Duration },
    /// Notify the caller that the viewer closed.
    Commit,
}

impl State {
    #[must_use]
    pub fn new(transition: ExitTransition) -> Self {
        Self {
            transition,
            ..Self::default()
        }
    }

    /// Handle a closing message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Begin => {
                if self.is_closing() {
                    return Effect::None;
                }
                if self.transition.is_immediate() {
                    self.committed = true;
                    return Effect::Commit;
                }
                self.generation += 1;
                let ticket = CloseTicket(self.generation);
                self.pending = Some(ticket);
                Effect::Schedule {
                    ticket,
                    delay: self.transition.as_duration(),
                }
            }
            Message::TimerElapsed(ticket) => {
                if self.pending != Some(ticket) {
                    return Effect::None;
                }
                self.pending = None;
                self.committed = true;
                Effect::Commit
            }
            Message::Cancel => {
                self.generation += 1;
                self.pending = None;
                self.committed = false;
                Effect::None
            }
        }
    }

    /// True from the first close request until the next cancel.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.pending.is_some() || self.committed
    }
}
