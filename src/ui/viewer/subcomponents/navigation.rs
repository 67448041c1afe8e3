// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: wraparound index over the image sequence.

pub use crate::domain::ui::Direction;

/// Navigation sub-component state.
///
/// `current_index` is always within `[0, len - 1]` when `len > 0`, and 0 for
/// an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    current_index: usize,
    len: usize,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Step one image in a direction, wrapping at both ends.
    Navigate(Direction),
    /// Jump directly to an index (clamped into range).
    GoTo(usize),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The current index changed; zoom and pan must reset.
    IndexChanged(usize),
}

impl State {
    /// Creates navigation over `len` images starting at `initial_index`,
    /// clamped into range.
    #[must_use]
    pub fn new(len: usize, initial_index: usize) -> Self {
        Self {
            current_index: initial_index.min(len.saturating_sub(1)),
            len,
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let target = match msg {
            Message::Navigate(direction) => {
                if self.len <= 1 {
                    return Effect::None;
                }
                match direction {
                    Direction::Next => (self.current_index + 1) % self.len,
                    Direction::Previous => (self.current_index + self.len - 1) % self.len,
                }
            }
            Message::GoTo(index) => {
                if self.len == 0 {
                    return Effect::None;
                }
                index.min(self.len - 1)
            }
        };

        if target == self.current_index {
            return Effect::None;
        }
        self.current_index = target;
        Effect::IndexChanged(target)
    }

    /// Index of the image currently shown.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of images in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether prev/next controls have anything to move to.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }
}
