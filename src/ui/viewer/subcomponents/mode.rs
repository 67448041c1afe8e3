// SPDX-License-Identifier: MPL-2.0
//! View mode sub-component: carousel / fullscreen state machine.
//!
//! ```text
//!            ActivateTile
//!  Carousel ─────────────▶ Fullscreen
//!     ▲                        │
//!     └────────────────────────┘
//!     Escape / ExitFullscreen (only with more than one image)
//! ```
//!
//! Every other trigger closes the viewer, except a backdrop click in the
//! split layout, which is ignored.

pub use crate::domain::ui::{Layout, ViewMode};

/// View mode sub-component state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    mode: ViewMode,
    image_count: usize,
    has_sidebar: bool,
}

/// Messages for the view mode sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An image tile was activated.
    ActivateTile,
    /// Escape key pressed.
    Escape,
    /// Explicit "exit fullscreen" control.
    ExitFullscreen,
    /// Explicit close control.
    CloseControl,
    /// Click on the backdrop outside the image.
    BackdropClicked,
}

/// Effects produced by mode transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Mode changed. Entering carousel requires a zoom/pan reset.
    ModeChanged(ViewMode),
    /// The viewer should close.
    Close,
}

impl Default for State {
    fn default() -> Self {
        Self::new(0, false)
    }
}

impl State {
    /// Creates the controller in its initial mode for `image_count` images.
    #[must_use]
    pub fn new(image_count: usize, has_sidebar: bool) -> Self {
        Self {
            mode: ViewMode::initial(image_count),
            image_count,
            has_sidebar,
        }
    }

    /// Handle a mode message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match (self.mode, msg) {
            (ViewMode::Carousel, Message::ActivateTile) => {
                self.mode = ViewMode::Fullscreen;
                Effect::ModeChanged(ViewMode::Fullscreen)
            }
            (ViewMode::Fullscreen, Message::ActivateTile) => Effect::None,
            (ViewMode::Fullscreen, Message::Escape | Message::ExitFullscreen) => {
                if self.can_browse() {
                    self.mode = ViewMode::Carousel;
                    Effect::ModeChanged(ViewMode::Carousel)
                } else {
                    Effect::Close
                }
            }
            (ViewMode::Carousel, Message::ExitFullscreen) => Effect::None,
            (_, Message::BackdropClicked) if self.layout() == Layout::Split => Effect::None,
            (_, Message::Escape | Message::CloseControl | Message::BackdropClicked) => {
                Effect::Close
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Region arrangement for the current mode.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::for_mode(self.mode, self.has_sidebar)
    }

    /// Arrow keys navigate in fullscreen, and in carousel only while no
    /// detail panel is shown.
    #[must_use]
    pub fn arrow_keys_navigate(&self) -> bool {
        self.mode.is_fullscreen() || !self.has_sidebar
    }

    /// Carousel mode exists only for more than one image.
    fn can_browse(&self) -> bool {
        self.image_count > 1
    }
}
