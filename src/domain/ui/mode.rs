// SPDX-License-Identifier: MPL-2.0
//! Viewer mode, layout and navigation direction value objects.

/// Presentation mode of an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Scrollable image strip, optionally paired with a detail panel.
    Carousel,
    /// One image, full-bleed, with zoom and pan enabled.
    #[default]
    Fullscreen,
}

impl ViewMode {
    /// Mode a viewer starts in for a given number of images.
    ///
    /// A single image (or none) has nothing to browse, so it opens fullscreen.
    #[must_use]
    pub fn initial(image_count: usize) -> Self {
        if image_count > 1 {
            Self::Carousel
        } else {
            Self::Fullscreen
        }
    }

    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        self == Self::Fullscreen
    }
}

/// Region arrangement derived from mode and sidebar presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Carousel on the primary side, injected detail content on the other.
    Split,
    /// A single region covering the whole viewer.
    FullBleed,
}

impl Layout {
    #[must_use]
    pub fn for_mode(mode: ViewMode, has_sidebar: bool) -> Self {
        if mode == ViewMode::Carousel && has_sidebar {
            Self::Split
        } else {
            Self::FullBleed
        }
    }

    /// Whether the detail panel is mounted.
    #[must_use]
    pub fn shows_sidebar(self) -> bool {
        self == Self::Split
    }
}

/// Direction of navigation through the image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Navigate to the next image.
    Next,
    /// Navigate to the previous image.
    Previous,
}
