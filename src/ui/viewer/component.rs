// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns one viewer session at a time. A session starts with
//! [`Message::Open`] and ends when the caller acknowledges [`Effect::Close`]
//! with [`Message::Closed`]. Input is routed to the sub-components, whose
//! effects are folded into a single [`Effect`] for the host application.

use crate::application::port::{NoopScrollLock, ScrollLock};
use crate::config::{GestureSettings, PIXELS_PER_WHEEL_TICK};
use crate::domain::ui::{Direction, Layout, ViewMode, ZoomLevel};
use crate::ui::viewer::subcomponents::{closing, drag, gesture, mode, navigation, zoom};
use iced::{event, keyboard, mouse, touch, window, Point, Size, Task, Vector};
use std::time::{Duration, Instant};

pub use closing::CloseTicket;

/// Wheel deltas smaller than this many ticks are ignored.
const WHEEL_DEAD_ZONE: f32 = 1e-3;

/// Parameters for opening the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// Image sources, in display order.
    pub images: Vec<String>,
    /// Index shown first. Out-of-range values are clamped.
    pub initial_index: usize,
    /// Whether the host renders a sidebar next to the carousel.
    pub has_sidebar: bool,
}

/// Messages emitted by the host or by viewer widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Open(OpenRequest),
    /// The caller finished tearing down after [`Effect::Close`].
    Closed,
    /// Unfiltered runtime event, stamped on arrival.
    RawEvent(event::Event),
    Touch(gesture::Message),
    MousePressed {
        position: Point,
        at: Instant,
    },
    CursorMoved(Point),
    MouseReleased,
    CursorLeft,
    WheelScrolled(mouse::ScrollDelta),
    KeyPressed(keyboard::Key),
    Navigate(Direction),
    /// Jump to a thumbnail.
    ShowImage(usize),
    /// A carousel tile was activated.
    ActivateTile,
    /// The "exit fullscreen" control was pressed.
    ExitFullscreen,
    /// The close control was pressed.
    CloseRequested,
    BackdropClicked,
    ContainerResized(Size),
    CloseTimerElapsed(CloseTicket),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The viewer closed. Unmount it and answer with [`Message::Closed`].
    Close,
    /// The exit transition started; [`Effect::Close`] follows after `delay`.
    CloseScheduled {
        ticket: CloseTicket,
        delay: Duration,
    },
    IndexChanged(usize),
    ModeChanged(ViewMode),
    /// Zoom level or pan changed.
    ZoomChanged,
}

/// Everything that lives only while the viewer is open.
#[derive(Debug, Clone)]
struct Session {
    images: Vec<String>,
    mode: mode::State,
    navigation: navigation::State,
    zoom: zoom::State,
    drag: drag::State,
    gesture: gesture::State,
}

impl Session {
    fn new(request: OpenRequest, settings: &GestureSettings, container: Size) -> Self {
        let count = request.images.len();
        let mut zoom = zoom::State::new(settings.wheel_zoom_step);
        zoom.handle(zoom::Message::Resize(container));

        Self {
            mode: mode::State::new(count, request.has_sidebar),
            navigation: navigation::State::new(count, request.initial_index),
            zoom,
            drag: drag::State::new(settings.double_tap_window, settings.double_tap_radius),
            gesture: gesture::State::new(*settings),
            images: request.images,
        }
    }

    fn gesture_context(&self) -> gesture::Context {
        gesture::Context {
            mode: self.mode.mode(),
            layout: self.mode.layout(),
            zoom: self.zoom.level(),
            pan: self.zoom.pan(),
            image_count: self.navigation.len(),
        }
    }

    /// Back to 1×, centered, with no gesture or drag in progress.
    fn reset_view(&mut self) {
        self.zoom.handle(zoom::Message::Reset);
        self.gesture.reset();
        self.drag.release();
    }

    fn apply_zoom(&mut self, message: zoom::Message) -> Effect {
        if !self.mode.mode().is_fullscreen() || self.navigation.is_empty() {
            return Effect::None;
        }
        match self.zoom.handle(message) {
            zoom::Effect::ZoomChanged => Effect::ZoomChanged,
            zoom::Effect::None => Effect::None,
        }
    }

    fn navigate(&mut self, message: navigation::Message) -> Effect {
        match self.navigation.handle(message) {
            navigation::Effect::IndexChanged(index) => {
                log::debug!("viewer: showing image {}/{}", index + 1, self.navigation.len());
                self.zoom.handle(zoom::Message::Reset);
                self.gesture.cancel();
                self.drag.release();
                Effect::IndexChanged(index)
            }
            navigation::Effect::None => Effect::None,
        }
    }
}

/// Complete viewer component state.
#[derive(Debug)]
pub struct State {
    session: Option<Session>,
    settings: GestureSettings,
    closing: closing::State,
    container: Size,
    scroll_lock: Box<dyn ScrollLock>,
    lock_held: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.release_scroll_lock();
    }
}

impl State {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self::with_scroll_lock(settings, Box::new(NoopScrollLock))
    }

    /// Creates a viewer that holds `scroll_lock` for as long as it is open.
    #[must_use]
    pub fn with_scroll_lock(settings: GestureSettings, scroll_lock: Box<dyn ScrollLock>) -> Self {
        Self {
            session: None,
            settings,
            closing: closing::State::new(settings.exit_transition),
            container: Size::ZERO,
            scroll_lock,
            lock_held: false,
        }
    }

    /// Listens to runtime events while open.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.is_open() {
            event::listen().map(Message::RawEvent)
        } else {
            iced::Subscription::none()
        }
    }

    /// Handles a message and turns a scheduled close into a timer task.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let effect = self.handle(message);
        let task = match effect {
            Effect::CloseScheduled { ticket, delay } => {
                // Sleep is created inside the task so no runtime is needed here.
                Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::CloseTimerElapsed(ticket),
                )
            }
            _ => Task::none(),
        };
        (effect, task)
    }

    /// Handles a message without scheduling any task.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(request) => {
                self.open(request);
                Effect::None
            }
            Message::Closed => {
                self.teardown();
                Effect::None
            }
            Message::CloseTimerElapsed(ticket) => {
                let effect = self.closing.handle(closing::Message::TimerElapsed(ticket));
                self.apply_closing(effect)
            }
            Message::RawEvent(event) => self.handle_raw_event(event, Instant::now()),
            Message::ContainerResized(size) => {
                self.container = size;
                match self.session.as_mut() {
                    Some(session) => match session.zoom.handle(zoom::Message::Resize(size)) {
                        zoom::Effect::ZoomChanged => Effect::ZoomChanged,
                        zoom::Effect::None => Effect::None,
                    },
                    None => Effect::None,
                }
            }
            input => {
                if self.session.is_none() || self.closing.is_closing() {
                    return Effect::None;
                }
                self.handle_input(input)
            }
        }
    }

    /// Translates a runtime event into a viewer message, stamped with `now`.
    pub fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> Effect {
        let message = match event {
            event::Event::Touch(touch_event) => Message::Touch(match touch_event {
                touch::Event::FingerPressed { id, position } => gesture::Message::FingerPressed {
                    id,
                    position,
                    at: now,
                },
                touch::Event::FingerMoved { id, position } => {
                    gesture::Message::FingerMoved { id, position }
                }
                touch::Event::FingerLifted { id, position } => gesture::Message::FingerLifted {
                    id,
                    position,
                    at: now,
                },
                touch::Event::FingerLost { id, .. } => gesture::Message::FingerLost { id },
            }),
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::WheelScrolled { delta } => Message::WheelScrolled(delta),
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    match self.session.as_ref().and_then(|s| s.drag.cursor_position()) {
                        Some(position) => Message::MousePressed { position, at: now },
                        None => return Effect::None,
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => Message::MouseReleased,
                mouse::Event::CursorMoved { position } => Message::CursorMoved(position),
                mouse::Event::CursorLeft => Message::CursorLeft,
                _ => return Effect::None,
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Message::KeyPressed(key)
            }
            event::Event::Window(window::Event::Resized(size)) => Message::ContainerResized(size),
            _ => return Effect::None,
        };
        self.handle(message)
    }

    fn handle_input(&mut self, message: Message) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };

        match message {
            Message::Touch(touch) => {
                if session.navigation.is_empty() {
                    return Effect::None;
                }
                let context = session.gesture_context();
                let intent = session.gesture.handle(touch, &context);
                self.apply_intent(intent)
            }
            Message::MousePressed { position, at } => {
                if session.navigation.is_empty() || !session.mode.mode().is_fullscreen() {
                    session.drag.cursor_position = Some(position);
                    return Effect::None;
                }
                let pressed = drag::Message::Pressed {
                    position,
                    pan: session.zoom.pan(),
                    can_pan: session.zoom.is_zoomed(),
                    at,
                };
                match session.drag.handle(pressed) {
                    drag::Effect::DoubleClick => session.apply_zoom(zoom::Message::Toggle),
                    drag::Effect::SetPan(pan) => session.apply_zoom(zoom::Message::SetPan(pan)),
                    drag::Effect::None => Effect::None,
                }
            }
            Message::CursorMoved(position) => match session.drag.handle(drag::Message::Moved(position)) {
                drag::Effect::SetPan(pan) => session.apply_zoom(zoom::Message::SetPan(pan)),
                drag::Effect::DoubleClick | drag::Effect::None => Effect::None,
            },
            Message::MouseReleased => {
                session.drag.handle(drag::Message::Released);
                Effect::None
            }
            Message::CursorLeft => {
                session.drag.handle(drag::Message::Left);
                Effect::None
            }
            Message::WheelScrolled(delta) => {
                let ticks = scroll_steps(&delta);
                if ticks.abs() < WHEEL_DEAD_ZONE {
                    return Effect::None;
                }
                session.apply_zoom(zoom::Message::Wheel(ticks))
            }
            Message::KeyPressed(key) => match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    self.apply_mode(mode::Message::Escape)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft)
                    if session.mode.arrow_keys_navigate() =>
                {
                    session.navigate(navigation::Message::Navigate(Direction::Previous))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight)
                    if session.mode.arrow_keys_navigate() =>
                {
                    session.navigate(navigation::Message::Navigate(Direction::Next))
                }
                _ => Effect::None,
            },
            Message::Navigate(direction) => {
                session.navigate(navigation::Message::Navigate(direction))
            }
            Message::ShowImage(index) => session.navigate(navigation::Message::GoTo(index)),
            Message::ActivateTile => self.apply_mode(mode::Message::ActivateTile),
            Message::ExitFullscreen => self.apply_mode(mode::Message::ExitFullscreen),
            Message::CloseRequested => self.apply_mode(mode::Message::CloseControl),
            Message::BackdropClicked => self.apply_mode(mode::Message::BackdropClicked),
            Message::Open(_)
            | Message::Closed
            | Message::RawEvent(_)
            | Message::ContainerResized(_)
            | Message::CloseTimerElapsed(_) => Effect::None,
        }
    }

    fn apply_intent(&mut self, intent: gesture::Intent) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        match intent {
            gesture::Intent::None => Effect::None,
            gesture::Intent::SetZoom(level) => session.apply_zoom(zoom::Message::SetLevel(level)),
            gesture::Intent::SetPan(pan) => session.apply_zoom(zoom::Message::SetPan(pan)),
            gesture::Intent::ToggleZoom => session.apply_zoom(zoom::Message::Toggle),
            gesture::Intent::Navigate(direction) => {
                session.navigate(navigation::Message::Navigate(direction))
            }
            gesture::Intent::Dismiss => self.begin_close(),
        }
    }

    fn apply_mode(&mut self, message: mode::Message) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        match session.mode.handle(message) {
            mode::Effect::ModeChanged(mode) => {
                log::debug!("viewer: mode changed to {mode:?}");
                session.reset_view();
                Effect::ModeChanged(mode)
            }
            mode::Effect::Close => self.begin_close(),
            mode::Effect::None => Effect::None,
        }
    }

    fn begin_close(&mut self) -> Effect {
        let effect = self.closing.handle(closing::Message::Begin);
        self.apply_closing(effect)
    }

    fn apply_closing(&mut self, effect: closing::Effect) -> Effect {
        match effect {
            closing::Effect::None => Effect::None,
            closing::Effect::Schedule { ticket, delay } => {
                log::debug!("viewer: closing in {}ms", delay.as_millis());
                if let Some(session) = self.session.as_mut() {
                    session.gesture.reset();
                    session.drag.release();
                }
                Effect::CloseScheduled { ticket, delay }
            }
            closing::Effect::Commit => {
                log::debug!("viewer: closed");
                if let Some(session) = self.session.as_mut() {
                    session.gesture.reset();
                    session.drag.release();
                }
                self.release_scroll_lock();
                Effect::Close
            }
        }
    }

    fn open(&mut self, request: OpenRequest) {
        self.closing.handle(closing::Message::Cancel);
        let session = Session::new(request, &self.settings, self.container);
        log::debug!(
            "viewer: opened with {} image(s) in {:?} mode",
            session.images.len(),
            session.mode.mode()
        );
        self.session = Some(session);
        if !self.lock_held {
            self.scroll_lock.acquire();
            self.lock_held = true;
        }
    }

    fn teardown(&mut self) {
        self.closing.handle(closing::Message::Cancel);
        if self.session.take().is_some() {
            log::debug!("viewer: torn down");
        }
        self.release_scroll_lock();
    }

    fn release_scroll_lock(&mut self) {
        if self.lock_held {
            self.scroll_lock.release();
            self.lock_held = false;
        }
    }

    /// Whether a session exists (including while the exit transition plays).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a close has begun and input is ignored.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.session.is_some() && self.closing.is_closing()
    }

    #[must_use]
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        self.session
            .as_ref()
            .map(|s| s.images.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn mode(&self) -> Option<ViewMode> {
        self.session.as_ref().map(|s| s.mode.mode())
    }

    /// Region arrangement, or `None` when closed or there is nothing to show.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.session
            .as_ref()
            .filter(|s| !s.navigation.is_empty())
            .map(|s| s.mode.layout())
    }

    /// Whether prev/next controls have another image to move to.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.navigation.can_navigate())
    }

    /// Whether the host should keep the sidebar mounted.
    #[must_use]
    pub fn sidebar_mounted(&self) -> bool {
        self.layout().is_some_and(Layout::shows_sidebar)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session
            .as_ref()
            .filter(|s| !s.navigation.is_empty())
            .map(|s| s.navigation.current_index())
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        let session = self.session.as_ref()?;
        session
            .images
            .get(session.navigation.current_index())
            .map(String::as_str)
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.session
            .as_ref()
            .map_or(ZoomLevel::MIN, |s| s.zoom.level())
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.session.as_ref().map_or(Vector::ZERO, |s| s.zoom.pan())
    }

    /// Visual offset of the current image while a swipe is committed.
    #[must_use]
    pub fn drag_offset(&self) -> Vector {
        self.session
            .as_ref()
            .map_or(Vector::ZERO, |s| s.gesture.drag_offset())
    }

    /// Backdrop opacity, fading out as the image is dragged down.
    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        let pulled = self.drag_offset().y.max(0.0);
        let fade = self.settings.dismiss_fade_distance.max(1.0);
        1.0 - (pulled / fade).min(1.0)
    }

    /// Whether the host should suppress default touch scrolling right now.
    #[must_use]
    pub fn suppresses_default(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.gesture.suppresses_default())
    }
}

fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_WHEEL_TICK,
    }
}
