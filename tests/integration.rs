// SPDX-License-Identifier: MPL-2.0
use iced::touch::Finger;
use iced::{Point, Size, Vector};
use iced_lightbox::config::{self, Config, GestureSettings};
use iced_lightbox::domain::ui::{Direction, Layout, ViewMode, ZoomLevel};
use iced_lightbox::ui::viewer::{Effect, Message, OpenRequest, State, TouchMessage};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn open_viewer(count: usize, initial_index: usize, has_sidebar: bool) -> State {
    let mut viewer = State::default();
    viewer.handle(Message::ContainerResized(Size::new(1000.0, 800.0)));
    viewer.handle(Message::Open(OpenRequest {
        images: (0..count).map(|i| format!("photo-{i}.jpg")).collect(),
        initial_index,
        has_sidebar,
    }));
    viewer
}

/// Drives a one-finger gesture and returns every effect it produced.
fn one_finger(viewer: &mut State, from: Point, to: Point, at: Instant) -> Vec<Effect> {
    let id = Finger(1);
    [
        TouchMessage::FingerPressed {
            id,
            position: from,
            at,
        },
        TouchMessage::FingerMoved { id, position: to },
        TouchMessage::FingerLifted {
            id,
            position: to,
            at: at + Duration::from_millis(80),
        },
    ]
    .into_iter()
    .map(|message| viewer.handle(Message::Touch(message)))
    .filter(|effect| *effect != Effect::None)
    .collect()
}

fn tap(viewer: &mut State, position: Point, at: Instant) -> Vec<Effect> {
    one_finger(viewer, position, position, at)
}

fn closes(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Close | Effect::CloseScheduled { .. }))
        .count()
}

#[test]
fn single_image_opens_fullscreen_and_escape_closes() {
    let mut viewer = open_viewer(1, 0, true);
    assert_eq!(viewer.mode(), Some(ViewMode::Fullscreen));
    assert_eq!(viewer.layout(), Some(Layout::FullBleed));

    let effect = viewer.handle(Message::KeyPressed(iced::keyboard::Key::Named(
        iced::keyboard::key::Named::Escape,
    )));
    let Effect::CloseScheduled { ticket, .. } = effect else {
        panic!("expected CloseScheduled, got {effect:?}");
    };
    assert_eq!(viewer.handle(Message::CloseTimerElapsed(ticket)), Effect::Close);
    // Never falls back to carousel
    assert_eq!(viewer.mode(), Some(ViewMode::Fullscreen));
}

#[test]
fn previous_wraps_around_to_last_image() {
    let mut viewer = open_viewer(5, 2, false);
    assert_eq!(viewer.current_index(), Some(2));

    viewer.handle(Message::Navigate(Direction::Previous));
    viewer.handle(Message::Navigate(Direction::Previous));
    assert_eq!(viewer.current_index(), Some(0));

    assert_eq!(
        viewer.handle(Message::Navigate(Direction::Previous)),
        Effect::IndexChanged(4)
    );
}

#[test]
fn next_n_times_returns_to_start() {
    for count in 1..=6 {
        for start in 0..count {
            let mut viewer = open_viewer(count, start, false);
            for _ in 0..count {
                viewer.handle(Message::Navigate(Direction::Next));
            }
            assert_eq!(viewer.current_index(), Some(start));
        }
    }
}

#[test]
fn double_tap_toggles_between_one_and_two() {
    let mut viewer = open_viewer(1, 0, false);
    let start = Instant::now();
    let center = Point::new(500.0, 400.0);

    tap(&mut viewer, center, start);
    let effects = tap(&mut viewer, center, start + Duration::from_millis(250));
    assert_eq!(effects, vec![Effect::ZoomChanged]);
    assert_eq!(viewer.zoom().value(), 2.0);

    // Pan a bit while zoomed
    one_finger(
        &mut viewer,
        Point::new(500.0, 400.0),
        Point::new(560.0, 430.0),
        start + Duration::from_millis(1000),
    );
    assert_eq!(viewer.pan(), Vector::new(60.0, 30.0));

    tap(&mut viewer, center, start + Duration::from_millis(2000));
    tap(&mut viewer, center, start + Duration::from_millis(2250));
    assert_eq!(viewer.zoom(), ZoomLevel::MIN);
    assert_eq!(viewer.pan(), Vector::ZERO);
}

#[test]
fn horizontal_swipe_navigates_once() {
    let mut viewer = open_viewer(4, 0, true);
    assert_eq!(viewer.mode(), Some(ViewMode::Carousel));

    let effects = one_finger(
        &mut viewer,
        Point::new(400.0, 300.0),
        Point::new(280.0, 310.0),
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::IndexChanged(1)]);
    assert_eq!(viewer.drag_offset(), Vector::ZERO);
}

#[test]
fn mostly_vertical_swipe_in_split_layout_closes_once() {
    let mut viewer = open_viewer(4, 0, true);
    assert_eq!(viewer.layout(), Some(Layout::Split));

    let effects = one_finger(
        &mut viewer,
        Point::new(400.0, 100.0),
        Point::new(405.0, 250.0),
        Instant::now(),
    );
    assert_eq!(closes(&effects), 1);
    assert_eq!(viewer.current_index(), Some(0));

    // A second dismiss while closing is swallowed
    let effects = one_finger(
        &mut viewer,
        Point::new(400.0, 100.0),
        Point::new(405.0, 250.0),
        Instant::now(),
    );
    assert_eq!(closes(&effects), 0);
}

#[test]
fn fullscreen_and_back_keeps_index_and_resets_zoom() {
    let mut viewer = open_viewer(3, 1, true);
    assert_eq!(
        viewer.handle(Message::ActivateTile),
        Effect::ModeChanged(ViewMode::Fullscreen)
    );
    viewer.handle(Message::WheelScrolled(iced::mouse::ScrollDelta::Lines {
        x: 0.0,
        y: 5.0,
    }));
    assert!(viewer.zoom().is_zoomed());

    assert_eq!(
        viewer.handle(Message::KeyPressed(iced::keyboard::Key::Named(
            iced::keyboard::key::Named::Escape
        ))),
        Effect::ModeChanged(ViewMode::Carousel)
    );
    assert_eq!(viewer.current_index(), Some(1));
    assert_eq!(viewer.zoom(), ZoomLevel::MIN);
    assert_eq!(viewer.pan(), Vector::ZERO);
}

#[test]
fn index_change_resets_zoom_and_pan() {
    let mut viewer = open_viewer(3, 0, false);
    viewer.handle(Message::ActivateTile);
    viewer.handle(Message::WheelScrolled(iced::mouse::ScrollDelta::Lines {
        x: 0.0,
        y: 20.0,
    }));
    one_finger(
        &mut viewer,
        Point::new(100.0, 100.0),
        Point::new(300.0, 100.0),
        Instant::now(),
    );
    assert!(viewer.pan().x > 0.0);

    viewer.handle(Message::ShowImage(2));
    assert_eq!(viewer.zoom(), ZoomLevel::MIN);
    assert_eq!(viewer.pan(), Vector::ZERO);
}

#[test]
fn zoom_stays_clamped_under_wheel_and_pinch() {
    let mut viewer = open_viewer(1, 0, false);
    let at = Instant::now();
    for ticks in [3.0, 40.0, -7.0, -100.0, 12.5, 0.25] {
        viewer.handle(Message::WheelScrolled(iced::mouse::ScrollDelta::Lines {
            x: 0.0,
            y: ticks,
        }));
        let zoom = viewer.zoom().value();
        assert!((1.0..=5.0).contains(&zoom), "zoom {zoom} out of range");
    }

    viewer.handle(Message::Touch(TouchMessage::FingerPressed {
        id: Finger(1),
        position: Point::new(100.0, 100.0),
        at,
    }));
    viewer.handle(Message::Touch(TouchMessage::FingerPressed {
        id: Finger(2),
        position: Point::new(110.0, 100.0),
        at,
    }));
    for x in [900.0, 101.0, 100.5, 5000.0] {
        viewer.handle(Message::Touch(TouchMessage::FingerMoved {
            id: Finger(2),
            position: Point::new(x, 100.0),
        }));
        let zoom = viewer.zoom().value();
        assert!((1.0..=5.0).contains(&zoom), "zoom {zoom} out of range");
    }
    assert!(viewer.suppresses_default());
}

#[test]
fn pinch_then_lift_continues_as_pan() {
    let mut viewer = open_viewer(1, 0, false);
    let at = Instant::now();
    let press = |id, x| {
        Message::Touch(TouchMessage::FingerPressed {
            id: Finger(id),
            position: Point::new(x, 400.0),
            at,
        })
    };
    viewer.handle(press(1, 400.0));
    viewer.handle(press(2, 500.0));
    viewer.handle(Message::Touch(TouchMessage::FingerMoved {
        id: Finger(2),
        position: Point::new(700.0, 400.0),
    }));
    assert_eq!(viewer.zoom().value(), 3.0);

    viewer.handle(Message::Touch(TouchMessage::FingerLifted {
        id: Finger(2),
        position: Point::new(700.0, 400.0),
        at,
    }));
    viewer.handle(Message::Touch(TouchMessage::FingerMoved {
        id: Finger(1),
        position: Point::new(300.0, 350.0),
    }));
    assert_eq!(viewer.pan(), Vector::new(-100.0, -50.0));
    assert_eq!(viewer.current_index(), Some(0));
}

#[test]
fn carousel_never_shown_for_single_image() {
    let mut viewer = open_viewer(1, 0, true);
    for message in [
        Message::ExitFullscreen,
        Message::Navigate(Direction::Next),
        Message::ActivateTile,
    ] {
        viewer.handle(message);
        assert_eq!(viewer.mode(), Some(ViewMode::Fullscreen));
    }
}

#[test]
fn reopen_mid_gesture_resets_everything() {
    let mut viewer = open_viewer(3, 0, false);
    viewer.handle(Message::Touch(TouchMessage::FingerPressed {
        id: Finger(1),
        position: Point::new(100.0, 100.0),
        at: Instant::now(),
    }));
    viewer.handle(Message::Touch(TouchMessage::FingerMoved {
        id: Finger(1),
        position: Point::new(100.0, 300.0),
    }));
    assert!(viewer.backdrop_opacity() < 1.0);

    viewer.handle(Message::Open(OpenRequest {
        images: vec!["x.jpg".into(), "y.jpg".into()],
        initial_index: 1,
        has_sidebar: false,
    }));
    assert_eq!(viewer.drag_offset(), Vector::ZERO);
    assert_eq!(viewer.backdrop_opacity(), 1.0);
    assert_eq!(viewer.current_image(), Some("y.jpg"));

    // Lifting the stale finger does nothing
    assert_eq!(
        viewer.handle(Message::Touch(TouchMessage::FingerLifted {
            id: Finger(1),
            position: Point::new(100.0, 300.0),
            at: Instant::now(),
        })),
        Effect::None
    );
    assert!(!viewer.is_closing());
}

#[test]
fn config_round_trip_drives_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut custom = Config::default();
    custom.touch.swipe_threshold = Some(120.0);
    custom.dismiss.leftward_swipe_in_split = Some(true);
    custom.transition.exit_ms = Some(0);
    config::save_to_path(&custom, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, custom);

    let settings = loaded.gesture_settings();
    assert_ne!(settings, GestureSettings::default());
    let mut viewer = State::new(settings);
    viewer.handle(Message::Open(OpenRequest {
        images: vec!["a.jpg".into(), "b.jpg".into()],
        initial_index: 0,
        has_sidebar: true,
    }));

    // 100px is below the raised threshold
    let effects = one_finger(
        &mut viewer,
        Point::new(300.0, 100.0),
        Point::new(200.0, 100.0),
        Instant::now(),
    );
    assert!(effects.is_empty());

    // Past it, a leftward swipe in the split layout dismisses immediately
    let effects = one_finger(
        &mut viewer,
        Point::new(300.0, 100.0),
        Point::new(150.0, 100.0),
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::Close]);

    dir.close().expect("Failed to close temporary directory");
}
