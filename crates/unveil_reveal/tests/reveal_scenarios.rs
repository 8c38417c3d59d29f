//! End-to-end reveal scenarios driven through the public API only:
//! a memory surface, a scrolling viewport, and a coordinator ticked at a
//! fixed cadence.

use unveil_animation::{Easing, RevealSpec};
use unveil_core::{MemorySurface, NodeId, Rect, RenderSurface, StyleProperty, Viewport};
use unveil_reveal::{Group, Phase, RevealCoordinator, Threshold};

fn opacity(surface: &MemorySurface, node: NodeId) -> f32 {
    surface
        .style(node)
        .and_then(|s| s.get(StyleProperty::Opacity))
        .expect("node has an opacity style")
}

/// One section at y 900..1300; a 600-tall viewport shows half of it at
/// scroll 500 and none of it at scroll 0.
fn one_section() -> (MemorySurface, NodeId, Viewport) {
    let mut surface = MemorySurface::new();
    let node = surface.insert(Rect::new(0.0, 900.0, 800.0, 400.0));
    (surface, node, Viewport::new(800.0, 600.0))
}

/// Spec §-scenario: threshold 0.2/0.2, opacity 0→1 over 1000 ms, enter at
/// t=0 gives opacity 1 at t=1000; leave at t=2000 gives opacity 0 at t=3000.
#[test]
fn enter_then_leave_timing() {
    let (mut surface, node, mut viewport) = one_section();
    let mut coordinator = RevealCoordinator::new();
    coordinator
        .register(
            &mut surface,
            Group::single(node),
            RevealSpec::fade()
                .with_duration(1000.0)
                .with_easing(Easing::Linear)
                .reverse_on_exit(true),
            Threshold::ratio(0.2),
        )
        .unwrap();

    // t=0: cross the enter threshold.
    viewport.scroll_to(500.0);
    coordinator.tick(&mut surface, &viewport, 0.0);

    // Advance to t=1000 in frame-sized steps.
    let mut t = 0.0;
    while t < 1000.0 {
        coordinator.tick(&mut surface, &viewport, 20.0);
        t += 20.0;
    }
    assert_eq!(opacity(&surface, node), 1.0);

    // Idle until t=2000, then cross the exit threshold.
    while t < 2000.0 {
        coordinator.tick(&mut surface, &viewport, 20.0);
        t += 20.0;
    }
    viewport.scroll_to(0.0);
    coordinator.tick(&mut surface, &viewport, 0.0);

    // t=3000: fully reversed, exactly back to the initial style.
    while t < 3000.0 {
        coordinator.tick(&mut surface, &viewport, 20.0);
        t += 20.0;
    }
    assert_eq!(opacity(&surface, node), 0.0);
}

/// Stagger law: with interval S, element K starts at trigger + delay + K*S.
#[test]
fn group_stagger_start_times() {
    let mut surface = MemorySurface::new();
    let container = surface.insert(Rect::new(0.0, 900.0, 800.0, 400.0));
    let bars: Vec<NodeId> = (0..3)
        .map(|i| surface.insert(Rect::new(0.0, 920.0 + i as f32 * 40.0, 800.0, 30.0)))
        .collect();
    let mut viewport = Viewport::new(800.0, 600.0);

    let mut coordinator = RevealCoordinator::new();
    coordinator
        .register(
            &mut surface,
            Group::new(container)
                .elements(bars.iter().copied())
                .stagger(100.0),
            RevealSpec::fade()
                .with_duration(1000.0)
                .with_easing(Easing::Linear),
            Threshold::ratio(0.2),
        )
        .unwrap();

    // Trigger the group at t=0.
    viewport.scroll_to(500.0);
    coordinator.tick(&mut surface, &viewport, 0.0);

    // t=50: only element 0 has started moving.
    coordinator.tick(&mut surface, &viewport, 50.0);
    assert!(opacity(&surface, bars[0]) > 0.0);
    assert_eq!(opacity(&surface, bars[1]), 0.0);
    assert_eq!(opacity(&surface, bars[2]), 0.0);

    // t=150: elements 0 and 1 moving, element 2 still held by its delay.
    coordinator.tick(&mut surface, &viewport, 100.0);
    assert!(opacity(&surface, bars[1]) > 0.0);
    assert_eq!(opacity(&surface, bars[2]), 0.0);

    // t=250: all three moving, offset by exactly one stagger interval each
    // (linear easing makes the offsets directly comparable).
    coordinator.tick(&mut surface, &viewport, 100.0);
    let (a, b, c) = (
        opacity(&surface, bars[0]),
        opacity(&surface, bars[1]),
        opacity(&surface, bars[2]),
    );
    assert!(a > b && b > c && c > 0.0);
    assert!((a - b - 0.1).abs() < 1e-3);
    assert!((b - c - 0.1).abs() < 1e-3);
}

/// The whole group rides one trigger: a child far outside the viewport
/// still reveals when the container crosses the threshold.
#[test]
fn group_shares_container_trigger() {
    let mut surface = MemorySurface::new();
    let container = surface.insert(Rect::new(0.0, 900.0, 800.0, 1200.0));
    let heading = surface.insert(Rect::new(0.0, 920.0, 800.0, 60.0));
    let footer = surface.insert(Rect::new(0.0, 1900.0, 800.0, 60.0));
    let mut viewport = Viewport::new(800.0, 600.0);

    let mut coordinator = RevealCoordinator::new();
    let handle = coordinator
        .register(
            &mut surface,
            Group::new(container).element(heading).element(footer),
            RevealSpec::fade().with_duration(400.0),
            Threshold::ratio(0.2),
        )
        .unwrap();

    // Scroll so 25% of the tall container is visible; the footer itself is
    // still far below the fold.
    viewport.scroll_to(600.0);
    coordinator.tick(&mut surface, &viewport, 0.0);
    coordinator.tick(&mut surface, &viewport, 400.0);

    assert_eq!(coordinator.phase(handle, 0), Some(Phase::Visible));
    assert_eq!(coordinator.phase(handle, 1), Some(Phase::Visible));
    assert_eq!(opacity(&surface, footer), 1.0);
}

/// Unregistering mid-flight stops the group synchronously: no style write
/// may happen afterwards.
#[test]
fn unregister_mid_animation() {
    let (mut surface, node, mut viewport) = one_section();
    let mut coordinator = RevealCoordinator::new();
    let handle = coordinator
        .register(
            &mut surface,
            Group::single(node),
            RevealSpec::fade()
                .with_duration(1000.0)
                .with_easing(Easing::Linear),
            Threshold::ratio(0.2),
        )
        .unwrap();

    viewport.scroll_to(500.0);
    coordinator.tick(&mut surface, &viewport, 0.0);
    coordinator.tick(&mut surface, &viewport, 500.0);
    let frozen = opacity(&surface, node);
    assert!((frozen - 0.5).abs() < 1e-4);

    coordinator.unregister(handle);
    assert!(coordinator.is_idle());

    let writes = surface.style_writes();
    for _ in 0..30 {
        coordinator.tick(&mut surface, &viewport, 16.0);
    }
    assert_eq!(surface.style_writes(), writes);
    assert_eq!(opacity(&surface, node), frozen);
}

/// An element detached from the surface mid-registration stays silent: no
/// events, no panics, and re-observing it is a no-op.
#[test]
fn detached_element_is_noop() {
    let (mut surface, node, mut viewport) = one_section();
    let mut coordinator = RevealCoordinator::new();
    coordinator
        .register(
            &mut surface,
            Group::single(node),
            RevealSpec::fade(),
            Threshold::ratio(0.2),
        )
        .unwrap();

    surface.remove(node);
    viewport.scroll_to(500.0);
    let writes = surface.style_writes();
    for _ in 0..10 {
        coordinator.tick(&mut surface, &viewport, 16.0);
    }
    assert_eq!(surface.style_writes(), writes);
}

/// Two sections with independent thresholds reveal independently as the
/// page scrolls past each of them.
#[test]
fn sections_reveal_in_scroll_order() {
    let mut surface = MemorySurface::new();
    let about = surface.insert(Rect::new(0.0, 700.0, 800.0, 400.0));
    let projects = surface.insert(Rect::new(0.0, 1500.0, 800.0, 400.0));
    let mut viewport = Viewport::new(800.0, 600.0);

    let mut coordinator = RevealCoordinator::new();
    let about_handle = coordinator
        .register(
            &mut surface,
            Group::single(about),
            RevealSpec::fade_up(20.0).with_duration(600.0),
            Threshold::default(),
        )
        .unwrap();
    let projects_handle = coordinator
        .register(
            &mut surface,
            Group::single(projects),
            RevealSpec::fade_up(20.0).with_duration(600.0),
            Threshold::default(),
        )
        .unwrap();

    // Scroll to the first section only.
    viewport.scroll_to(400.0);
    coordinator.tick(&mut surface, &viewport, 0.0);
    coordinator.tick(&mut surface, &viewport, 600.0);
    assert_eq!(coordinator.phase(about_handle, 0), Some(Phase::Visible));
    assert_eq!(coordinator.phase(projects_handle, 0), Some(Phase::Hidden));

    // Keep scrolling; the second section follows.
    viewport.scroll_to(1200.0);
    coordinator.tick(&mut surface, &viewport, 0.0);
    coordinator.tick(&mut surface, &viewport, 600.0);
    assert_eq!(coordinator.phase(projects_handle, 0), Some(Phase::Visible));
    assert_eq!(opacity(&surface, projects), 1.0);
    assert_eq!(
        surface
            .style(projects)
            .unwrap()
            .get(StyleProperty::TranslateY),
        Some(0.0)
    );
}
