//! Status screen scenarios against a recording surface.

use keypanel_core::compose::layout;
use keypanel_core::compose::{ImageSet, RegionId, StatusComposer};
use keypanel_core::config::{PanelConfig, WpmConfig};
use keypanel_core::keyboard::{KeyboardSnapshot, Layer, LayerState, LockState, SeparatorGlyph};
use keypanel_core::mocks::{DrawOp, FakeLeds, FakeLoader, RecordingSurface};
use keypanel_core::scheduler::DeferredQueue;
use keypanel_core::state::Event;
use keypanel_core::traits::AssetId;
use keypanel_core::DisplayController;

/// Run every deferred task due at `now`
fn run(
    ctrl: &mut DisplayController<RecordingSurface>,
    timer: &mut DeferredQueue<4>,
    status: &KeyboardSnapshot,
    now: u32,
) {
    while let Some((token, task)) = timer.poll(now) {
        let next = ctrl.run_deferred(task, status, now);
        timer.complete(token, next, now);
    }
}

fn first_pixel(op: &DrawOp) -> (u16, u16) {
    match *op {
        DrawOp::Image { x, y, .. } => (x, y),
        DrawOp::Rect { left, top, .. } => (left, top),
        DrawOp::Power(_) | DrawOp::Flush => panic!("not a draw"),
    }
}

#[test]
fn redraw_all_draws_each_region_once_in_order() {
    let mut composer = StatusComposer::new(
        ImageSet::load_all(&mut FakeLoader::new()),
        &WpmConfig::default(),
    );
    let mut surface = RecordingSurface::new();

    composer.redraw_all(&mut surface, &KeyboardSnapshot::default());

    let groups = surface.flush_groups();
    assert_eq!(groups.len(), RegionId::ALL.len());
    assert_eq!(surface.flushes(), RegionId::ALL.len());

    for (group, region) in groups.iter().zip(RegionId::ALL) {
        assert!(!group.is_empty(), "{:?} drew nothing", region);
        let bounds = layout::region(region);
        for op in group {
            let (x, y) = first_pixel(op);
            assert!(bounds.contains(x, y), "{:?} drew outside at {},{}", region, x, y);
        }
    }
}

#[test]
fn missing_checkbox_leaves_slot_blank() {
    let mut composer = StatusComposer::new(
        ImageSet::load_all(&mut FakeLoader::failing(&[AssetId::CheckboxYes])),
        &WpmConfig::default(),
    );
    let mut surface = RecordingSurface::new();

    let layers = LayerState::only(Layer::Symbols).with(Layer::Control);
    composer.on_layer_change(&mut surface, layers);

    // Both indicated layers active, both boxes need the failed asset
    assert_eq!(surface.draws(), 0);
    assert_eq!(surface.flushes(), 1);
}

#[test]
fn separator_glyphs_distinct_for_all_pairs() {
    let mut composer = StatusComposer::new(
        ImageSet::load_all(&mut FakeLoader::new()),
        &WpmConfig::default(),
    );

    let mut seen = Vec::new();
    for (caps, num) in [(false, false), (true, false), (false, true), (true, true)] {
        let locks = LockState::new(caps, num, false);
        let mut surface = RecordingSurface::new();
        composer.on_lock_state_change(&mut surface, locks);

        let left = surface
            .images()
            .into_iter()
            .find(|(x, _, _)| *x == layout::LEFT_SEPARATOR_X)
            .map(|(_, _, image)| image)
            .expect("left separator drawn");
        seen.push((locks.left_separator(), left));
    }

    let glyphs: Vec<SeparatorGlyph> = seen.iter().map(|(g, _)| *g).collect();
    assert_eq!(
        glyphs,
        [
            SeparatorGlyph::OffOff,
            SeparatorGlyph::OnOff,
            SeparatorGlyph::OffOn,
            SeparatorGlyph::OnOn
        ]
    );
    for (i, (_, a)) in seen.iter().enumerate() {
        for (_, b) in seen.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn right_separator_follows_num_and_scroll() {
    let mut composer = StatusComposer::new(
        ImageSet::load_all(&mut FakeLoader::new()),
        &WpmConfig::default(),
    );
    let mut surface = RecordingSurface::new();

    composer.on_lock_state_change(&mut surface, LockState::from_hid_report(0b101));

    let right = surface
        .images()
        .into_iter()
        .find(|(x, _, _)| *x == layout::RIGHT_SEPARATOR_X)
        .map(|(_, _, image)| image);
    assert_eq!(right, Some(AssetId::SeparatorOnOn));
}

#[test]
fn full_session() {
    let config = PanelConfig::default();
    let mut ctrl = DisplayController::new(RecordingSurface::new(), config, 0);
    let mut timer: DeferredQueue<4> = DeferredQueue::new();
    let mut status = KeyboardSnapshot::default();
    let mut leds = FakeLeds::default();

    ctrl.on_init(&mut FakeLoader::new(), &mut timer, &status, 0);
    timer.next_deadline(0);

    // Typing keeps the panel awake
    for t in (100..5000).step_by(100) {
        let event = Event::Key { pressed: t % 200 == 0 };
        status.apply(&event);
        ctrl.handle_event(event, &status, &mut timer, &mut leds, t);
        run(&mut ctrl, &mut timer, &status, t);
    }
    assert!(ctrl.is_powered());

    // Walk away
    for t in (5000..10_000).step_by(250) {
        run(&mut ctrl, &mut timer, &status, t);
    }
    assert!(!ctrl.is_powered());

    // Layer key wakes and redraws the checkboxes
    ctrl.surface_mut().clear();
    let event = Event::LayerChange(LayerState::only(Layer::Symbols));
    status.apply(&event);
    ctrl.handle_event(event, &status, &mut timer, &mut leds, 10_000);
    assert!(ctrl.is_powered());
    assert_eq!(ctrl.surface().power_commands(), [true]);
    assert_eq!(
        ctrl.surface().images(),
        [(0, 18, AssetId::CheckboxYes), (24, 18, AssetId::CheckboxNo)]
    );

    ctrl.handle_event(Event::Shutdown, &status, &mut timer, &mut leds, 10_100);
    assert!(!ctrl.surface().is_powered());
    assert_eq!(leds.blanked, 1);
}
