// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_toast::config::ToastSettings;
use iced_toast::error::ToastError;
use iced_toast::toast::{
    ActiveSet, Manager, Notification, TimerPhase, ToastId, ToastRequest,
};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn manager(stacked: bool, turn: bool, duration_ms: u64) -> Manager {
    Manager::new(ToastSettings {
        duration: ms(duration_ms),
        stacked,
        turn,
        ..ToastSettings::default()
    })
}

/// Delivers frames every `step` from `from` (exclusive) up to `to` (inclusive).
fn run_frames(manager: &mut Manager, from: Instant, to: Instant, step: Duration) {
    let mut at = from;
    while at < to {
        at = (at + step).min(to);
        manager.on_frame(at);
    }
}

fn counting(manager: &Manager) -> Vec<ToastId> {
    manager
        .values()
        .map(Notification::id)
        .filter(|id| {
            matches!(
                manager.phase(*id),
                Some(TimerPhase::Running | TimerPhase::Paused)
            )
        })
        .collect()
}

#[test]
fn single_active_invariant_holds_through_churn() {
    for stacked in [true, false] {
        let t0 = Instant::now();
        let mut m = manager(stacked, true, 1000);
        let mut now = t0;
        let mut ids = Vec::new();

        for i in 0..5 {
            ids.push(m.push(ToastRequest::new(format!("t{i}")), now));
            now += ms(50);
            m.on_frame(now);
            assert_eq!(counting(&m).len(), 1, "stacked={stacked} after push {i}");
        }

        m.pointer_entered(ids[2], now);
        m.close(ids[0], now);
        assert_eq!(counting(&m).len(), 1);
        m.close(ids[4], now);
        assert_eq!(counting(&m).len(), 1);

        // Drain the rest through expiry.
        while !m.is_empty() {
            m.pointer_exited(ids[2], now);
            now += ms(16);
            m.on_frame(now);
            if m.len() >= 2 {
                assert_eq!(counting(&m).len(), 1);
            }
        }
    }
}

#[test]
fn accumulation_sums_active_intervals() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 10_000);
    let a = m.push(ToastRequest::new("a"), t0);

    // Active [0, 300], hovered until 800, active [800, 1000]
    m.pointer_entered(a, t0 + ms(300));
    m.pointer_exited(a, t0 + ms(800));
    // Loses eligibility to b at 1000, regains it at 1500
    let b = m.push(ToastRequest::new("b"), t0 + ms(1000));
    assert_eq!(m.phase(a), Some(TimerPhase::Stopped));
    m.close(b, t0 + ms(1500));
    // Several quick hover cycles while active [1500, 1700]
    for k in 0..10u64 {
        let at = t0 + ms(1500 + k * 20);
        m.pointer_entered(a, at);
        m.pointer_exited(a, at);
    }

    let timer = m.timer(a).unwrap();
    assert_eq!(timer.elapsed(t0 + ms(1700)), ms(300 + 200 + 200));
}

#[test]
fn expires_exactly_when_duration_reached() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 5000);
    let a = m.push(ToastRequest::new("a"), t0);

    run_frames(&mut m, t0, t0 + ms(4999), ms(16));
    assert!(m.contains(a));
    let remaining = m.remaining_fraction(a).unwrap();
    assert!(remaining > 0.0);
    assert_abs_diff_eq!(remaining, 0.0002, epsilon = 1e-4);

    m.on_frame(t0 + ms(5000));
    assert!(!m.contains(a));
    assert!(m.remaining_fraction(a).is_none());
}

#[test]
fn remaining_fraction_is_frame_rate_independent() {
    let t0 = Instant::now();
    let mut coarse = manager(false, true, 2000);
    let mut fine = manager(false, true, 2000);
    let a = coarse.push(ToastRequest::new("a"), t0);
    let b = fine.push(ToastRequest::new("b"), t0);

    run_frames(&mut coarse, t0, t0 + ms(1000), ms(250));
    run_frames(&mut fine, t0, t0 + ms(1000), ms(7));

    let coarse_left = coarse.remaining_fraction(a).unwrap();
    let fine_left = fine.remaining_fraction(b).unwrap();
    assert_abs_diff_eq!(coarse_left, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(coarse_left, fine_left, epsilon = 1e-6);
}

#[test]
fn hover_freezes_and_never_extends_past_duration() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 1000);
    let a = m.push(ToastRequest::new("a"), t0);

    run_frames(&mut m, t0, t0 + ms(600), ms(16));
    m.pointer_entered(a, t0 + ms(600));
    // Frames keep arriving for other reasons; none may advance a.
    for k in 1..=100 {
        m.on_frame(t0 + ms(600 + k * 100));
    }
    assert_eq!(m.timer(a).unwrap().elapsed(t0 + ms(10_600)), ms(600));
    assert!(m.contains(a));

    m.pointer_exited(a, t0 + ms(10_600));
    run_frames(&mut m, t0 + ms(10_600), t0 + ms(10_999), ms(16));
    assert!(m.contains(a));
    m.on_frame(t0 + ms(11_000));
    assert!(!m.contains(a));
}

#[test]
fn close_is_idempotent_and_races_with_expiry() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 500);
    let a = m.push(ToastRequest::new("a"), t0);

    m.on_frame(t0 + ms(500));
    assert!(!m.contains(a));
    assert!(!m.close(a, t0 + ms(501)));
    assert!(!m.close(a, t0 + ms(502)));

    let b = m.push(ToastRequest::new("b"), t0 + ms(600));
    assert!(m.close(b, t0 + ms(700)));
    assert!(!m.close(b, t0 + ms(700)));
    m.on_frame(t0 + ms(2000));
    assert!(m.is_empty());
}

#[test]
fn stack_mode_counts_down_oldest_first() {
    let t0 = Instant::now();
    let mut m = manager(true, true, 1000);
    let a = m.push(ToastRequest::new("A"), t0);
    let b = m.push(ToastRequest::new("B"), t0);
    let c = m.push(ToastRequest::new("C"), t0);

    // Newest displays first.
    let order: Vec<ToastId> = m.values().map(Notification::id).collect();
    assert_eq!(order, vec![c, b, a]);
    assert_eq!(m.active(), ActiveSet::One(a));

    m.close(a, t0 + ms(100));
    assert_eq!(m.active(), ActiveSet::One(b));

    run_frames(&mut m, t0 + ms(100), t0 + ms(1100), ms(20));
    assert!(!m.contains(b));
    assert_eq!(m.active(), ActiveSet::One(c));
    assert_eq!(m.timer(c).unwrap().accumulated(), Duration::ZERO);
}

#[test]
fn queue_mode_counts_down_newest_only() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 1000);
    let a = m.push(ToastRequest::new("A"), t0);
    let b = m.push(ToastRequest::new("B"), t0 + ms(100));
    let c = m.push(ToastRequest::new("C"), t0 + ms(200));

    let order: Vec<ToastId> = m.values().map(Notification::id).collect();
    assert_eq!(order, vec![a, b, c]);
    assert_eq!(m.active(), ActiveSet::One(c));

    m.close(c, t0 + ms(300));
    assert_eq!(m.active(), ActiveSet::One(b));
    assert_eq!(m.phase(a), Some(TimerPhase::Stopped));
    // b keeps the 100ms it accumulated before c arrived.
    assert_eq!(m.timer(b).unwrap().elapsed(t0 + ms(300)), ms(100));
}

#[test]
fn queue_mode_without_turn_races_all() {
    let t0 = Instant::now();
    let mut m = manager(false, false, 1000);
    let a = m.push(ToastRequest::new("A"), t0);
    let b = m.push(ToastRequest::new("B"), t0 + ms(300));

    assert_eq!(m.active(), ActiveSet::All);
    assert_eq!(counting(&m).len(), 2);

    run_frames(&mut m, t0, t0 + ms(1000), ms(10));
    assert!(!m.contains(a));
    assert!(m.contains(b));
    run_frames(&mut m, t0 + ms(1000), t0 + ms(1300), ms(10));
    assert!(m.is_empty());
}

#[test]
fn hover_scenario_resumes_where_it_left_off() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 1000);
    let a = m.push(ToastRequest::new("A"), t0);

    run_frames(&mut m, t0, t0 + ms(400), ms(16));
    m.pointer_entered(a, t0 + ms(400));
    run_frames(&mut m, t0 + ms(400), t0 + ms(2400), ms(16));

    assert!(m.contains(a));
    assert_eq!(m.phase(a), Some(TimerPhase::Paused));
    assert_eq!(m.timer(a).unwrap().accumulated(), ms(400));
    assert_abs_diff_eq!(m.remaining_fraction(a).unwrap(), 0.6, epsilon = 1e-6);

    m.pointer_exited(a, t0 + ms(2400));
    run_frames(&mut m, t0 + ms(2400), t0 + ms(2999), ms(16));
    assert!(m.contains(a));
    m.on_frame(t0 + ms(3000));
    assert!(!m.contains(a));
}

#[test]
fn backwards_clock_does_not_corrupt_progress() {
    let t0 = Instant::now() + Duration::from_secs(3600);
    let mut m = manager(false, true, 1000);
    let a = m.push(ToastRequest::new("A"), t0);

    m.on_frame(t0 - ms(5000));
    assert_eq!(m.remaining_fraction(a), Some(1.0));
    m.on_frame(t0 + ms(500));
    assert_abs_diff_eq!(m.remaining_fraction(a).unwrap(), 0.5, epsilon = 1e-6);
}

#[test]
fn duplicate_insert_is_rejected_and_unknown_ids_are_noops() {
    let t0 = Instant::now();
    let mut m = manager(true, true, 1000);
    let id = ToastId::from_raw(4_000_000_001);
    m.insert(Notification::with_id(id, "mine", ms(2000)), t0)
        .unwrap();

    let err = m
        .insert(Notification::with_id(id, "again", ms(2000)), t0)
        .unwrap_err();
    assert_eq!(err, ToastError::DuplicateId(id));
    assert_eq!(m.get(id).unwrap().title(), "mine");

    let ghost = ToastId::from_raw(4_000_000_002);
    assert!(!m.close(ghost, t0));
    assert!(!m.update(Notification::with_id(ghost, "ghost", ms(1))));
    m.pointer_entered(ghost, t0);
    m.pointer_exited(ghost, t0);
    assert_eq!(m.len(), 1);
}

#[test]
fn inserted_record_keeps_its_own_duration() {
    let t0 = Instant::now();
    let mut m = manager(false, true, 6000);
    let id = m
        .insert(
            Notification::with_id(ToastId::from_raw(4_000_000_010), "quick", ms(200)),
            t0,
        )
        .unwrap();

    m.on_frame(t0 + ms(200));
    assert!(!m.contains(id));
}

#[test]
fn idle_manager_stops_requesting_frames() {
    let t0 = Instant::now();
    let mut m = manager(true, true, 100);
    let a = m.push(ToastRequest::new("A"), t0);
    assert!(m.needs_frames());

    m.pointer_entered(a, t0 + ms(10));
    assert!(!m.needs_frames());

    m.pointer_exited(a, t0 + ms(20));
    assert!(m.needs_frames());

    m.on_frame(t0 + ms(200));
    assert!(!m.needs_frames());
    assert!(m.is_empty());
}
