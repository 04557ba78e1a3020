use tickup::host::{ManualScheduler, ManualVisibility, MemoryText};
use tickup::{Config, ConfigPatch, FrameOutcome, Orchestrator, TargetId};

type Orch = Orchestrator<ManualVisibility, ManualScheduler, MemoryText>;

fn orch(texts: &[(u64, &str)], config: Config) -> Orch {
    let surface = MemoryText::with_texts(texts.iter().map(|&(id, text)| (TargetId(id), text)));
    Orchestrator::new(
        texts.iter().map(|&(id, _)| TargetId(id)).collect(),
        config,
        ManualVisibility::default(),
        ManualScheduler::default(),
        surface,
    )
    .unwrap()
}

/// Pumps due frames on a fixed step until the scheduler drains. Returns the
/// timestamp after the last delivered cycle.
fn run_to_idle(orch: &mut Orch, mut now_ms: f64, step_ms: f64) -> f64 {
    while !orch.scheduler().is_idle() {
        for (id, token) in orch.scheduler_mut().take_due() {
            orch.handle_frame(id, token, now_ms);
        }
        now_ms += step_ms;
    }
    now_ms
}

fn text_of(orch: &Orch, id: u64) -> String {
    orch.surface().read_text(TargetId(id)).unwrap()
}

#[test]
fn grouped_integer_settles_on_its_source_text() {
    let mut orch = orch(&[(1, "1,500")], Config::default());
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");
}

#[test]
fn plain_decimal_settles_with_detected_places() {
    let mut orch = orch(&[(1, "2500.50")], Config::default());
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "2500.50");
}

#[test]
fn prefixed_and_suffixed_text_is_reproduced() {
    let config = Config {
        prefix: "$".to_string(),
        suffix: "+".to_string(),
        ..Config::default()
    };
    let mut orch = orch(&[(1, "$5,000+")], config);
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "$5,000+");
}

#[test]
fn unknown_easing_still_completes_exact() {
    let config = Config {
        easing: "bogus".to_string(),
        duration_ms: 200,
        ..Config::default()
    };
    let mut orch = orch(&[(1, "1,500")], config);
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");
}

#[test]
fn blank_target_is_skipped_while_others_animate() {
    let mut orch = orch(&[(1, ""), (2, "750")], Config::default());
    assert_eq!(orch.registered().count(), 1);
    assert_eq!(orch.visibility().observed_count(), 1);

    orch.handle_visibility(TargetId(1), true);
    orch.handle_visibility(TargetId(2), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 2), "750");
    assert_eq!(text_of(&orch, 1), "");
}

#[test]
fn exit_rewinds_to_baseline_and_reentry_counts_up_again() {
    let mut orch = orch(&[(1, "1,500")], Config::default());

    orch.handle_visibility(TargetId(1), true);
    let (id, token) = orch.scheduler_mut().take_due()[0];
    orch.handle_frame(id, token, 0.0);
    orch.handle_visibility(TargetId(1), false);

    assert_eq!(text_of(&orch, 1), "0");
    assert!(!orch.is_animating(TargetId(1)));
    assert!(orch.scheduler().is_idle());

    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 100.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");
}

#[test]
fn once_mode_drops_the_subscription_and_keeps_the_final_value() {
    let config = Config {
        once: true,
        ..Config::default()
    };
    let mut orch = orch(&[(1, "1,500")], config);

    orch.handle_visibility(TargetId(1), true);
    assert!(!orch.visibility().is_observed(TargetId(1)));

    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");

    // A transition already in flight when the subscription was dropped must
    // not rewind the settled text.
    orch.handle_visibility(TargetId(1), false);
    assert_eq!(text_of(&orch, 1), "1,500");
}

#[test]
fn stale_frame_after_cancel_does_not_render() {
    let mut orch = orch(&[(1, "1,500")], Config::default());

    orch.handle_visibility(TargetId(1), true);
    let (id, token) = orch.scheduler().pending()[0];
    orch.handle_visibility(TargetId(1), false);

    // The request was revoked, but the delivery was already in flight.
    assert_eq!(orch.handle_frame(id, token, 50.0), FrameOutcome::Stale);
    assert_eq!(text_of(&orch, 1), "0");
}

#[test]
fn rapid_toggle_leaves_exactly_one_live_request() {
    let mut orch = orch(&[(1, "1,500")], Config::default());

    orch.handle_visibility(TargetId(1), true);
    let (_, first) = orch.scheduler().pending()[0];
    orch.handle_visibility(TargetId(1), false);
    orch.handle_visibility(TargetId(1), true);

    let pending = orch.scheduler().pending();
    assert_eq!(pending.len(), 1);
    assert_ne!(pending[0].1, first);

    // The stale token is rejected, the live one advances the animation.
    assert_eq!(orch.handle_frame(TargetId(1), first, 0.0), FrameOutcome::Stale);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");
}

#[test]
fn replay_runs_from_baseline_regardless_of_visibility() {
    let mut orch = orch(&[(1, "1,500"), (2, "2500.50")], Config::default());

    // Neither target ever entered the viewport.
    orch.replay();
    assert_eq!(text_of(&orch, 1), "0");
    assert_eq!(text_of(&orch, 2), "0");
    assert!(orch.visibility().is_observed(TargetId(1)));

    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");
    assert_eq!(text_of(&orch, 2), "2500.50");
}

#[test]
fn restart_restores_original_text_and_resubscribes() {
    let mut orch = orch(&[(1, "1,500")], Config::default());

    orch.handle_visibility(TargetId(1), true);
    let (id, token) = orch.scheduler_mut().take_due()[0];
    orch.handle_frame(id, token, 0.0);
    assert_eq!(text_of(&orch, 1), "0");

    orch.restart();
    assert_eq!(text_of(&orch, 1), "1,500");
    assert!(!orch.is_animating(TargetId(1)));
    assert!(orch.scheduler().is_idle());
    assert_eq!(orch.visibility().observed_count(), 1);

    // Visibility state was cleared, so the next entry animates again.
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500");
}

#[test]
fn update_options_rederives_targets_under_the_new_config() {
    let mut orch = orch(&[(1, "1,500")], Config::default());
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);

    orch.update_options(ConfigPatch {
        suffix: Some("+".to_string()),
        duration_ms: Some(100),
        ..ConfigPatch::default()
    })
    .unwrap();

    // Restart restored the original text; the new suffix applies on the
    // next animation.
    assert_eq!(text_of(&orch, 1), "1,500");
    orch.handle_visibility(TargetId(1), true);
    run_to_idle(&mut orch, 0.0, 16.0);
    assert_eq!(text_of(&orch, 1), "1,500+");
}

#[test]
fn update_options_rejects_invalid_merge_and_keeps_running_config() {
    let mut orch = orch(&[(1, "1,500")], Config::default());
    let err = orch.update_options(ConfigPatch {
        duration_ms: Some(0),
        ..ConfigPatch::default()
    });
    assert!(err.is_err());
    assert_eq!(orch.config().duration_ms, 2_000);
}

#[test]
fn frames_within_one_cycle_are_order_insensitive() {
    let mut orch = orch(&[(1, "100"), (2, "200")], Config::default());
    orch.handle_visibility(TargetId(1), true);
    orch.handle_visibility(TargetId(2), true);

    // Deliver the cycle in reverse registration order.
    let mut due = orch.scheduler_mut().take_due();
    due.reverse();
    for (id, token) in due {
        orch.handle_frame(id, token, 0.0);
    }
    run_to_idle(&mut orch, 16.0, 16.0);
    assert_eq!(text_of(&orch, 1), "100");
    assert_eq!(text_of(&orch, 2), "200");
}
