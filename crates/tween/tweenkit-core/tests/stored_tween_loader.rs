use std::cell::RefCell;
use std::rc::Rc;

use tweenkit_core::{
    parse_stored_tween_json, Config, CurveKind, EaseMode, ManualClock, RepeatMode, Scheduler,
    StoredTween, TweenError,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should parse a full document with selector enums
#[test]
fn parse_full_document() {
    let json = r#"{
        "name": "fade",
        "from": 0.0,
        "to": 1.0,
        "duration": 250,
        "curve": "Sine",
        "ease": "InOut",
        "repeat": "Reverse"
    }"#;
    let stored = parse_stored_tween_json(json).expect("valid document");
    assert_eq!(stored.name, "fade");
    assert_eq!(stored.duration_ms, 250);
    assert_eq!(stored.curve, CurveKind::Sine);
    assert_eq!(stored.ease, EaseMode::InOut);
    assert_eq!(stored.repeat, RepeatMode::Reverse);

    let blend = stored.blend();
    approx(blend(0.0, 1.0, 0.0), 0.0, 1e-5);
    approx(blend(0.0, 1.0, 1.0), 1.0, 1e-5);
}

/// it should default ease to Linear and repeat to Once when omitted
#[test]
fn parse_applies_selector_defaults() {
    let json = r#"{"name":"slide","from":10.0,"to":20.0,"duration":100,"curve":"Sq3"}"#;
    let stored = parse_stored_tween_json(json).expect("valid document");
    assert_eq!(stored.ease, EaseMode::Linear);
    assert_eq!(stored.repeat, RepeatMode::Once);
    assert_eq!(stored.snap_threshold, None);

    // Linear default ignores the curve selection
    let blend = stored.blend();
    approx(blend(10.0, 20.0, 0.5), 15.0, 1e-6);
}

/// it should honor an explicit snap threshold
#[test]
fn parse_snap_with_threshold() {
    let json = r#"{
        "name": "flip",
        "from": 1.0,
        "to": 2.0,
        "duration": 100,
        "curve": "Sq1",
        "ease": "Snap",
        "snap_threshold": 0.5
    }"#;
    let stored = parse_stored_tween_json(json).expect("valid document");
    let blend = stored.blend();
    assert_eq!(blend(1.0, 2.0, 0.49), 1.0);
    assert_eq!(blend(1.0, 2.0, 0.5), 2.0);
}

/// it should reject a zero duration
#[test]
fn reject_zero_duration() {
    let json = r#"{"name":"bad","from":0.0,"to":1.0,"duration":0,"curve":"Sq1"}"#;
    assert_eq!(
        parse_stored_tween_json(json),
        Err(TweenError::InvalidDuration)
    );
}

/// it should reject non-finite endpoints on programmatic construction
#[test]
fn reject_non_finite_endpoints() {
    let stored = StoredTween {
        name: "bad".into(),
        from: f32::NAN,
        to: 1.0,
        duration_ms: 100,
        curve: CurveKind::Sq1,
        ease: EaseMode::Linear,
        repeat: RepeatMode::Once,
        snap_threshold: None,
    };
    assert!(matches!(
        stored.validate(),
        Err(TweenError::NonFiniteEndpoint { field: "from", .. })
    ));
}

/// it should reject a snap threshold outside [0,1]
#[test]
fn reject_out_of_range_snap_threshold() {
    let json = r#"{
        "name": "bad",
        "from": 0.0,
        "to": 1.0,
        "duration": 100,
        "curve": "Sq1",
        "ease": "Snap",
        "snap_threshold": 1.5
    }"#;
    assert!(matches!(
        parse_stored_tween_json(json),
        Err(TweenError::InvalidSnapThreshold { .. })
    ));
}

/// it should surface malformed JSON and unknown selectors as parse errors
#[test]
fn reject_malformed_documents() {
    assert!(matches!(
        parse_stored_tween_json("{not json"),
        Err(TweenError::Parse { .. })
    ));
    let unknown_curve = r#"{"name":"x","from":0.0,"to":1.0,"duration":100,"curve":"Wiggle"}"#;
    assert!(matches!(
        parse_stored_tween_json(unknown_curve),
        Err(TweenError::Parse { .. })
    ));
}

/// it should round-trip a document through serde
#[test]
fn stored_tween_serde_roundtrip() {
    let stored = StoredTween {
        name: "spin".into(),
        from: -1.0,
        to: 1.0,
        duration_ms: 640,
        curve: CurveKind::Elastic,
        ease: EaseMode::Out,
        repeat: RepeatMode::Restart,
        snap_threshold: None,
    };
    let json = serde_json::to_string(&stored).unwrap();
    let back: StoredTween = serde_json::from_str(&json).unwrap();
    assert_eq!(stored, back);
}

/// it should schedule a stored tween end to end
#[test]
fn start_stored_runs_on_scheduler() {
    let clock = ManualClock::new();
    let sched = Scheduler::with_clock(Config::default(), Rc::new(clock.clone()));

    let json = r#"{"name":"fade","from":0.0,"to":100.0,"duration":1000,"curve":"Sq1"}"#;
    let stored = parse_stored_tween_json(json).expect("valid document");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    sched.start_stored(&stored, move |v| sink.borrow_mut().push(v));

    sched.tick();
    clock.set_ms(500);
    sched.tick();
    clock.set_ms(1000);
    sched.tick();

    assert_eq!(*seen.borrow(), vec![0.0, 50.0, 100.0]);
    assert!(!sched.contains("fade"));
}
