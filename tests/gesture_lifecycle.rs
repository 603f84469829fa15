// tests/gesture_lifecycle.rs
use gesticulate::{AnimationConfig, AnimationController, Command, GestureKind, MouthExpression};

fn controller() -> AnimationController {
    AnimationController::new(AnimationConfig::default())
}

/// Ticks until the controller goes idle, returning how many updates it took.
/// Panics if the gesture is not bounded.
fn ticks_until_idle(c: &mut AnimationController) -> u32 {
    for tick in 1..=200 {
        c.update();
        if c.is_idle() {
            return tick;
        }
    }
    panic!("gesture did not complete within 200 ticks");
}

#[test]
fn every_gesture_completes_within_its_budget() {
    // Budgets count animated frames; wave and jump spend one extra tick on
    // their neutral cleanup frame, the rest reset inside their final tick.
    let cases = [
        (Command::Gesture(GestureKind::Wave), 51),
        (Command::Gesture(GestureKind::Jump), 21),
        (Command::Gesture(GestureKind::Blink), 3),
        (Command::Gesture(GestureKind::Dance), 20),
        (Command::Gesture(GestureKind::Spin), 36),
        (Command::Gesture(GestureKind::Smile), 60),
        (Command::Gesture(GestureKind::Frown), 60),
        (Command::Gesture(GestureKind::Sneeze), 31),
        (Command::Speak("hi".into()), 120),
    ];

    for (command, expected_ticks) in cases {
        let mut c = controller();
        c.start(command.clone());
        assert!(!c.is_idle(), "admission failed for {command:?}");

        let ticks = ticks_until_idle(&mut c);
        assert_eq!(ticks, expected_ticks, "tick count for {command:?}");

        // On completion every owned field is back at its neutral value.
        assert!(c.placement().is_identity(), "placement after {command:?}");
        let x = c.expressive();
        assert!(x.face_visible, "face after {command:?}");
        assert_eq!(x.mouth, MouthExpression::Neutral, "mouth after {command:?}");
        assert_eq!(x.overlay_text, None, "overlay after {command:?}");
        assert_eq!(
            x.right_arm_extra_angle, 0.0,
            "arm angle after {command:?}"
        );
    }
}

#[test]
fn jump_is_symmetric_about_its_peak() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Jump));

    // Frame k is applied by the (k+1)-th update.
    for _ in 0..10 {
        c.update();
    }
    assert_eq!(c.placement().translation.y, -50.0, "last ascent frame");

    c.update();
    assert_eq!(c.placement().translation.y, -50.0, "first descent frame");

    for _ in 0..9 {
        c.update();
    }
    assert_eq!(c.placement().translation.y, -5.0, "last descent frame");

    c.update();
    assert_eq!(c.placement().translation.y, 0.0, "cleanup frame");
    assert!(c.is_idle());
}

#[test]
fn dance_follows_the_sine_sway() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Dance));

    for _ in 0..6 {
        c.update();
    }
    let expected = 10.0 * (2.0 * std::f64::consts::PI * 5.0 / 20.0).sin();
    assert!(
        (c.placement().translation.x - expected).abs() < 1e-9,
        "offset at frame 5: {} vs {}",
        c.placement().translation.x,
        expected
    );
}

#[test]
fn wave_oscillates_the_right_arm_only() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Wave));

    for tick in 1..=50u32 {
        c.update();
        let expected = 0.3 * ((tick - 1) as f64 * 0.3).sin();
        assert!(
            (c.expressive().right_arm_extra_angle - expected).abs() < 1e-9,
            "arm angle at tick {tick}"
        );
        // Wave owns only the arm angle; placement stays untouched.
        assert!(c.placement().is_identity(), "placement at tick {tick}");
    }
}

#[test]
fn spin_sweeps_one_revolution() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Spin));

    for _ in 0..10 {
        c.update();
    }
    // Frame 9 of 36 is a quarter turn.
    assert!(
        (c.placement().rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9,
        "rotation at frame 9"
    );

    for _ in 0..26 {
        c.update();
    }
    assert!(c.is_idle());
    assert_eq!(c.placement().rotation, 0.0);
}

#[test]
fn blink_hides_the_face_for_one_tick() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Blink));

    c.update();
    assert!(c.expressive().face_visible, "tick 0 leaves the face shown");
    c.update();
    assert!(!c.expressive().face_visible, "tick 1 hides the face");
    c.update();
    assert!(c.expressive().face_visible, "tick 2 restores the face");
    assert!(c.is_idle());
}

#[test]
fn sneeze_flashes_overlay_and_hides_face() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Sneeze));

    c.update();
    assert!(!c.expressive().face_visible);
    assert_eq!(c.expressive().overlay_text.as_deref(), Some("Achoo!"));

    // Held for the whole countdown.
    for _ in 0..29 {
        c.update();
    }
    assert!(!c.is_idle(), "still sneezing one tick before the end");
    assert!(!c.expressive().face_visible);

    c.update();
    assert!(c.is_idle());
    assert!(c.expressive().face_visible);
    assert_eq!(c.expressive().overlay_text, None);
}

#[test]
fn smile_takes_effect_at_admission() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Smile));

    // The mouth is fixed before the first tick, matching the payload rule.
    assert_eq!(c.expressive().mouth, MouthExpression::Smile);

    for _ in 0..59 {
        c.update();
    }
    assert_eq!(c.expressive().mouth, MouthExpression::Smile);
    c.update();
    assert_eq!(c.expressive().mouth, MouthExpression::Neutral);
    assert!(c.is_idle());
}

#[test]
fn speak_holds_the_payload_verbatim() {
    let mut c = controller();
    c.start(Command::Speak("Hello There".into()));

    assert_eq!(
        c.expressive().overlay_text.as_deref(),
        Some("Hello There"),
        "payload installed at admission, case preserved"
    );

    for _ in 0..119 {
        c.update();
    }
    assert_eq!(c.expressive().overlay_text.as_deref(), Some("Hello There"));
    c.update();
    assert_eq!(c.expressive().overlay_text, None);
    assert!(c.is_idle());
}

#[test]
fn idle_updates_have_no_effect() {
    let mut c = controller();
    let before = c.frame();
    for _ in 0..100 {
        c.update();
    }
    assert_eq!(c.frame(), before, "idle ticks must not disturb the figure");
}

#[test]
fn start_while_busy_is_silently_dropped() {
    let mut c = controller();
    c.start(Command::Gesture(GestureKind::Wave));
    c.update();
    c.update();
    c.update();
    let frame_before = c.active_run().unwrap().frame;

    // A different gesture, and a restart of the same one: both dropped.
    c.start(Command::Gesture(GestureKind::Jump));
    c.start(Command::Gesture(GestureKind::Wave));

    assert_eq!(c.active_gesture(), Some(GestureKind::Wave));
    assert_eq!(
        c.active_run().unwrap().frame,
        frame_before,
        "dropped request must not disturb the running gesture"
    );

    // The dropped jump never wrote the translation it would have owned.
    ticks_until_idle(&mut c);
    assert!(c.placement().is_identity());
}

#[test]
fn identical_scripts_produce_identical_state() {
    let script: &[&str] = &["wave", "jump", "dance", "Hello There", "spin"];

    let mut a = controller();
    let mut b = controller();
    for line in script {
        a.handle_input(line);
        b.handle_input(line);
        for _ in 0..7 {
            a.update();
            b.update();
            assert_eq!(a.placement(), b.placement());
            assert_eq!(a.expressive(), b.expressive());
        }
    }
    assert_eq!(a.frame(), b.frame(), "snapshots must be bit-identical");
}
