//! Integration tests for the animation module.

use proptest::prelude::*;
use sliprow_core::animation::*;
use std::time::Duration;

const MS_100: Duration = Duration::from_millis(100);
const SEC_1: Duration = Duration::from_secs(1);

#[test]
fn fade_duration_tracking() {
    let mut fade = Fade::new(SEC_1);
    for _ in 0..1000 {
        fade.tick(Duration::from_millis(1));
    }
    assert!(fade.is_complete(), "1000x1ms should complete 1s fade");
}

#[test]
fn sequence_forwards_overshoot_across_boundary() {
    let mut seq = sequence(Fade::new(MS_100), Fade::new(MS_100));
    seq.tick(Duration::from_millis(200));
    assert!(
        seq.is_complete(),
        "200ms tick should complete 100ms+100ms sequence"
    );
}

#[test]
fn nested_sequence_completes() {
    let inner = sequence(Fade::new(MS_100), Fade::new(MS_100));
    let mut outer = sequence(inner, Fade::new(MS_100));
    outer.tick(Duration::from_millis(300));
    assert!(
        outer.is_complete(),
        "300ms tick should complete nested 100+100+100 sequence"
    );
}

#[test]
fn parallel_of_slides_completes_together() {
    let mut par = parallel(
        Slide::new(8.0, 0.0, MS_100),
        Slide::new(-8.0, -44.0, Duration::from_millis(200)),
    );
    par.tick(MS_100);
    assert!(!par.is_complete(), "slower slide should still be running");
    par.tick(MS_100);
    assert!(par.is_complete());
}

proptest! {
    #[test]
    fn easing_output_stays_normalized(t in -2.0f32..3.0) {
        for f in [linear, ease_in, ease_out, ease_in_out, ease_out_cubic] {
            let v = f(t);
            prop_assert!((0.0..=1.0).contains(&v), "easing output out of range: {v}");
        }
    }

    #[test]
    fn fade_value_monotonic_in_elapsed_time(steps in proptest::collection::vec(1u64..50, 1..60)) {
        let mut fade = Fade::new(SEC_1);
        let mut last = fade.value();
        for ms in steps {
            fade.tick(Duration::from_millis(ms));
            let v = fade.value();
            prop_assert!(v >= last, "fade value decreased: {last} -> {v}");
            last = v;
        }
    }

    #[test]
    fn slide_position_stays_between_endpoints(
        from in -100.0f32..100.0,
        to in -100.0f32..100.0,
        ms in 0u64..2000,
    ) {
        let mut slide = Slide::new(from, to, SEC_1).easing(linear);
        slide.tick(Duration::from_millis(ms));
        let lo = from.min(to);
        let hi = from.max(to);
        let pos = slide.position();
        prop_assert!((lo - 1e-3..=hi + 1e-3).contains(&pos), "position escaped range: {pos}");
    }
}
