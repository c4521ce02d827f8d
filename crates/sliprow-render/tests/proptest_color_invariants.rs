//! Property-based invariants for colors and the buffer opacity stack.
//!
//! 1. `with_opacity` never increases alpha for opacities in [0, 1] and
//!    never leaves the channel range.
//! 2. `lerp` stays channel-wise between its endpoints and hits them at
//!    t = 0 and t = 1.
//! 3. The buffer opacity stack product stays in [0, 1] under arbitrary
//!    push/pop sequences, and the base level survives every pop.

use proptest::prelude::*;
use sliprow_render::buffer::Buffer;
use sliprow_render::cell::PackedRgba;

fn color_strategy() -> impl Strategy<Value = PackedRgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| PackedRgba::rgba(r, g, b, a))
}

proptest! {
    #[test]
    fn with_opacity_never_brightens(color in color_strategy(), opacity in 0.0f32..=1.0) {
        let scaled = color.with_opacity(opacity);
        prop_assert!(scaled.a() <= color.a());
        prop_assert_eq!(scaled.r(), color.r());
        prop_assert_eq!(scaled.g(), color.g());
        prop_assert_eq!(scaled.b(), color.b());
    }

    #[test]
    fn lerp_stays_between_endpoints(
        a in color_strategy(),
        b in color_strategy(),
        t in 0.0f32..=1.0,
    ) {
        let mid = a.lerp(b, t);
        for (from, via, to) in [
            (a.r(), mid.r(), b.r()),
            (a.g(), mid.g(), b.g()),
            (a.b(), mid.b(), b.b()),
            (a.a(), mid.a(), b.a()),
        ] {
            let lo = from.min(to);
            let hi = from.max(to);
            prop_assert!((lo..=hi).contains(&via), "channel escaped range: {via} not in {lo}..={hi}");
        }
    }

    #[test]
    fn lerp_endpoints_exact(a in color_strategy(), b in color_strategy()) {
        prop_assert_eq!(a.lerp(b, 0.0), a);
        prop_assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn opacity_stack_stays_normalized(ops in proptest::collection::vec(proptest::option::of(0.0f32..=1.5), 0..30)) {
        let mut buf = Buffer::new(4, 1);
        for op in ops {
            match op {
                Some(level) => buf.push_opacity(level),
                None => buf.pop_opacity(),
            }
            let opacity = buf.opacity();
            prop_assert!((0.0..=1.0).contains(&opacity), "opacity escaped range: {opacity}");
        }
        for _ in 0..40 {
            buf.pop_opacity();
        }
        prop_assert!((buf.opacity() - 1.0).abs() < f32::EPSILON, "base level must survive pops");
    }
}
