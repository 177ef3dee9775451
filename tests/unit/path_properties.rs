//! Property tests for path kinematics.

use proptest::prelude::*;
use safety_motion::{MotionState, Path};

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

prop_compose! {
    fn arb_path()(
        d1 in 0.0f64..1.0,
        d2 in 0.0f64..1.0,
        d3 in 0.0f64..1.0,
        j1 in -10.0f64..10.0,
        j2 in -10.0f64..10.0,
        j3 in -10.0f64..10.0,
        v0 in -5.0f64..5.0,
        a0 in -5.0f64..5.0,
    ) -> Path {
        Path::from_parts(
            [d1, d1 + d2, d1 + d2 + d3],
            [j1, j2, j3],
            MotionState::new(0.0, v0, a0, 0.0),
        )
        .unwrap()
    }
}

proptest! {
    #[test]
    fn phase_times_stay_ordered(path in arb_path(), steps in prop::collection::vec(0.0f64..0.5, 0..8)) {
        let mut path = path;
        for dt in steps {
            path.advance(dt).unwrap();
            let [t1, t2, t3] = path.end_times();
            prop_assert!(0.0 <= t1 && t1 <= t2 && t2 <= t3);
        }
    }

    #[test]
    fn advance_is_additive(path in arb_path(), a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let total = path.total_duration();
        let (a, b) = (a * total / 2.0, b * total / 2.0);

        let mut split = path;
        split.advance(a).unwrap();
        split.advance(b).unwrap();
        let mut whole = path;
        whole.advance(a + b).unwrap();

        prop_assert!(close(split.position(), whole.position()));
        prop_assert!(close(split.velocity(), whole.velocity()));
        prop_assert!(close(split.acceleration(), whole.acceleration()));
    }

    #[test]
    fn final_motion_matches_advance(path in arb_path()) {
        let end = path.final_motion();
        let mut copy = path;
        copy.advance(path.total_duration()).unwrap();

        prop_assert!(close(end.position, copy.position()));
        prop_assert!(close(end.velocity, copy.velocity()));
        prop_assert!(close(end.acceleration, copy.acceleration()));
    }

    #[test]
    fn max_velocity_is_an_upper_bound(path in arb_path(), fraction in 0.0f64..1.0) {
        let max = path.max_velocity();
        prop_assert!(max >= path.velocity());
        prop_assert!(max >= path.final_motion().velocity);

        let mut copy = path;
        copy.advance(fraction * path.total_duration()).unwrap();
        prop_assert!(max + TOLERANCE >= copy.velocity());
    }

    #[test]
    fn crossing_hits_the_limit(path in arb_path(), fraction in 0.0f64..1.0) {
        let start = path.velocity();
        let end = path.final_motion().velocity;
        prop_assume!(start > end);

        let v_limit = end + fraction * (start - end);
        let crossing = path.motion_under_velocity(v_limit);
        prop_assert!(crossing.is_some());

        let crossing = crossing.unwrap();
        prop_assert!(crossing.time >= 0.0 && crossing.time <= path.total_duration());
        prop_assert!((crossing.state.velocity - v_limit).abs() < 1e-6);
    }
}
