//! Property tests for the game core

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use shake_sort::consts::{BASELINE, SHAKE_CAP};
use shake_sort::sim::{
    GamePhase, GameSession, ShakeAnimator, ShakeMode, ZERO_DISPLAY, is_sorted, shuffle,
};

#[derive(Debug, Clone)]
enum Op {
    Primary(f64),
    Input(f64),
    KeyDown(f64),
    KeyUp,
    Frame,
    Reset,
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0..50.0f64).prop_map(Op::Primary),
        (0.0..50.0f64).prop_map(Op::Input),
        (0.0..50.0f64).prop_map(Op::KeyDown),
        Just(Op::KeyUp),
        Just(Op::Frame),
        Just(Op::Reset),
    ]
}

fn any_shake_mode() -> impl Strategy<Value = ShakeMode> {
    prop_oneof![Just(ShakeMode::Jitter), Just(ShakeMode::ImpulseDecay)]
}

fn sorted_copy(values: &[u32; 5]) -> [u32; 5] {
    let mut v = *values;
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn shuffle_preserves_multiset(seed in any::<u64>(), rounds in 1usize..20) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut items = BASELINE;
        for _ in 0..rounds {
            shuffle(&mut items, &mut rng);
            prop_assert_eq!(sorted_copy(&items), BASELINE);
        }
    }

    #[test]
    fn is_sorted_matches_definition(items in prop::collection::vec(0u32..10, 0..12)) {
        let expected = (1..items.len()).all(|i| items[i - 1] <= items[i]);
        prop_assert_eq!(is_sorted(&items), expected);
    }

    #[test]
    fn shake_offset_stays_in_bounds(
        mode in any_shake_mode(),
        seed in any::<u64>(),
        steps in prop::collection::vec(0u8..4, 0..300),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut shake = ShakeAnimator::new(mode);
        for step in steps {
            match step {
                0 => shake.on_input(),
                1 => shake.on_start(),
                2 => shake.on_key_release(),
                _ => {
                    let off = shake.advance(true, &mut rng);
                    prop_assert!(off.x.abs() <= SHAKE_CAP);
                    prop_assert!(off.y.abs() <= SHAKE_CAP);
                }
            }
            prop_assert!(shake.offset() >= 0.0);
            prop_assert!(shake.offset() <= SHAKE_CAP);
        }
    }

    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        mode in any_shake_mode(),
        ops in prop::collection::vec(any_op(), 0..200),
    ) {
        let mut session = GameSession::new(seed);
        session.configure(mode, 5.0, true);
        let mut now = 0.0;
        for op in ops {
            match op {
                Op::Primary(dt) => { now += dt; session.on_primary_action(now); }
                Op::Input(dt) => { now += dt; session.on_player_input(now); }
                Op::KeyDown(dt) => { now += dt; session.on_key_down(now); }
                Op::KeyUp => session.on_key_up(),
                Op::Frame => { session.advance_frame(); }
                Op::Reset => session.reset_to_initial(),
            }

            prop_assert_eq!(sorted_copy(session.puzzle().values()), BASELINE);
            prop_assert!(session.shake().offset() >= 0.0);
            prop_assert!(session.shake().offset() <= SHAKE_CAP);
            match session.phase() {
                GamePhase::Idle => {
                    prop_assert_eq!(session.label().as_str(), "Shuffle!");
                    prop_assert_eq!(session.shake().offset(), 0.0);
                    prop_assert!(!session.timer().is_running());
                }
                GamePhase::Active => {
                    prop_assert_eq!(session.label().as_str(), "Sort!");
                    prop_assert!(session.timer().is_running());
                }
            }
        }
    }

    #[test]
    fn reset_is_idempotent(seed in any::<u64>(), ops in prop::collection::vec(any_op(), 0..50)) {
        let mut session = GameSession::new(seed);
        let mut now = 0.0;
        for op in ops {
            match op {
                Op::Primary(dt) => { now += dt; session.on_primary_action(now); }
                Op::Input(dt) | Op::KeyDown(dt) => { now += dt; session.on_player_input(now); }
                _ => { session.advance_frame(); }
            }
        }
        session.reset_to_initial();
        let once = format!("{:?}", session);
        session.reset_to_initial();
        prop_assert_eq!(format!("{:?}", session), once);
        prop_assert_eq!(session.puzzle().values(), &BASELINE);
        prop_assert_eq!(session.phase(), GamePhase::Idle);
        prop_assert_eq!(session.timer().display(), ZERO_DISPLAY);
        prop_assert_eq!(session.shake().offset(), 0.0);
    }

    #[test]
    fn debounced_pair_shuffles_once(
        seed in any::<u64>(),
        debounce in 2.0..500.0f64,
        gap_frac in 0.0..0.99f64,
    ) {
        let mut session = GameSession::new(seed);
        session.configure(ShakeMode::ImpulseDecay, debounce, true);
        session.on_primary_action(0.0);
        prop_assume!(session.phase() == GamePhase::Active);

        let t = 1000.0;
        let first = session.on_player_input(t);
        prop_assert!(first);
        // A lucky win leaves the session idle; the second input is ignored either way
        let second = session.on_player_input(t + debounce * gap_frac);
        prop_assert!(!second);
        prop_assert_eq!(session.shuffles(), 1);
    }
}
