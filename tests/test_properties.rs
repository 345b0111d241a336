//! Property-based tests for the simulator and the fraction utilities.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use montyhall::analysis::monte_carlo::{stay_wins, switch_final_choice, switch_wins};
use montyhall::{Door, Fraction, MonteCarloSimulator};

fn door_strategy() -> impl Strategy<Value = Door> {
    prop_oneof![Just(Door::One), Just(Door::Two), Just(Door::Three)]
}

proptest! {
    // 1. Win counts stay within [0, N]
    #[test]
    fn wins_bounded_by_trials(trials in 1u64..2_000, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = MonteCarloSimulator::run(trials, &mut rng).unwrap();
        prop_assert_eq!(report.trials, trials);
        prop_assert!(report.stay_wins <= trials);
        prop_assert!(report.switch_wins <= trials);
    }

    // 2. Parallel chunking covers every trial exactly once
    #[test]
    fn parallel_counts_every_trial(trials in 1u64..5_000, chunk in 1u64..700, seed in any::<u64>()) {
        let report = MonteCarloSimulator::run_parallel(trials, seed, chunk).unwrap();
        prop_assert_eq!(report.trials, trials);
        prop_assert!(report.stay_wins <= trials && report.switch_wins <= trials);
    }

    // 3. Switch ends on the prize or nowhere, never on a different door
    #[test]
    fn switch_final_choice_is_prize_or_none(prize in door_strategy(), initial in door_strategy()) {
        match switch_final_choice(prize, initial) {
            Some(door) => prop_assert_eq!(door, prize),
            None => prop_assert_eq!(prize, initial),
        }
        prop_assert_ne!(stay_wins(prize, initial), switch_wins(prize, initial));
    }

    // 4. limit_denominator respects the bound and is never further than any
    //    other fraction with a small denominator
    #[test]
    fn limit_denominator_is_best(num in 0u64..10_000, den in 1u64..10_000, max in 1u64..20) {
        let f = Fraction::new(num, den).unwrap();
        let best = f.limit_denominator(max).unwrap();
        prop_assert!(best.denominator() <= max);
        let err = (best.to_f64() - f.to_f64()).abs();
        for q in 1..=max {
            let p = (f.to_f64() * q as f64).round() as u64;
            let candidate = Fraction::new(p, q).unwrap();
            prop_assert!(err <= (candidate.to_f64() - f.to_f64()).abs() + 1e-12);
        }
    }

    // 5. Addition is commutative and exact
    #[test]
    fn fraction_addition_commutes(a in 0u64..1_000, b in 1u64..1_000, c in 0u64..1_000, d in 1u64..1_000) {
        let x = Fraction::new(a, b).unwrap();
        let y = Fraction::new(c, d).unwrap();
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!(x + y, Fraction::new(a * d + c * b, b * d).unwrap());
    }
}
