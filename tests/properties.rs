//! Property tests for the annealing search.

use proptest::prelude::*;
use u_select::anneal::{anneal, AnnealConfig, Annealer, CoolingSchedule, ScoreMap, SearchResult};

fn score_map() -> impl Strategy<Value = ScoreMap> {
    prop::collection::btree_map("[a-z]{1,6}", -5.0f64..5.0, 1..12)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn same_seed_same_result(scores in score_map(), noise in 0.0f64..1.0, seed in any::<u64>()) {
        let a = anneal(&scores, noise, seed).unwrap();
        let b = anneal(&scores, noise, seed).unwrap();
        prop_assert_eq!(&a.candidate, &b.candidate);
        prop_assert_eq!(a.value.to_bits(), b.value.to_bits());
        prop_assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn result_is_a_member(scores in score_map(), seed in any::<u64>()) {
        let result = anneal(&scores, 0.15, seed).unwrap();
        let id = result.candidate.expect("non-empty input selects a candidate");
        prop_assert!(scores.contains(&id));
    }

    #[test]
    fn iteration_count_ignores_contents(scores in score_map(), seed in any::<u64>()) {
        let result = anneal(&scores, 0.15, seed).unwrap();
        prop_assert_eq!(result.iterations, 58);
    }

    #[test]
    fn iteration_count_matches_schedule(
        t0 in 0.5f64..5.0,
        ratio in 0.0001f64..0.5,
        alpha in 0.5f64..0.99,
        seed in any::<u64>(),
    ) {
        let config = AnnealConfig::default()
            .with_initial_temperature(t0)
            .with_min_temperature(t0 * ratio)
            .with_cooling(CoolingSchedule::Geometric { alpha })
            .with_seed(seed);
        let scores: ScoreMap = [("a", 1.0), ("b", 0.5)].into_iter().collect();
        let result = Annealer::run(&scores, &config).unwrap();
        prop_assert_eq!(result.iterations, config.iteration_budget().unwrap());
    }

    #[test]
    fn empty_input_short_circuits(noise in -1.0f64..1.0, seed in any::<u64>()) {
        let result = anneal(&ScoreMap::new(), noise, seed).unwrap();
        prop_assert_eq!(result, SearchResult::empty());
    }

    #[test]
    fn single_candidate_always_wins(score in -100.0f64..100.0, seed in any::<u64>()) {
        let scores: ScoreMap = [("X", score)].into_iter().collect();
        let result = anneal(&scores, 0.15, seed).unwrap();
        prop_assert_eq!(result.candidate.as_deref(), Some("X"));
        prop_assert_eq!(result.iterations, 58);
    }
}

#[test]
fn iteration_count_stable_across_seeds() {
    let scores: ScoreMap = [("A", 0.7), ("B", 0.65), ("C", 1.13), ("D", 0.81)]
        .into_iter()
        .collect();
    let expected = AnnealConfig::default().iteration_budget().unwrap();
    for seed in 1000..1030 {
        assert_eq!(anneal(&scores, 0.15, seed).unwrap().iterations, expected);
    }
}
