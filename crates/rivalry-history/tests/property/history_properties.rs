use proptest::prelude::*;
use rivalry_core::{HistoryParams, IntervalRecord};
use rivalry_history::{formula, HistoryEngine};

fn arb_intervals() -> impl Strategy<Value = Vec<IntervalRecord>> {
    // States cover both percepts, the mixed code (3), and a blink code (4).
    prop::collection::vec((1i64..100, 1i32..=4), 1..50).prop_map(|pairs| {
        let mut onset = 0;
        pairs
            .into_iter()
            .map(|(duration, state)| {
                let record = IntervalRecord::new(onset, duration, state);
                onset += duration;
                record
            })
            .collect()
    })
}

fn arb_params() -> impl Strategy<Value = HistoryParams> {
    (0.1f64..5.0, 0.0f64..=1.0).prop_map(|(tau_normalized, mixed_value)| HistoryParams {
        tau_normalized,
        mixed_state: 3,
        mixed_value,
    })
}

// ── Boundedness ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_emitted_value_is_in_the_unit_interval(
        intervals in arb_intervals(),
        params in arb_params(),
        mean_duration in 1.0f64..100.0,
    ) {
        let engine = HistoryEngine::with_params(params).unwrap();
        let rows = engine.compute(&intervals, mean_duration).unwrap();

        for row in &rows {
            for value in [row.history_same, row.history_other].into_iter().flatten() {
                prop_assert!(value.value().is_finite());
                prop_assert!((0.0..=1.0).contains(&value.value()));
            }
        }
    }
}

// ── Length invariant and last-row exclusion ──────────────────────────────

proptest! {
    #[test]
    fn output_aligns_with_input_and_excludes_the_last_row(
        intervals in arb_intervals(),
        params in arb_params(),
        mean_duration in 1.0f64..100.0,
    ) {
        let engine = HistoryEngine::with_params(params).unwrap();
        let rows = engine.compute(&intervals, mean_duration).unwrap();

        prop_assert_eq!(rows.len(), intervals.len());
        prop_assert!(!rows[rows.len() - 1].is_populated());

        for (i, (row, record)) in rows.iter().zip(&intervals).enumerate() {
            let last = i == intervals.len() - 1;
            let tracked = record.state == 1 || record.state == 2;
            prop_assert_eq!(row.is_populated(), tracked && !last);
            prop_assert_eq!(row.history_same.is_some(), row.history_other.is_some());
            prop_assert_eq!(row.tau_normalized, params.tau_normalized);
        }
    }
}

// ── Monotone saturation under sustained dominance ────────────────────────

proptest! {
    #[test]
    fn uninterrupted_dominance_never_loses_history(
        durations in prop::collection::vec(1i64..100, 2..30),
        tau_normalized in 0.1f64..5.0,
    ) {
        let mut onset = 0;
        let intervals: Vec<_> = durations
            .iter()
            .map(|&d| {
                let r = IntervalRecord::new(onset, d, 1);
                onset += d;
                r
            })
            .collect();

        let engine = HistoryEngine::with_params(HistoryParams {
            tau_normalized,
            ..Default::default()
        })
        .unwrap();
        let rows = engine.compute(&intervals, 10.0).unwrap();

        let mut prev = 0.0;
        for row in rows.iter().take(rows.len() - 1) {
            let same = row.history_same.unwrap().value();
            prop_assert!(same + f64::EPSILON >= prev, "history regressed: {} < {}", same, prev);
            prev = same;
        }
    }
}

// ── Zero-duration-approach limit ─────────────────────────────────────────

proptest! {
    #[test]
    fn vanishing_durations_leave_history_unchanged(
        current in 0.01f64..0.99,
        tau in 1.0f64..100.0,
    ) {
        let d = 1e-9;
        prop_assert!((formula::saturate(current, d, tau) - current).abs() < 1e-6);
        prop_assert!((formula::recover(current, d, tau) - current).abs() < 1e-6);
    }
}
