use std::sync::Arc;

use parking_lot::Mutex;
use prunedcv::pruner::{NopPruner, PruneContext, Pruner};
use prunedcv::{Direction, PrunedCv, TrialOutcome};

/// Records the split of every consultation and always prunes when told to.
struct Recorder {
    splits: Arc<Mutex<Vec<usize>>>,
    prune: bool,
}

impl Pruner for Recorder {
    fn should_prune(&self, ctx: &PruneContext<'_>) -> bool {
        assert_eq!(ctx.best_prefix.len(), ctx.current.len());
        assert_eq!(ctx.current.len(), ctx.split);
        self.splits.lock().push(ctx.split);
        self.prune
    }
}

fn recording_engine(folds: usize, start: usize, prune: bool) -> (PrunedCv, Arc<Mutex<Vec<usize>>>) {
    let splits = Arc::new(Mutex::new(Vec::new()));
    let cv = PrunedCv::builder(folds, 0.0)
        .splits_to_start_pruning(start)
        .pruner(Recorder {
            splits: Arc::clone(&splits),
            prune,
        })
        .build()
        .unwrap();
    (cv, splits)
}

#[test]
fn pruner_only_consulted_inside_window() {
    for start in 1..=6 {
        let (mut cv, splits) = recording_engine(5, start, false);
        cv.run_trial(|_| Ok(1.0)).unwrap();
        assert!(splits.lock().is_empty(), "first trial must not consult the pruner");

        cv.run_trial(|_| Ok(2.0)).unwrap();
        let expected: Vec<usize> = (start..5).collect();
        assert_eq!(*splits.lock(), expected, "start = {start}");
    }
}

#[test]
fn first_trial_never_pruned_even_by_eager_pruner() {
    let (mut cv, _) = recording_engine(4, 1, true);
    let report = cv.run_trial(|_| Ok(100.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);
    assert_eq!(report.folds_evaluated, 4);

    let report = cv.run_trial(|_| Ok(0.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Pruned);
    assert_eq!(report.folds_evaluated, 1);
}

#[test]
fn larger_tolerance_never_prunes_more() {
    let best = [1.0, 2.0, 1.5, 1.0, 2.5, 1.2];
    let candidates: [[f64; 6]; 4] = [
        [1.1, 2.4, 1.6, 1.0, 2.0, 1.1],
        [1.5, 3.0, 2.0, 1.4, 3.1, 1.7],
        [2.0, 4.0, 3.0, 2.0, 5.0, 2.4],
        [0.9, 2.2, 1.9, 1.3, 2.6, 1.4],
    ];
    let mut previous_pruned = usize::MAX;
    let mut previous_folds = 0;
    for tolerance in [0.0, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0] {
        let mut pruned = 0;
        let mut folds = 0;
        for candidate in &candidates {
            let mut cv = PrunedCv::new(6, tolerance).unwrap();
            cv.run_trial(|f| Ok(best[f - 1])).unwrap();
            let report = cv.run_trial(|f| Ok(candidate[f - 1])).unwrap();
            pruned += usize::from(report.is_pruned());
            folds += report.folds_evaluated;
        }
        assert!(pruned <= previous_pruned, "tolerance {tolerance} pruned more");
        assert!(folds >= previous_folds, "tolerance {tolerance} evaluated fewer folds");
        previous_pruned = pruned;
        previous_folds = folds;
    }
    assert_eq!(previous_pruned, 0);
}

#[test]
fn probabilistic_never_prunes_at_least_as_good_run() {
    for seed in 0..20 {
        let mut cv = PrunedCv::builder(5, 0.0).seed(seed).build().unwrap();
        cv.run_trial(|_| Ok(1.0)).unwrap();
        // Prefix means never exceed the best's even though single folds lose.
        let values = [0.5, 1.5, 0.5, 1.5, 1.0];
        let report = cv.run_trial(|f| Ok(values[f - 1])).unwrap();
        assert_eq!(report.outcome, TrialOutcome::Complete);
    }
}

#[test]
fn probabilistic_maximize_never_prunes_higher_run() {
    for seed in 0..20 {
        let mut cv = PrunedCv::builder(5, 0.0)
            .direction(Direction::Maximize)
            .seed(seed)
            .build()
            .unwrap();
        cv.run_trial(|_| Ok(0.5)).unwrap();
        let report = cv.run_trial(|_| Ok(0.9)).unwrap();
        assert_eq!(report.outcome, TrialOutcome::Complete);
    }
}

#[test]
fn probabilistic_prunes_consistent_loser_in_both_directions() {
    let mut pruned_min = 0;
    let mut pruned_max = 0;
    for seed in 0..50 {
        let mut cv = PrunedCv::builder(10, 0.0).seed(seed).build().unwrap();
        cv.run_trial(|_| Ok(1.0)).unwrap();
        pruned_min += usize::from(cv.run_trial(|_| Ok(3.0)).unwrap().is_pruned());

        let mut cv = PrunedCv::builder(10, 0.0).maximize().seed(seed).build().unwrap();
        cv.run_trial(|_| Ok(3.0)).unwrap();
        pruned_max += usize::from(cv.run_trial(|_| Ok(1.0)).unwrap().is_pruned());
    }
    // Eight chances to draw above 0.5 from Beta(3..10, 1); escaping all of
    // them is vanishingly unlikely.
    assert!(pruned_min >= 48, "minimize pruned {pruned_min} of 50");
    assert!(pruned_max >= 48, "maximize pruned {pruned_max} of 50");
}

#[test]
fn probabilistic_is_reproducible_with_seed() {
    let values = [1.2, 0.8, 1.3, 0.9, 1.4, 1.1, 1.2, 0.95];
    let run = || {
        let mut cv = PrunedCv::builder(8, 0.0).seed(1234).build().unwrap();
        cv.run_trial(|_| Ok(1.0)).unwrap();
        (0..10)
            .map(|_| cv.run_trial(|f| Ok(values[f - 1])).unwrap().folds_evaluated)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn nop_pruner_always_completes() {
    let mut cv = PrunedCv::builder(3, 0.0).pruner(NopPruner).build().unwrap();
    cv.run_trial(|_| Ok(1.0)).unwrap();
    let report = cv.run_trial(|_| Ok(1e6)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);
    assert_eq!(report.folds_evaluated, 3);
}
