use prunedcv::{FoldDecision, PrunedCv, TrialOutcome};

fn warm_engine(tolerance: f64) -> PrunedCv {
    let mut cv = PrunedCv::new(5, tolerance).unwrap();
    let first = cv.run_trial(|_| Ok(1.0)).unwrap();
    assert_eq!(first.outcome, TrialOutcome::Complete);
    cv
}

#[test]
fn first_trial_completes_and_becomes_best() {
    let cv = warm_engine(0.1);
    assert!(cv.is_warm());
    assert_eq!(cv.best_trajectory().values(), &[1.0; 5]);
    assert!((cv.best_trajectory().sum() - 5.0).abs() < f64::EPSILON);
}

#[test]
fn clearly_worse_trial_is_pruned_at_second_fold() {
    let mut cv = warm_engine(0.1);
    let mut requested = Vec::new();
    let report = cv
        .run_trial(|fold| {
            requested.push(fold);
            Ok(2.0)
        })
        .unwrap();

    assert_eq!(report.outcome, TrialOutcome::Pruned);
    assert_eq!(report.folds_evaluated, 2);
    assert_eq!(requested, vec![1, 2]);
    // (2.0 / 1.0) * (5 / 5)
    assert!((report.score - 2.0).abs() < 1e-12);
    assert!(cv.is_pruned());
    assert!(cv.trial_state().is_empty());
}

#[test]
fn wide_tolerance_continues_past_second_fold() {
    let mut cv = warm_engine(1.5);
    assert_eq!(cv.add_split_value(2.0).unwrap(), FoldDecision::Continue);
    // 1.0 * 2.5 = 2.5 is not below 2.0
    assert_eq!(cv.add_split_value(2.0).unwrap(), FoldDecision::Continue);
    assert_eq!(cv.trial_state().len(), 2);
}

#[test]
fn maximize_never_prunes_a_higher_scoring_run() {
    let mut cv = PrunedCv::builder(5, 0.1).maximize().build().unwrap();
    cv.run_trial(|_| Ok(0.6)).unwrap();

    let better = cv.run_trial(|_| Ok(0.8)).unwrap();
    assert_eq!(better.outcome, TrialOutcome::Complete);
    assert!((better.score - 0.8).abs() < 1e-12);
    // The higher-scoring run is now the best trajectory.
    assert_eq!(cv.best_trajectory().values(), &[0.8; 5]);

    let worse = cv.run_trial(|_| Ok(0.4)).unwrap();
    assert_eq!(worse.outcome, TrialOutcome::Pruned);
    // (0.4 / 0.8) * 0.8, reported in the caller's own higher-is-better sense.
    assert!((worse.score - 0.4).abs() < 1e-12);
}

#[test]
fn maximize_tolerance_margin_is_respected() {
    let mut cv = PrunedCv::builder(4, 0.5).maximize().build().unwrap();
    cv.run_trial(|_| Ok(0.9)).unwrap();
    // 0.7 * 1.5 = 1.05 is not below 0.9: kept.
    let report = cv.run_trial(|_| Ok(0.7)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);
    // 0.5 * 1.5 = 0.75 is below 0.9: pruned.
    let report = cv.run_trial(|_| Ok(0.5)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Pruned);
}

#[test]
fn best_trajectory_is_shared_across_trials() {
    let mut cv = PrunedCv::new(4, 0.0).unwrap();
    cv.run_trial(|_| Ok(3.0)).unwrap();
    cv.run_trial(|_| Ok(1.0)).unwrap();
    assert_eq!(cv.best_trajectory().values(), &[1.0; 4]);

    // 2.0 would have beaten the first trial but not the current best.
    let report = cv.run_trial(|_| Ok(2.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Pruned);
    assert_eq!(cv.n_trials(), 3);
    assert_eq!(cv.n_pruned(), 1);
}

#[test]
fn completed_worse_trial_does_not_replace_best() {
    // Pruning starts too late to catch the run, so it completes.
    let mut cv = PrunedCv::builder(3, 0.0)
        .splits_to_start_pruning(3)
        .build()
        .unwrap();
    cv.run_trial(|_| Ok(1.0)).unwrap();
    let report = cv.run_trial(|_| Ok(4.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);
    assert!((report.score - 4.0).abs() < 1e-12);
    assert_eq!(cv.best_trajectory().values(), &[1.0; 3]);
}

#[test]
fn score_is_continuous_across_the_pruning_boundary() {
    // A run that is just inside the tolerance completes; one just outside is
    // pruned. Both report nearly the same score.
    let best = [1.0, 1.0, 1.0, 1.0];
    let run = |value: f64| {
        let mut cv = PrunedCv::new(4, 0.25).unwrap();
        cv.run_trial(|f| Ok(best[f - 1])).unwrap();
        cv.run_trial(|_| Ok(value)).unwrap()
    };
    let kept = run(1.249_999);
    let pruned = run(1.250_001);
    assert_eq!(kept.outcome, TrialOutcome::Complete);
    assert_eq!(pruned.outcome, TrialOutcome::Pruned);
    assert!((kept.score - pruned.score).abs() < 1e-5);
}

#[test]
fn set_tolerance_affects_following_decisions() {
    let mut cv = warm_engine(0.1);
    cv.set_tolerance(2.0).unwrap();
    let report = cv.run_trial(|_| Ok(2.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);

    cv.set_tolerance(0.0).unwrap();
    let report = cv.run_trial(|_| Ok(1.5)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Pruned);
}
