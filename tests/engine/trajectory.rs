use prunedcv::{FoldDecision, PrunedCv};

#[test]
fn ask_tell_interface_matches_run_trial() {
    let mut stepped = PrunedCv::new(4, 0.1).unwrap();
    let mut driven = PrunedCv::new(4, 0.1).unwrap();

    let trials: [[f64; 4]; 3] = [[2.0, 2.0, 2.0, 2.0], [1.0, 1.5, 1.0, 1.5], [3.0, 3.0, 3.0, 3.0]];
    for trial in &trials {
        let mut decision = FoldDecision::Continue;
        for &v in trial {
            decision = stepped.add_split_value(v).unwrap();
            if decision != FoldDecision::Continue {
                break;
            }
        }
        let report = driven.run_trial(|f| Ok(trial[f - 1])).unwrap();
        let score = match decision {
            FoldDecision::Pruned { score } | FoldDecision::Complete { score } => score,
            FoldDecision::Continue => panic!("trial did not finish"),
        };
        assert!((score - report.score).abs() < 1e-12);
    }
    assert_eq!(
        stepped.best_trajectory().values(),
        driven.best_trajectory().values()
    );
    assert_eq!(driven.best_trajectory().values(), &[1.0, 1.5, 1.0, 1.5]);
}

#[test]
fn extrapolation_uses_prefix_ratio_and_full_best_mean() {
    let mut cv = PrunedCv::new(4, 0.0).unwrap();
    cv.run_trial(|f| Ok([1.0, 1.0, 2.0, 4.0][f - 1])).unwrap();
    // Best full mean 2.0, best prefix mean after two folds 1.0.
    let report = cv.run_trial(|_| Ok(1.5)).unwrap();
    assert!(report.is_pruned());
    assert_eq!(report.folds_evaluated, 2);
    assert!((report.score - 3.0).abs() < 1e-12);
}

#[test]
fn zero_error_best_run_falls_back_to_prefix_mean() {
    let mut cv = PrunedCv::new(3, 0.1).unwrap();
    cv.run_trial(|_| Ok(0.0)).unwrap();
    let report = cv.run_trial(|_| Ok(0.4)).unwrap();
    assert!(report.is_pruned());
    assert!((report.score - 0.4).abs() < 1e-12);
}

#[test]
fn reset_starts_a_fresh_search() {
    let mut cv = PrunedCv::new(3, 0.0).unwrap();
    cv.run_trial(|_| Ok(1.0)).unwrap();
    cv.reset();
    let report = cv.run_trial(|_| Ok(5.0)).unwrap();
    assert!(!report.is_pruned());
    assert_eq!(cv.best_trajectory().values(), &[5.0; 3]);
}
