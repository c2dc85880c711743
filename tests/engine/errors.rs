use prunedcv::{Error, PrunedCv, PrunedCvConfig, TrialOutcome};

#[test]
fn construction_rejects_bad_configuration() {
    assert!(matches!(PrunedCv::new(0, 0.1), Err(Error::InvalidFolds(0))));
    assert!(matches!(PrunedCv::new(1, 0.1), Err(Error::InvalidFolds(1))));
    assert!(matches!(PrunedCv::new(5, -1e-9), Err(Error::InvalidTolerance(_))));
    assert!(matches!(
        PrunedCv::new(5, f64::INFINITY),
        Err(Error::InvalidTolerance(_))
    ));
    assert!(PrunedCv::new(2, 0.0).is_ok());
}

#[test]
fn zero_pruning_start_prunes_from_the_first_fold() {
    let mut cv = PrunedCv::builder(5, 0.1)
        .splits_to_start_pruning(0)
        .build()
        .unwrap();
    cv.run_trial(|_| Ok(1.0)).unwrap();

    let report = cv.run_trial(|_| Ok(3.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Pruned);
    assert_eq!(report.folds_evaluated, 1);
    assert!((report.score - 3.0).abs() < 1e-12);
}

#[test]
fn set_tolerance_validates_and_keeps_old_value() {
    let mut cv = PrunedCv::new(5, 0.3).unwrap();
    assert!(matches!(cv.set_tolerance(-0.5), Err(Error::InvalidTolerance(_))));
    assert!(matches!(cv.set_tolerance(f64::NAN), Err(Error::InvalidTolerance(_))));
    assert!((cv.config().tolerance - 0.3).abs() < f64::EPSILON);
    cv.set_tolerance(0.0).unwrap();
    assert!(cv.config().tolerance.abs() < f64::EPSILON);
}

#[test]
fn non_finite_fold_error_aborts_trial() {
    let mut cv = PrunedCv::new(3, 0.1).unwrap();
    cv.run_trial(|_| Ok(1.0)).unwrap();

    let err = cv
        .run_trial(|fold| Ok(if fold == 2 { f64::NAN } else { 1.0 }))
        .unwrap_err();
    assert!(matches!(err, Error::NonFiniteFoldError { fold: 2, .. }));
    assert!(cv.trial_state().is_empty());
    assert_eq!(cv.best_trajectory().values(), &[1.0; 3]);

    // The engine is still usable.
    let report = cv.run_trial(|_| Ok(0.5)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);
    assert_eq!(cv.best_trajectory().values(), &[0.5; 3]);
}

#[test]
fn failing_first_trial_leaves_engine_cold() {
    let mut cv = PrunedCv::new(4, 0.1).unwrap();
    let err = cv
        .run_trial(|fold| {
            if fold == 3 {
                Err(Error::Estimator("diverged".into()))
            } else {
                Ok(1.0)
            }
        })
        .unwrap_err();
    assert!(matches!(err, Error::Estimator(_)));
    assert!(!cv.is_warm());
    assert!(cv.best_trajectory().values().is_empty());

    // The next trial populates the trajectory from scratch.
    let report = cv.run_trial(|_| Ok(7.0)).unwrap();
    assert_eq!(report.outcome, TrialOutcome::Complete);
    assert_eq!(cv.best_trajectory().values(), &[7.0; 4]);
}

#[test]
fn from_config_validates() {
    let mut config = PrunedCvConfig::new(3, 0.1);
    config.folds = 1;
    assert!(PrunedCv::from_config(config).is_err());
}
