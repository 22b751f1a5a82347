use service_price_planner::{
    evaluate_profit, solve_price, EvaluationError, ProfitBand, ProfitTargets,
};

#[test]
fn scenario_price_grades_as_good() {
    // Listing 29.99 against the ~16.9167 scenario cost is a ~43.6% margin.
    let realized = evaluate_profit(29.99, 16.9167, &ProfitTargets::default()).unwrap();
    assert!(
        (realized.percent - 43.6).abs() < 0.05,
        "percent = {}",
        realized.percent
    );
    assert_eq!(realized.band, ProfitBand::Good);
}

#[test]
fn zero_listed_price_is_rejected() {
    let err = evaluate_profit(0.0, 16.9167, &ProfitTargets::default()).unwrap_err();
    assert_eq!(err, EvaluationError::ZeroListedPrice);
}

#[test]
fn negative_listed_price_is_rejected() {
    let err = evaluate_profit(-9.99, 16.9167, &ProfitTargets::default()).unwrap_err();
    assert_eq!(err, EvaluationError::NegativeListedPrice(-9.99));
}

#[test]
fn pricing_below_cost_yields_negative_percent() {
    let realized = evaluate_profit(10.0, 16.9167, &ProfitTargets::default()).unwrap();
    assert!(realized.percent < 0.0, "percent = {}", realized.percent);
    assert_eq!(realized.band, ProfitBand::BelowMinimum);
}

#[test]
fn percent_is_never_nan_or_infinite() {
    let realized = evaluate_profit(0.01, 1000.0, &ProfitTargets::default()).unwrap();
    assert!(realized.percent.is_finite());
}

#[test]
fn band_boundaries_are_inclusive_at_the_lower_edge() {
    let targets = ProfitTargets::default(); // 20 / 30 / 40

    // 10% < minimum.
    let low = evaluate_profit(100.0, 90.0, &targets).unwrap();
    assert_eq!(low.band, ProfitBand::BelowMinimum);

    // Exactly the minimum counts as acceptable.
    let at_min = evaluate_profit(100.0, 80.0, &targets).unwrap();
    assert_eq!(at_min.percent, 20.0);
    assert_eq!(at_min.band, ProfitBand::Acceptable);

    // Exactly the target counts as good.
    let at_target = evaluate_profit(100.0, 70.0, &targets).unwrap();
    assert_eq!(at_target.percent, 30.0);
    assert_eq!(at_target.band, ProfitBand::Good);
}

#[test]
fn bands_come_from_the_supplied_targets() {
    // 12% margin: below-minimum against the defaults, good against low bars.
    let percent_12 = evaluate_profit(100.0, 88.0, &ProfitTargets::default()).unwrap();
    assert_eq!(percent_12.band, ProfitBand::BelowMinimum);

    let low_bars = ProfitTargets {
        minimum_pct: 5.0,
        target_pct: 10.0,
        maximum_pct: 15.0,
    };
    let against_low = evaluate_profit(100.0, 88.0, &low_bars).unwrap();
    assert_eq!(against_low.band, ProfitBand::Good);
}

#[test]
fn misordered_targets_are_rejected_by_the_evaluator() {
    // 22.0 against the scenario cost is a ~23.1% margin; with min 30 and
    // target 20 that would have graded "good" while sitting below the
    // minimum, so the evaluator refuses the target set outright.
    let targets = ProfitTargets {
        minimum_pct: 30.0,
        target_pct: 20.0,
        maximum_pct: 40.0,
    };
    assert_eq!(
        evaluate_profit(22.0, 16.9167, &targets).unwrap_err(),
        EvaluationError::MisorderedTargets(30.0, 20.0, 40.0)
    );
}

#[test]
fn non_finite_listed_price_is_rejected() {
    assert_eq!(
        evaluate_profit(f64::NAN, 16.9167, &ProfitTargets::default()).unwrap_err(),
        EvaluationError::NonFinitePrice
    );
    assert_eq!(
        evaluate_profit(f64::INFINITY, 16.9167, &ProfitTargets::default()).unwrap_err(),
        EvaluationError::NonFinitePrice
    );
}

#[test]
fn solver_and_evaluator_round_trip() {
    // evaluate(solve(cost, p), cost) must recover p: the two formulas are
    // algebraic inverses.
    let cost = 16.9167;
    for p in [0.0, 5.0, 12.5, 20.0, 33.3, 50.0, 75.0, 99.0] {
        let price = solve_price(cost, p).unwrap();
        let targets = ProfitTargets {
            minimum_pct: 0.0,
            target_pct: 0.0,
            maximum_pct: 0.0,
        };
        let realized = evaluate_profit(price, cost, &targets).unwrap();
        assert!(
            (realized.percent - p).abs() < 1e-6,
            "round trip drifted at p={p}: got {}",
            realized.percent
        );
    }
}
