use service_price_planner::{solve_price, solve_price_tiers, DomainError, ProfitTargets};

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn zero_percent_returns_cost_unchanged() {
    assert_eq!(solve_price(16.9167, 0.0).unwrap(), 16.9167);
    assert_eq!(solve_price(0.0, 0.0).unwrap(), 0.0);
}

#[test]
fn hundred_percent_and_above_are_rejected() {
    assert_eq!(
        solve_price(10.0, 100.0).unwrap_err(),
        DomainError::ProfitPctTooHigh(100.0)
    );
    assert_eq!(
        solve_price(10.0, 150.0).unwrap_err(),
        DomainError::ProfitPctTooHigh(150.0)
    );
}

#[test]
fn negative_percent_prices_below_cost() {
    // Intentionally pricing below cost: -25% margin on 100 cost.
    let price = solve_price(100.0, -25.0).unwrap();
    assert_eq!(price, 80.0);
}

#[test]
fn negative_cost_is_rejected() {
    assert_eq!(
        solve_price(-1.0, 20.0).unwrap_err(),
        DomainError::NegativeCost(-1.0)
    );
}

#[test]
fn scenario_tiers_match_expected_prices() {
    // total cost from the default operating-cost scenario.
    let cost = 16.9167;
    let tiers = solve_price_tiers(cost, &ProfitTargets::default()).unwrap();

    assert!(close(tiers.min_price, 21.15, 0.01), "min = {}", tiers.min_price);
    assert!(close(tiers.target_price, 24.17, 0.01), "target = {}", tiers.target_price);
    assert!(close(tiers.max_price, 28.19, 0.01), "max = {}", tiers.max_price);

    // Each tier is exactly cost / (1 - pct/100).
    assert_eq!(tiers.min_price, cost / (1.0 - 20.0 / 100.0));
    assert_eq!(tiers.target_price, cost / (1.0 - 30.0 / 100.0));
    assert_eq!(tiers.max_price, cost / (1.0 - 40.0 / 100.0));
}

#[test]
fn ordered_targets_give_monotonic_tiers() {
    let cases = [
        (0.0, 0.0, 0.0),
        (0.0, 50.0, 99.0),
        (10.0, 10.0, 10.0),
        (5.0, 35.0, 60.0),
        (33.3, 44.4, 55.5),
    ];
    for (min, target, max) in cases {
        let targets = ProfitTargets {
            minimum_pct: min,
            target_pct: target,
            maximum_pct: max,
        };
        for cost in [0.0, 1.0, 16.9167, 250.0] {
            let tiers = solve_price_tiers(cost, &targets).unwrap();
            assert!(
                tiers.min_price <= tiers.target_price && tiers.target_price <= tiers.max_price,
                "tiers not monotonic for targets {min}/{target}/{max} at cost {cost}: {tiers:?}"
            );
        }
    }
}

#[test]
fn misordered_targets_are_rejected_at_the_solver() {
    // min 30 / target 20 would put the "minimum" tier above the "target"
    // tier; the solver refuses instead of returning inverted prices.
    let targets = ProfitTargets {
        minimum_pct: 30.0,
        target_pct: 20.0,
        maximum_pct: 40.0,
    };
    assert_eq!(
        solve_price_tiers(16.9167, &targets).unwrap_err(),
        DomainError::MisorderedTargets(30.0, 20.0, 40.0)
    );
}

#[test]
fn non_finite_percent_is_rejected() {
    assert_eq!(
        solve_price(10.0, f64::NAN).unwrap_err(),
        DomainError::NonFinitePct
    );
    assert_eq!(
        solve_price(10.0, f64::NEG_INFINITY).unwrap_err(),
        DomainError::NonFinitePct
    );
}

#[test]
fn tiers_fail_when_any_target_is_out_of_range() {
    let targets = ProfitTargets {
        minimum_pct: 20.0,
        target_pct: 30.0,
        maximum_pct: 100.0,
    };
    assert!(matches!(
        solve_price_tiers(10.0, &targets),
        Err(DomainError::ProfitPctTooHigh(_))
    ));
}
