use common_rates::InterestRates;
use common_structs::InterestRateData;
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

pub struct RatesTester;

impl multiversx_sc::contract_base::ContractBase for RatesTester {
    type Api = StaticApi;
}

impl common_math::SharedMathModule for RatesTester {}
impl common_rates::AutoImpl for RatesTester {}

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn curve() -> InterestRateData<StaticApi> {
    InterestRateData {
        base_per_epoch: big(10_000_000),            // 1%
        multiplier_per_epoch: big(100_000_000),     // 10%
        jump_multiplier_per_epoch: big(1_000_000_000), // 100%
        kink: big(800_000_000),                     // 80%
    }
}

#[test]
fn utilization_is_zero_without_borrows() {
    let tester = RatesTester;
    assert_eq!(
        tester.compute_utilization(&big(1_000), &big(0), &big(0)),
        big(0)
    );
}

#[test]
fn utilization_counts_borrows_against_free_cash() {
    let tester = RatesTester;

    // 500 borrowed, 500 cash: half the pool is out.
    assert_eq!(
        tester.compute_utilization(&big(500_000_000), &big(500_000_000), &big(0)),
        big(500_000_000)
    );

    // Reserves shrink the denominator.
    assert_eq!(
        tester.compute_utilization(&big(600_000_000), &big(500_000_000), &big(100_000_000)),
        big(500_000_000)
    );
}

#[test]
fn borrow_rate_below_the_kink_is_linear() {
    let tester = RatesTester;

    // base + utilization * multiplier = 1% + 50% * 10%.
    let rate = tester.compute_borrow_rate(&curve(), &big(500_000_000));
    assert_eq!(rate, big(60_000_000));
}

#[test]
fn borrow_rate_above_the_kink_uses_the_jump_multiplier() {
    let tester = RatesTester;

    // base + kink * multiplier + excess * jump
    //   = 1% + 80% * 10% + 10% * 100%.
    let rate = tester.compute_borrow_rate(&curve(), &big(900_000_000));
    assert_eq!(rate, big(190_000_000));
}

#[test]
fn borrow_rate_at_the_kink_stays_on_the_first_leg() {
    let tester = RatesTester;

    let rate = tester.compute_borrow_rate(&curve(), &big(800_000_000));
    assert_eq!(rate, big(90_000_000));
}

#[test]
fn supply_rate_discounts_the_reserve_factor() {
    let tester = RatesTester;

    // utilization 50%, borrow rate 6%, reserve factor 20%:
    // 50% * (6% * 80%) = 2.4%.
    let rate = tester.compute_supply_rate(&curve(), &big(500_000_000), &big(200_000_000));
    assert_eq!(rate, big(24_000_000));
}
