multiversx_sc::imports!();

use common_structs::MarketData;

use crate::{cache::MarketCache, oracle, storage};

/// Advances market state between epochs: compounds interest on the loan
/// side, routes the reserve slice, grows depositor claims and updates the
/// reward-per-share accumulators.
#[multiversx_sc::module]
pub trait AccrualModule:
    storage::StorageModule
    + oracle::OracleModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Accrues a cached market up to the cache's epoch. Idempotent within
    /// an epoch.
    fn accrue(&self, cache: &mut MarketCache<Self>) {
        if cache.market.accrued_epoch == cache.epoch {
            return;
        }

        let asset = cache.asset.clone();
        self.accrue_market(&asset, &mut cache.market, cache.epoch);

        self.update_market_state_event(
            &asset,
            cache.epoch,
            &cache.market.collateral_rebase.elastic,
            &cache.market.loan_rebase.elastic,
            &cache.market.total_reserves,
        );
    }

    /// Pure accrual step over a market value. Also used to project state
    /// in views without committing.
    fn accrue_market(
        &self,
        asset: &TokenIdentifier,
        market: &mut MarketData<Self::Api>,
        current_epoch: u64,
    ) {
        let delta = current_epoch - market.accrued_epoch;
        if delta == 0 {
            return;
        }

        let rate = BigUint::from(delta) * self.borrow_rate_for_market(asset, market);
        let interest = self.fmul(&rate, &market.loan_rebase.elastic);
        let reserve_slice = self.fmul(&interest, &market.reserve_factor);

        market.loan_rebase.increase_elastic(&interest);
        market
            .collateral_rebase
            .increase_elastic(&(&interest - &reserve_slice));
        market.total_reserves += &reserve_slice;
        market.accrued_epoch = current_epoch;

        self.emit_rewards(market, delta);
    }

    /// Splits the epoch emission between the collateral and loan side and
    /// folds each half into its per-share accumulator. A side with no
    /// receivers drops its half.
    fn emit_rewards(&self, market: &mut MarketData<Self::Api>, delta: u64) {
        let total_allocation_points = self.total_allocation_points().get();
        if market.allocation_points == 0 || total_allocation_points == 0 {
            return;
        }

        let emitted = &market.allocation_points
            * &BigUint::from(delta)
            * &self.ipx_per_epoch().get()
            / &total_allocation_points;
        let collateral_rewards = &emitted / &BigUint::from(2u64);
        // The odd unit goes to the loan side.
        let loan_rewards = &emitted - &collateral_rewards;

        if market.collateral_rebase.base > BigUint::zero() {
            market.accrued_collateral_rewards_per_share +=
                &collateral_rewards * &market.decimals_factor / &market.collateral_rebase.base;
        }
        if market.loan_rebase.base > BigUint::zero() {
            market.accrued_loan_rewards_per_share +=
                &loan_rewards * &market.decimals_factor / &market.loan_rebase.base;
        }
    }

    /// Per-epoch borrow rate: the DNR market carries a constant admin-set
    /// rate, every other market goes through the jump-rate model.
    fn borrow_rate_for_market(
        &self,
        asset: &TokenIdentifier,
        market: &MarketData<Self::Api>,
    ) -> BigUint {
        if self.is_dnr(asset) {
            self.dnr_interest_rate_per_epoch().get()
        } else {
            self.borrow_rate_per_epoch(
                asset,
                &market.balance_value,
                &market.loan_rebase.elastic,
                &market.total_reserves,
            )
        }
    }
}
