multiversx_sc::imports!();

use common_constants::{INITIAL_RESERVE_FACTOR, TWENTY_FIVE_PER_CENT};
use common_errors::*;
use common_structs::{Liquidation, MarketData, Rebase};

use crate::{accrual, cache::MarketCache, oracle, storage, validation};

/// Admin surface: market creation, risk-parameter setters, emission
/// control, reserve withdrawal and the admin capability transfer. Every
/// endpoint here requires the caller to hold the admin capability.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Issues the IPX reward token and takes all roles for it.
    #[payable("EGLD")]
    #[endpoint(registerIpxToken)]
    fn register_ipx_token(&self, token_name: ManagedBuffer, ticker: ManagedBuffer, decimals: usize) {
        self.require_admin();
        let payment_amount = self.call_value().egld_value();
        self.ipx_token().issue_and_set_all_roles(
            payment_amount.clone_value(),
            token_name,
            ticker,
            decimals,
            None,
        );
    }

    /// Issues the DNR synthetic stable and takes all roles for it.
    #[payable("EGLD")]
    #[endpoint(registerDnrToken)]
    fn register_dnr_token(&self, token_name: ManagedBuffer, ticker: ManagedBuffer, decimals: usize) {
        self.require_admin();
        let payment_amount = self.call_value().egld_value();
        self.dnr_token().issue_and_set_all_roles(
            payment_amount.clone_value(),
            token_name,
            ticker,
            decimals,
            None,
        );
    }

    /// Creates the market for an asset. Penalty and protocol fractions
    /// are capped; the reserve factor starts at its initial value.
    #[endpoint(createMarket)]
    fn create_market(
        &self,
        asset: TokenIdentifier,
        borrow_cap: BigUint,
        collateral_cap: BigUint,
        ltv: BigUint,
        allocation_points: BigUint,
        penalty_fee: BigUint,
        protocol_percentage: BigUint,
        decimals: usize,
    ) {
        self.require_admin();
        require!(self.market(&asset).is_empty(), ERROR_MARKET_ALREADY_EXISTS);

        let ceiling = BigUint::from(TWENTY_FIVE_PER_CENT);
        require!(penalty_fee <= ceiling, ERROR_VALUE_TOO_HIGH);
        require!(protocol_percentage <= ceiling, ERROR_VALUE_TOO_HIGH);

        self.market(&asset).set(MarketData {
            total_reserves: BigUint::zero(),
            accrued_epoch: self.blockchain().get_block_epoch(),
            borrow_cap,
            collateral_cap,
            balance_value: BigUint::zero(),
            is_paused: false,
            ltv: ltv.clone(),
            reserve_factor: BigUint::from(INITIAL_RESERVE_FACTOR),
            allocation_points: allocation_points.clone(),
            accrued_collateral_rewards_per_share: BigUint::zero(),
            accrued_loan_rewards_per_share: BigUint::zero(),
            collateral_rebase: Rebase::new(),
            loan_rebase: Rebase::new(),
            decimals_factor: BigUint::from(10u64).pow(decimals as u32),
        });
        self.liquidation_params(&asset).set(Liquidation {
            penalty_fee,
            protocol_percentage,
        });
        self.market_keys().insert(asset.clone());
        self.total_allocation_points()
            .update(|total| *total += &allocation_points);

        self.market_created_event(&asset, &ltv, &allocation_points);
    }

    /// Admits jump-rate model parameters for an asset; per-year inputs
    /// become per-epoch rates. An existing market is accrued first so the
    /// new curve only applies forward.
    #[endpoint(setInterestRateData)]
    fn set_interest_rate_data(
        &self,
        asset: TokenIdentifier,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) {
        self.require_admin();

        if !self.market(&asset).is_empty() {
            let mut cache = MarketCache::new(self, &asset);
            self.accrue(&mut cache);
        }

        let data = self.set_interest_rate_data_internal(
            &asset,
            base_rate_per_year,
            multiplier_per_year,
            jump_multiplier_per_year,
            kink,
        );

        self.new_interest_rate_data_event(
            &asset,
            &data.base_per_epoch,
            &data.multiplier_per_epoch,
            &data.jump_multiplier_per_epoch,
            &data.kink,
        );
    }

    #[endpoint(pauseMarket)]
    fn pause_market(&self, asset: TokenIdentifier) {
        self.require_admin();
        self.require_market_exists(&asset);
        self.market(&asset).update(|market| market.is_paused = true);
        self.pause_market_event(&asset, true);
    }

    #[endpoint(unpauseMarket)]
    fn unpause_market(&self, asset: TokenIdentifier) {
        self.require_admin();
        self.require_market_exists(&asset);
        self.market(&asset).update(|market| market.is_paused = false);
        self.pause_market_event(&asset, false);
    }

    #[endpoint(setBorrowCap)]
    fn set_borrow_cap(&self, asset: TokenIdentifier, borrow_cap: BigUint) {
        self.require_admin();
        self.require_market_exists(&asset);
        self.market(&asset)
            .update(|market| market.borrow_cap = borrow_cap.clone());
        self.update_borrow_cap_event(&asset, &borrow_cap);
    }

    #[endpoint(updateLiquidation)]
    fn update_liquidation(
        &self,
        asset: TokenIdentifier,
        penalty_fee: BigUint,
        protocol_percentage: BigUint,
    ) {
        self.require_admin();
        self.require_market_exists(&asset);

        let ceiling = BigUint::from(TWENTY_FIVE_PER_CENT);
        require!(penalty_fee <= ceiling, ERROR_VALUE_TOO_HIGH);
        require!(protocol_percentage <= ceiling, ERROR_VALUE_TOO_HIGH);

        self.liquidation_params(&asset).set(Liquidation {
            penalty_fee: penalty_fee.clone(),
            protocol_percentage: protocol_percentage.clone(),
        });
        self.update_liquidation_event(&asset, &penalty_fee, &protocol_percentage);
    }

    /// Changes the slice of interest routed to reserves. Interest already
    /// accrued keeps the old factor, so the market is accrued first.
    #[endpoint(updateReserveFactor)]
    fn update_reserve_factor(&self, asset: TokenIdentifier, reserve_factor: BigUint) {
        self.require_admin();
        self.require_market_exists(&asset);
        require!(
            reserve_factor <= BigUint::from(TWENTY_FIVE_PER_CENT),
            ERROR_VALUE_TOO_HIGH
        );

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);
        self.require_market_up_to_date(&cache.market);
        cache.market.reserve_factor = reserve_factor.clone();
        drop(cache);

        self.update_reserve_factor_event(&asset, &reserve_factor);
    }

    #[endpoint(updateLtv)]
    fn update_ltv(&self, asset: TokenIdentifier, ltv: BigUint) {
        self.require_admin();
        self.require_market_exists(&asset);
        self.market(&asset).update(|market| market.ltv = ltv.clone());
        self.update_ltv_event(&asset, &ltv);
    }

    /// Reassigns a market's share of the emission. Every market is
    /// accrued first: the total feeds each market's emission rate.
    #[endpoint(updateAllocationPoints)]
    fn update_allocation_points(&self, asset: TokenIdentifier, allocation_points: BigUint) {
        self.require_admin();
        self.require_market_exists(&asset);

        self.accrue_all_markets();

        let mut cache = MarketCache::new(self, &asset);
        let old_points = cache.market.allocation_points.clone();
        cache.market.allocation_points = allocation_points.clone();
        drop(cache);

        self.total_allocation_points()
            .update(|total| *total = &*total - &old_points + &allocation_points);

        self.update_allocation_points_event(&asset, &allocation_points);
    }

    /// Changes the protocol-wide emission. Every market is accrued first
    /// so past epochs keep the old emission.
    #[endpoint(updateIpxPerEpoch)]
    fn update_ipx_per_epoch(&self, ipx_per_epoch: BigUint) {
        self.require_admin();
        self.accrue_all_markets();
        self.ipx_per_epoch().set(&ipx_per_epoch);
        self.update_ipx_per_epoch_event(&ipx_per_epoch);
    }

    /// Changes the DNR market's constant rate; the market is accrued
    /// first so the new rate only applies forward.
    #[endpoint(updateDnrInterestRatePerEpoch)]
    fn update_dnr_interest_rate_per_epoch(&self, rate_per_epoch: BigUint) {
        self.require_admin();

        let dnr = self.dnr_token().get_token_id();
        if !self.market(&dnr).is_empty() {
            let mut cache = MarketCache::new(self, &dnr);
            self.accrue(&mut cache);
        }

        self.dnr_interest_rate_per_epoch().set(&rate_per_epoch);
        self.update_dnr_interest_rate_event(&rate_per_epoch);
    }

    /// Pays accumulated reserves out to the admin. Both the reserve
    /// accumulator and the market's cash must cover the amount.
    #[endpoint(withdrawReserves)]
    fn withdraw_reserves(&self, asset: TokenIdentifier, amount: BigUint) {
        self.require_admin();
        self.require_market_exists(&asset);
        self.require_amount_greater_than_zero(&amount);

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);
        self.require_market_up_to_date(&cache.market);

        require!(
            cache.market.balance_value >= amount,
            ERROR_NOT_ENOUGH_CASH_TO_WITHDRAW
        );
        require!(
            cache.market.total_reserves >= amount,
            ERROR_NOT_ENOUGH_RESERVES
        );

        cache.market.balance_value -= &amount;
        cache.market.total_reserves -= &amount;
        drop(cache);

        let admin = self.admin().get();
        self.send().direct_esdt(&admin, &asset, 0, &amount);
        self.withdraw_reserves_event(&asset, &amount);
    }

    /// Moves the admin capability to a new holder. The zero address can
    /// never hold it.
    #[endpoint(transferAdmin)]
    fn transfer_admin(&self, new_admin: ManagedAddress) {
        self.require_admin();
        self.require_non_zero_address(&new_admin);
        self.admin().set(&new_admin);
        self.transfer_admin_event(&new_admin);
    }

    fn accrue_all_markets(&self) {
        let keys = self.market_keys();
        for asset in keys.iter() {
            let mut cache = MarketCache::new(self, &asset);
            self.accrue(&mut cache);
        }
    }
}
