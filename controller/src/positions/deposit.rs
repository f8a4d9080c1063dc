multiversx_sc::imports!();

use common_errors::*;

use crate::{accrual, cache::MarketCache, oracle, rewards, storage, validation};

#[multiversx_sc::module]
pub trait DepositModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Supplies the payment as collateral to its market. Shares are
    /// derived at the current rebase ratio, rounded against the
    /// depositor, and the caller's pending rewards are minted.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let (asset, amount) = self.call_value().single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        self.require_amount_greater_than_zero(&amount);
        self.require_not_dnr(&asset);
        self.require_market_exists(&asset);

        self.init_account(&asset, &caller);

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);

        let mut account = self.get_account(&asset, &caller);
        let pending_rewards = self.pending_collateral_rewards(&account, &cache.market);

        let shares_added = cache.market.collateral_rebase.add_elastic(&amount, false);
        cache.market.balance_value += &amount;

        account.shares += &shares_added;
        self.update_collateral_rewards_paid(&mut account, &cache.market);
        self.account(&asset, &caller).set(&account);

        require!(!cache.market.is_paused, ERROR_MARKET_PAUSED);
        require!(
            cache.market.collateral_cap >= cache.market.collateral_rebase.elastic,
            ERROR_MAX_COLLATERAL_REACHED
        );

        self.deposit_event(&caller, &asset, &amount, &shares_added);
        drop(cache);

        self.mint_ipx(&caller, &pending_rewards);
    }
}
