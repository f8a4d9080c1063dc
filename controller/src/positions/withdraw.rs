multiversx_sc::imports!();

use common_errors::*;

use crate::{accrual, cache::MarketCache, oracle, rewards, storage, validation};

#[multiversx_sc::module]
pub trait WithdrawModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Redeems collateral shares for the underlying. A caller with entered
    /// markets must stay solvent after the redemption.
    #[endpoint(withdraw)]
    fn withdraw(&self, asset: TokenIdentifier, shares_to_remove: BigUint) {
        let caller = self.blockchain().get_caller();

        self.require_amount_greater_than_zero(&shares_to_remove);
        self.require_not_dnr(&asset);
        self.require_market_exists(&asset);

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);

        let mut account = self.get_account(&asset, &caller);
        require!(account.shares >= shares_to_remove, ERROR_NOT_ENOUGH_SHARES);

        let pending_rewards = self.pending_collateral_rewards(&account, &cache.market);

        let underlying = cache
            .market
            .collateral_rebase
            .sub_base(&shares_to_remove, false);
        require!(
            cache.market.balance_value >= underlying,
            ERROR_NOT_ENOUGH_CASH_TO_WITHDRAW
        );
        cache.market.balance_value -= &underlying;

        account.shares -= &shares_to_remove;
        self.update_collateral_rewards_paid(&mut account, &cache.market);
        self.account(&asset, &caller).set(&account);

        require!(!cache.market.is_paused, ERROR_MARKET_PAUSED);

        self.withdraw_event(&caller, &asset, &underlying, &shares_to_remove);
        drop(cache);

        if !self.markets_in(&caller).is_empty() {
            require!(
                self.is_user_solvent(&caller, &asset, &BigUint::zero(), &BigUint::zero()),
                ERROR_WITHDRAW_NOT_ALLOWED
            );
        }

        self.send().direct_esdt(&caller, &asset, 0, &underlying);
        self.mint_ipx(&caller, &pending_rewards);
    }
}
