multiversx_sc::imports!();

use crate::{accrual, cache::MarketCache, oracle, rewards, storage, validation};

#[multiversx_sc::module]
pub trait ClaimModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Claims the caller's IPX rewards in one market, both sides.
    #[endpoint(claimRewards)]
    fn claim_rewards(&self, asset: TokenIdentifier) -> EsdtTokenPayment {
        let caller = self.blockchain().get_caller();
        self.require_market_exists(&asset);

        let rewards = self.collect_market_rewards(&asset, &caller);
        self.claim_rewards_event(&caller, &rewards);
        self.mint_ipx_payment(&caller, rewards)
    }

    /// Claims the caller's IPX rewards across every market.
    #[endpoint(claimAllRewards)]
    fn claim_all_rewards(&self) -> EsdtTokenPayment {
        let caller = self.blockchain().get_caller();
        let mut total = BigUint::zero();

        let keys = self.market_keys();
        for asset in keys.iter() {
            total += self.collect_market_rewards(&asset, &caller);
        }

        self.claim_rewards_event(&caller, &total);
        self.mint_ipx_payment(&caller, total)
    }

    /// Accrues one market and settles both reward watermarks for the
    /// user, returning the pending amount. A user with no account in the
    /// market has nothing to settle.
    fn collect_market_rewards(&self, asset: &TokenIdentifier, user: &ManagedAddress) -> BigUint {
        if self.account(asset, user).is_empty() {
            return BigUint::zero();
        }

        let mut cache = MarketCache::new(self, asset);
        self.accrue(&mut cache);

        let mut account = self.get_account(asset, user);
        let pending = self.pending_collateral_rewards(&account, &cache.market)
            + self.pending_loan_rewards(&account, &cache.market);

        self.update_collateral_rewards_paid(&mut account, &cache.market);
        self.update_loan_rewards_paid(&mut account, &cache.market);
        self.account(asset, user).set(&account);

        pending
    }
}
