multiversx_sc::imports!();

use common_errors::*;

use crate::{accrual, cache::MarketCache, oracle, rewards, storage, validation};

#[multiversx_sc::module]
pub trait BorrowModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Takes a loan from the asset's market. The market is registered in
    /// the caller's entered set and the caller must be solvent with the
    /// new debt.
    #[endpoint(borrow)]
    fn borrow(&self, asset: TokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();

        self.require_amount_greater_than_zero(&amount);
        self.require_not_dnr(&asset);
        self.require_market_exists(&asset);

        let mut cache = MarketCache::new(self, &asset);
        require!(
            cache.market.balance_value >= amount,
            ERROR_NOT_ENOUGH_CASH_TO_LEND
        );
        self.accrue(&mut cache);

        self.init_account(&asset, &caller);
        self.markets_in(&caller).insert(asset.clone());

        let mut account = self.get_account(&asset, &caller);
        let pending_rewards = self.pending_loan_rewards(&account, &cache.market);

        let principal_added = cache.market.loan_rebase.add_elastic(&amount, true);
        account.principal += &principal_added;
        self.update_loan_rewards_paid(&mut account, &cache.market);
        self.account(&asset, &caller).set(&account);

        cache.market.balance_value -= &amount;

        require!(!cache.market.is_paused, ERROR_MARKET_PAUSED);
        require!(
            cache.market.borrow_cap >= cache.market.collateral_rebase.elastic,
            ERROR_BORROW_CAP_LIMIT_REACHED
        );

        self.borrow_event(&caller, &asset, &amount, &principal_added);
        drop(cache);

        require!(
            self.is_user_solvent(&caller, &asset, &BigUint::zero(), &BigUint::zero()),
            ERROR_BORROW_NOT_ALLOWED
        );

        self.send().direct_esdt(&caller, &asset, 0, &amount);
        self.mint_ipx(&caller, &pending_rewards);
    }

    /// Borrows freshly minted DNR against the caller's collateral. The
    /// DNR market has no cash pool; debt is created by minting.
    #[endpoint(borrowDnr)]
    fn borrow_dnr(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();

        self.require_amount_greater_than_zero(&amount);
        let asset = self.dnr_token().get_token_id();
        self.require_market_exists(&asset);

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);

        self.init_account(&asset, &caller);
        self.markets_in(&caller).insert(asset.clone());

        let mut account = self.get_account(&asset, &caller);
        let pending_rewards = self.pending_loan_rewards(&account, &cache.market);

        let principal_added = cache.market.loan_rebase.add_elastic(&amount, true);
        account.principal += &principal_added;
        self.update_loan_rewards_paid(&mut account, &cache.market);
        self.account(&asset, &caller).set(&account);

        require!(!cache.market.is_paused, ERROR_MARKET_PAUSED);
        require!(
            cache.market.borrow_cap >= cache.market.collateral_rebase.elastic,
            ERROR_BORROW_CAP_LIMIT_REACHED
        );

        self.borrow_event(&caller, &asset, &amount, &principal_added);
        drop(cache);

        require!(
            self.is_user_solvent(&caller, &asset, &BigUint::zero(), &BigUint::zero()),
            ERROR_BORROW_NOT_ALLOWED
        );

        self.dnr_token().mint_and_send(&caller, amount);
        self.mint_ipx(&caller, &pending_rewards);
    }
}
