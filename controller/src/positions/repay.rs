multiversx_sc::imports!();

use common_errors::*;
use common_structs::MarketData;

use crate::{accrual, cache::MarketCache, oracle, rewards, storage, validation};

#[multiversx_sc::module]
pub trait RepayModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Pays a loan down. The repaid principal is capped both by the
    /// payment and by `principal_to_repay`; any excess payment is
    /// returned to the caller.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, principal_to_repay: BigUint) {
        let (asset, amount) = self.call_value().single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        self.require_amount_greater_than_zero(&amount);
        self.require_not_dnr(&asset);
        self.require_market_exists(&asset);

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);

        let mut account = self.get_account(&asset, &caller);
        let pending_rewards = self.pending_loan_rewards(&account, &cache.market);

        let safe_principal =
            self.settle_principal(&cache.market, &account.principal, &amount, &principal_to_repay);
        let repay_amount = cache.market.loan_rebase.to_elastic(&safe_principal, true);

        if amount > repay_amount {
            self.send()
                .direct_esdt(&caller, &asset, 0, &(&amount - &repay_amount));
        }

        cache.market.balance_value += &repay_amount;
        cache.market.loan_rebase.sub_base(&safe_principal, false);

        account.principal -= &safe_principal;
        self.update_loan_rewards_paid(&mut account, &cache.market);
        self.account(&asset, &caller).set(&account);

        require!(!cache.market.is_paused, ERROR_MARKET_PAUSED);

        self.repay_event(&caller, &asset, &repay_amount, &safe_principal);
        drop(cache);

        self.mint_ipx(&caller, &pending_rewards);
    }

    /// Pays DNR debt down. Repaid DNR is burned; the market keeps no
    /// cash pool.
    #[payable("*")]
    #[endpoint(repayDnr)]
    fn repay_dnr(&self, principal_to_repay: BigUint) {
        let (asset, amount) = self.call_value().single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        self.require_amount_greater_than_zero(&amount);
        require!(self.is_dnr(&asset), ERROR_INVALID_ASSET);

        let mut cache = MarketCache::new(self, &asset);
        self.accrue(&mut cache);

        let mut account = self.get_account(&asset, &caller);
        let pending_rewards = self.pending_loan_rewards(&account, &cache.market);

        let safe_principal =
            self.settle_principal(&cache.market, &account.principal, &amount, &principal_to_repay);
        let repay_amount = cache.market.loan_rebase.to_elastic(&safe_principal, true);

        if amount > repay_amount {
            self.send()
                .direct_esdt(&caller, &asset, 0, &(&amount - &repay_amount));
        }

        self.dnr_token().burn(&repay_amount);
        cache.market.loan_rebase.sub_base(&safe_principal, false);

        account.principal -= &safe_principal;
        self.update_loan_rewards_paid(&mut account, &cache.market);
        self.account(&asset, &caller).set(&account);

        require!(!cache.market.is_paused, ERROR_MARKET_PAUSED);

        self.repay_event(&caller, &asset, &repay_amount, &safe_principal);
        drop(cache);

        self.mint_ipx(&caller, &pending_rewards);
    }

    /// Principal actually settled by a payment: the payment's base value,
    /// capped by the outstanding principal and by the caller's requested
    /// principal.
    fn settle_principal(
        &self,
        market: &MarketData<Self::Api>,
        principal: &BigUint,
        payment_amount: &BigUint,
        principal_to_repay: &BigUint,
    ) -> BigUint {
        let payment_principal = market.loan_rebase.to_base(payment_amount, false);
        let capped = if payment_principal > *principal {
            principal.clone()
        } else {
            payment_principal
        };
        self.get_min(capped, principal_to_repay.clone())
    }
}
