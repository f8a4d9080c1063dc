multiversx_sc::imports!();

use common_errors::*;
use common_structs::{Account, MarketData};

use crate::{accrual, cache::MarketCache, oracle, storage};

#[multiversx_sc::module]
pub trait ValidationModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    fn require_admin(&self) {
        require!(
            self.blockchain().get_caller() == self.admin().get(),
            ERROR_ONLY_ADMIN
        );
    }

    fn require_market_exists(&self, asset: &TokenIdentifier) {
        require!(!self.market(asset).is_empty(), ERROR_MARKET_DOES_NOT_EXIST);
    }

    fn require_not_dnr(&self, asset: &TokenIdentifier) {
        require!(!self.is_dnr(asset), ERROR_DNR_OPERATION_NOT_ALLOWED);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_NO_ADDRESS_ZERO);
    }

    fn require_market_up_to_date(&self, market: &MarketData<Self::Api>) {
        require!(
            market.accrued_epoch == self.blockchain().get_block_epoch(),
            ERROR_MARKET_NOT_UP_TO_DATE
        );
    }

    fn get_account(&self, asset: &TokenIdentifier, user: &ManagedAddress) -> Account<Self::Api> {
        let mapper = self.account(asset, user);
        if mapper.is_empty() {
            Account::new()
        } else {
            mapper.get()
        }
    }

    fn init_account(&self, asset: &TokenIdentifier, user: &ManagedAddress) {
        let mapper = self.account(asset, user);
        if mapper.is_empty() {
            mapper.set(Account::new());
        }
    }

    /// Walks the user's entered markets, accruing each one, and compares
    /// LTV-weighted collateral value against debt value. Strict: equality
    /// is insolvent. The deltas apply hypothetical changes on the modified
    /// market before pricing.
    fn is_user_solvent(
        &self,
        user: &ManagedAddress,
        modified_asset: &TokenIdentifier,
        withdraw_value: &BigUint,
        borrow_value: &BigUint,
    ) -> bool {
        let mut collateral_in_usd = BigUint::zero();
        let mut loans_in_usd = BigUint::zero();

        let markets = self.markets_in(user);
        for asset in markets.iter() {
            let mut cache = MarketCache::new(self, &asset);
            self.accrue(&mut cache);

            let (collateral_value, loan_value) = self.account_values_in_usd(
                &asset,
                &cache.market,
                user,
                modified_asset,
                withdraw_value,
                borrow_value,
            );
            collateral_in_usd += collateral_value;
            loans_in_usd += loan_value;
        }

        collateral_in_usd > loans_in_usd
    }

    /// USD value pair (LTV-weighted collateral, debt) for one account in
    /// one market, with the hypothetical deltas applied when the market is
    /// the modified one.
    fn account_values_in_usd(
        &self,
        asset: &TokenIdentifier,
        market: &MarketData<Self::Api>,
        user: &ManagedAddress,
        modified_asset: &TokenIdentifier,
        withdraw_value: &BigUint,
        borrow_value: &BigUint,
    ) -> (BigUint, BigUint) {
        let account = self.get_account(asset, user);
        let mut collateral_balance = market.collateral_rebase.to_elastic(&account.shares, false);
        let mut loan_balance = market.loan_rebase.to_elastic(&account.principal, true);

        if asset == modified_asset {
            collateral_balance -= withdraw_value;
            loan_balance += borrow_value;
        }

        let price = self.get_asset_price(asset);
        let collateral_value = self.fmul(&self.fmul(&collateral_balance, &price), &market.ltv);
        let loan_value = self.fmul(&loan_balance, &price);
        (collateral_value, loan_value)
    }
}
