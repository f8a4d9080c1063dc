multiversx_sc::imports!();

use common_structs::MarketData;

use crate::{accrual, oracle, rewards, storage, validation};

/// Read-only projections for off-chain callers. Markets are accrued in
/// memory to the current epoch without committing.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// (collateral, debt) of a user in one market, in underlying units,
    /// projected to the current epoch.
    #[view(getAccountBalances)]
    fn get_account_balances(
        &self,
        asset: TokenIdentifier,
        user: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_market_exists(&asset);
        let market = self.projected_market(&asset);
        let account = self.get_account(&asset, &user);
        (
            market.collateral_rebase.to_elastic(&account.shares, false),
            market.loan_rebase.to_elastic(&account.principal, true),
        )
            .into()
    }

    #[view(getBorrowRatePerEpoch)]
    fn get_borrow_rate_per_epoch(&self, asset: TokenIdentifier) -> BigUint {
        self.require_market_exists(&asset);
        let market = self.market(&asset).get();
        self.borrow_rate_for_market(&asset, &market)
    }

    #[view(getSupplyRatePerEpoch)]
    fn get_supply_rate_per_epoch(&self, asset: TokenIdentifier) -> BigUint {
        self.require_market_exists(&asset);
        let market = self.market(&asset).get();
        self.supply_rate_per_epoch(
            &asset,
            &market.balance_value,
            &market.loan_rebase.elastic,
            &market.total_reserves,
            &market.reserve_factor,
        )
    }

    /// IPX claimable by a user in one market, projected to the current
    /// epoch.
    #[view(getPendingRewards)]
    fn get_pending_rewards(&self, asset: TokenIdentifier, user: ManagedAddress) -> BigUint {
        if self.account(&asset, &user).is_empty() {
            return BigUint::zero();
        }
        let market = self.projected_market(&asset);
        let account = self.get_account(&asset, &user);
        self.pending_collateral_rewards(&account, &market)
            + self.pending_loan_rewards(&account, &market)
    }

    /// Hypothetical solvency: whether the user stays solvent after
    /// withdrawing and borrowing the given values on the modified market.
    #[view(isUserSolvent)]
    fn is_user_solvent_view(
        &self,
        user: ManagedAddress,
        modified_asset: TokenIdentifier,
        withdraw_value: BigUint,
        borrow_value: BigUint,
    ) -> bool {
        let mut collateral_in_usd = BigUint::zero();
        let mut loans_in_usd = BigUint::zero();

        let markets = self.markets_in(&user);
        for asset in markets.iter() {
            let market = self.projected_market(&asset);
            let (collateral_value, loan_value) = self.account_values_in_usd(
                &asset,
                &market,
                &user,
                &modified_asset,
                &withdraw_value,
                &borrow_value,
            );
            collateral_in_usd += collateral_value;
            loans_in_usd += loan_value;
        }

        collateral_in_usd > loans_in_usd
    }

    fn projected_market(&self, asset: &TokenIdentifier) -> MarketData<Self::Api> {
        let mut market = self.market(asset).get();
        self.accrue_market(asset, &mut market, self.blockchain().get_block_epoch());
        market
    }
}
