multiversx_sc::imports!();

use common_errors::*;

use crate::{accrual, oracle, rewards, storage, validation};

#[multiversx_sc::module]
pub trait MarketEntryModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Opts the caller into using this market's deposit as collateral.
    #[endpoint(enterMarket)]
    fn enter_market(&self, asset: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_market_exists(&asset);

        self.markets_in(&caller).insert(asset.clone());
        self.enter_market_event(&caller, &asset);
    }

    /// Opts the caller out of a market. Requires the loan to be closed
    /// and the remaining portfolio to stay solvent.
    #[endpoint(exitMarket)]
    fn exit_market(&self, asset: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_market_exists(&asset);

        let account = self.get_account(&asset, &caller);
        require!(account.principal == 0, ERROR_MARKET_EXIT_LOAN_OPEN);

        self.markets_in(&caller).swap_remove(&asset);

        if !self.markets_in(&caller).is_empty() {
            require!(
                self.is_user_solvent(&caller, &asset, &BigUint::zero(), &BigUint::zero()),
                ERROR_USER_IS_INSOLVENT
            );
        }

        self.exit_market_event(&caller, &asset);
    }
}
