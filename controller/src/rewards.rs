multiversx_sc::imports!();

use common_structs::{Account, MarketData};

use crate::storage;

/// Reward-debt bookkeeping. Each account carries a watermark per side;
/// the pending amount is the accumulator value of the current position
/// minus the watermark, and watermarks are always recomputed from the
/// post-mutation position.
#[multiversx_sc::module]
pub trait RewardsModule: storage::StorageModule + common_math::SharedMathModule {
    fn pending_collateral_rewards(
        &self,
        account: &Account<Self::Api>,
        market: &MarketData<Self::Api>,
    ) -> BigUint {
        if account.shares == 0 {
            return BigUint::zero();
        }
        &account.shares * &market.accrued_collateral_rewards_per_share / &market.decimals_factor
            - &account.collateral_rewards_paid
    }

    fn pending_loan_rewards(
        &self,
        account: &Account<Self::Api>,
        market: &MarketData<Self::Api>,
    ) -> BigUint {
        if account.principal == 0 {
            return BigUint::zero();
        }
        &account.principal * &market.accrued_loan_rewards_per_share / &market.decimals_factor
            - &account.loan_rewards_paid
    }

    fn update_collateral_rewards_paid(
        &self,
        account: &mut Account<Self::Api>,
        market: &MarketData<Self::Api>,
    ) {
        account.collateral_rewards_paid =
            &account.shares * &market.accrued_collateral_rewards_per_share
                / &market.decimals_factor;
    }

    fn update_loan_rewards_paid(
        &self,
        account: &mut Account<Self::Api>,
        market: &MarketData<Self::Api>,
    ) {
        account.loan_rewards_paid =
            &account.principal * &market.accrued_loan_rewards_per_share / &market.decimals_factor;
    }

    fn mint_ipx(&self, to: &ManagedAddress, amount: &BigUint) {
        if amount > &BigUint::zero() {
            self.ipx_token().mint_and_send(to, amount.clone());
        }
    }

    /// Mints and sends the amount, returning the payment; a zero claim
    /// yields an empty payment without touching the token.
    fn mint_ipx_payment(&self, to: &ManagedAddress, amount: BigUint) -> EsdtTokenPayment {
        if amount == 0 {
            EsdtTokenPayment::new(self.ipx_token().get_token_id(), 0, BigUint::zero())
        } else {
            self.ipx_token().mint_and_send(to, amount)
        }
    }
}
