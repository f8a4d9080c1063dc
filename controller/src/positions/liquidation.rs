multiversx_sc::imports!();

use common_errors::*;

use crate::{accrual, cache::MarketCache, oracle, rewards, storage, validation};

/// Insolvency-gated settlement: the liquidator repays part of the
/// borrower's debt and receives collateral shares worth the repaid value
/// plus a penalty, of which the protocol keeps a cut in the collateral
/// market's reserves. Collateral shares move between accounts; the
/// collateral rebase itself is untouched.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Liquidates a borrower's loan in the payment asset against their
    /// collateral in `collateral_asset`. Neither side may be DNR.
    #[payable("*")]
    #[endpoint(liquidate)]
    fn liquidate(&self, collateral_asset: TokenIdentifier, borrower: ManagedAddress) {
        let (loan_asset, payment_amount) = self.call_value().single_fungible_esdt();
        let liquidator = self.blockchain().get_caller();

        require!(!self.is_dnr(&loan_asset), ERROR_DNR_OPERATION_NOT_ALLOWED);

        self.internal_liquidate(
            &liquidator,
            &borrower,
            &collateral_asset,
            &loan_asset,
            &payment_amount,
            false,
        );
    }

    /// Liquidates a DNR loan. The repaid DNR is burned instead of
    /// entering a vault.
    #[payable("*")]
    #[endpoint(liquidateDnr)]
    fn liquidate_dnr(&self, collateral_asset: TokenIdentifier, borrower: ManagedAddress) {
        let (loan_asset, payment_amount) = self.call_value().single_fungible_esdt();
        let liquidator = self.blockchain().get_caller();

        require!(self.is_dnr(&loan_asset), ERROR_INVALID_ASSET);

        self.internal_liquidate(
            &liquidator,
            &borrower,
            &collateral_asset,
            &loan_asset,
            &payment_amount,
            true,
        );
    }

    fn internal_liquidate(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        collateral_asset: &TokenIdentifier,
        loan_asset: &TokenIdentifier,
        payment_amount: &BigUint,
        is_dnr_loan: bool,
    ) {
        require!(liquidator != borrower, ERROR_LIQUIDATOR_IS_BORROWER);
        require!(!self.is_dnr(collateral_asset), ERROR_CAN_NOT_USE_DNR);
        require!(collateral_asset != loan_asset, ERROR_INVALID_ASSET);
        self.require_market_exists(collateral_asset);
        self.require_market_exists(loan_asset);

        require!(
            !self.account(collateral_asset, borrower).is_empty(),
            ERROR_ACCOUNT_COLLATERAL_DOES_NOT_EXIST
        );
        require!(
            !self.account(loan_asset, borrower).is_empty(),
            ERROR_ACCOUNT_LOAN_DOES_NOT_EXIST
        );

        // Both markets must be accrued before judging solvency.
        {
            let mut collateral_cache = MarketCache::new(self, collateral_asset);
            self.accrue(&mut collateral_cache);
        }
        {
            let mut loan_cache = MarketCache::new(self, loan_asset);
            self.accrue(&mut loan_cache);
        }
        require!(
            !self.is_user_solvent(borrower, loan_asset, &BigUint::zero(), &BigUint::zero()),
            ERROR_USER_IS_SOLVENT
        );

        self.init_account(collateral_asset, liquidator);

        // Loan side: cap the repayment at the outstanding debt, refund
        // the rest, shrink the borrower's principal.
        let mut loan_cache = MarketCache::new(self, loan_asset);
        let mut borrower_loan = self.get_account(loan_asset, borrower);

        let debt = loan_cache
            .market
            .loan_rebase
            .to_elastic(&borrower_loan.principal, true);
        let repay_amount = self.get_min(payment_amount.clone(), debt);
        require!(
            repay_amount > BigUint::zero(),
            ERROR_ZERO_LIQUIDATION_AMOUNT
        );

        if payment_amount > &repay_amount {
            self.send().direct_esdt(
                liquidator,
                loan_asset,
                0,
                &(payment_amount - &repay_amount),
            );
        }

        if is_dnr_loan {
            self.dnr_token().burn(&repay_amount);
        } else {
            loan_cache.market.balance_value += &repay_amount;
        }

        let base_repay = loan_cache.market.loan_rebase.to_base(&repay_amount, true);

        let mut borrower_rewards = self.pending_loan_rewards(&borrower_loan, &loan_cache.market);

        let principal_removed = self.get_min(base_repay.clone(), borrower_loan.principal.clone());
        borrower_loan.principal -= &principal_removed;
        self.update_loan_rewards_paid(&mut borrower_loan, &loan_cache.market);
        self.account(loan_asset, borrower).set(&borrower_loan);

        loan_cache.market.loan_rebase.sub_base(&base_repay, false);

        let loan_price = if is_dnr_loan {
            self.one()
        } else {
            self.get_asset_price(loan_asset)
        };
        drop(loan_cache);

        // Collateral side: seize shares worth the repaid value plus the
        // penalty; the protocol's cut of the penalty goes to reserves.
        let collateral_price = self.get_asset_price(collateral_asset);
        let seize = if is_dnr_loan {
            self.fdiv(&repay_amount, &collateral_price)
        } else {
            self.fdiv(&self.fmul(&loan_price, &repay_amount), &collateral_price)
        };

        let liquidation = self.liquidation_params(collateral_asset).get();
        let penalty_amount = self.fmul(&seize, &liquidation.penalty_fee);
        let seize_total = &seize + &penalty_amount;
        let protocol_amount = self.fmul(&penalty_amount, &liquidation.protocol_percentage);
        let liquidator_amount = &seize_total - &protocol_amount;

        let mut collateral_cache = MarketCache::new(self, collateral_asset);
        let mut borrower_collateral = self.get_account(collateral_asset, borrower);

        borrower_rewards +=
            self.pending_collateral_rewards(&borrower_collateral, &collateral_cache.market);

        let seized_shares = collateral_cache
            .market
            .collateral_rebase
            .to_base(&seize_total, true);
        let shares_removed =
            self.get_min(seized_shares, borrower_collateral.shares.clone());
        borrower_collateral.shares -= &shares_removed;
        self.update_collateral_rewards_paid(&mut borrower_collateral, &collateral_cache.market);
        self.account(collateral_asset, borrower)
            .set(&borrower_collateral);

        let mut liquidator_collateral = self.get_account(collateral_asset, liquidator);
        let liquidator_shares = collateral_cache
            .market
            .collateral_rebase
            .to_base(&liquidator_amount, false);
        liquidator_collateral.shares += &liquidator_shares;
        self.update_collateral_rewards_paid(&mut liquidator_collateral, &collateral_cache.market);
        self.account(collateral_asset, liquidator)
            .set(&liquidator_collateral);

        collateral_cache.market.total_reserves += &protocol_amount;

        self.liquidate_event(
            liquidator,
            borrower,
            collateral_asset,
            loan_asset,
            &repay_amount,
            &shares_removed,
        );
        drop(collateral_cache);

        // Rewards forfeited during the seizure are credited back to the
        // borrower.
        self.mint_ipx(borrower, &borrower_rewards);
    }
}
