#![no_std]

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("market_created")]
    fn market_created_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] ltv: &BigUint,
        #[indexed] allocation_points: &BigUint,
    );

    #[event("new_interest_rate_data")]
    fn new_interest_rate_data_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] base_per_epoch: &BigUint,
        #[indexed] multiplier_per_epoch: &BigUint,
        #[indexed] jump_multiplier_per_epoch: &BigUint,
        #[indexed] kink: &BigUint,
    );

    /// Emitted every time a market is accrued to a new epoch.
    #[event("update_market_state")]
    fn update_market_state_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] epoch: u64,
        #[indexed] collateral_elastic: &BigUint,
        #[indexed] loan_elastic: &BigUint,
        #[indexed] total_reserves: &BigUint,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
    );

    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_asset: &TokenIdentifier,
        #[indexed] loan_asset: &TokenIdentifier,
        #[indexed] repaid: &BigUint,
        #[indexed] seized_shares: &BigUint,
    );

    #[event("enter_market")]
    fn enter_market_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
    );

    #[event("exit_market")]
    fn exit_market_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
    );

    #[event("claim_rewards")]
    fn claim_rewards_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("pause_market")]
    fn pause_market_event(&self, #[indexed] asset: &TokenIdentifier, #[indexed] paused: bool);

    #[event("update_liquidation")]
    fn update_liquidation_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] penalty_fee: &BigUint,
        #[indexed] protocol_percentage: &BigUint,
    );

    #[event("update_reserve_factor")]
    fn update_reserve_factor_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] reserve_factor: &BigUint,
    );

    #[event("update_ltv")]
    fn update_ltv_event(&self, #[indexed] asset: &TokenIdentifier, #[indexed] ltv: &BigUint);

    #[event("update_borrow_cap")]
    fn update_borrow_cap_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] borrow_cap: &BigUint,
    );

    #[event("update_allocation_points")]
    fn update_allocation_points_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] allocation_points: &BigUint,
    );

    #[event("update_ipx_per_epoch")]
    fn update_ipx_per_epoch_event(&self, #[indexed] ipx_per_epoch: &BigUint);

    #[event("update_dnr_interest_rate")]
    fn update_dnr_interest_rate_event(&self, #[indexed] rate_per_epoch: &BigUint);

    #[event("withdraw_reserves")]
    fn withdraw_reserves_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("transfer_admin")]
    fn transfer_admin_event(&self, #[indexed] new_admin: &ManagedAddress);
}
