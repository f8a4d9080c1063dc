multiversx_sc::imports!();

use common_structs::{Account, Liquidation, MarketData};

#[multiversx_sc::module]
pub trait StorageModule {
    /// Address holding the admin capability. Set at deploy, moved by
    /// `transferAdmin`, never the zero address.
    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    /// Reward token minted to suppliers and borrowers.
    #[storage_mapper("ipx_token")]
    fn ipx_token(&self) -> FungibleTokenMapper<Self::Api>;

    /// Protocol-issued synthetic stable, minted on borrow and burned on
    /// repay.
    #[storage_mapper("dnr_token")]
    fn dnr_token(&self) -> FungibleTokenMapper<Self::Api>;

    #[view(getMarket)]
    #[storage_mapper("market")]
    fn market(&self, asset: &TokenIdentifier) -> SingleValueMapper<MarketData<Self::Api>>;

    /// All market keys in creation order; iterated by global operations.
    #[view(getMarketKeys)]
    #[storage_mapper("market_keys")]
    fn market_keys(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[view(getLiquidationParams)]
    #[storage_mapper("liquidation_params")]
    fn liquidation_params(&self, asset: &TokenIdentifier)
        -> SingleValueMapper<Liquidation<Self::Api>>;

    #[storage_mapper("account")]
    fn account(
        &self,
        asset: &TokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<Account<Self::Api>>;

    /// Markets the user opted into as collateral or borrowed from; the set
    /// the solvency evaluator walks.
    #[view(getMarketsIn)]
    #[storage_mapper("markets_in")]
    fn markets_in(&self, user: &ManagedAddress) -> UnorderedSetMapper<TokenIdentifier>;

    #[view(getTotalAllocationPoints)]
    #[storage_mapper("total_allocation_points")]
    fn total_allocation_points(&self) -> SingleValueMapper<BigUint>;

    /// Protocol-wide IPX emission per epoch, split across markets by
    /// allocation points.
    #[view(getIpxPerEpoch)]
    #[storage_mapper("ipx_per_epoch")]
    fn ipx_per_epoch(&self) -> SingleValueMapper<BigUint>;

    /// Constant borrow rate of the DNR market, set by the admin.
    #[view(getDnrInterestRatePerEpoch)]
    #[storage_mapper("dnr_interest_rate_per_epoch")]
    fn dnr_interest_rate_per_epoch(&self) -> SingleValueMapper<BigUint>;

    #[view(getPriceOracleAddress)]
    #[storage_mapper("price_oracle_address")]
    fn price_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;
}
