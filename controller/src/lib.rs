#![no_std]

multiversx_sc::imports!();

pub mod accrual;
pub mod cache;
pub mod config;
pub mod oracle;
pub mod positions;
pub mod rewards;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::INITIAL_IPX_PER_EPOCH;

/// Whirpool money market: users deposit collateral, borrow against it at
/// a utilization-driven rate, earn IPX on both sides of every market, and
/// are liquidated when their portfolio goes under water. The protocol
/// also issues DNR, a synthetic stable borrowed at a flat admin-set rate.
#[multiversx_sc::contract]
pub trait WhirpoolController:
    storage::StorageModule
    + oracle::OracleModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + validation::ValidationModule
    + config::ConfigModule
    + views::ViewsModule
    + positions::deposit::DepositModule
    + positions::withdraw::WithdrawModule
    + positions::borrow::BorrowModule
    + positions::repay::RepayModule
    + positions::market::MarketEntryModule
    + positions::claim::ClaimModule
    + positions::liquidation::LiquidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    #[init]
    fn init(&self, price_oracle_address: ManagedAddress) {
        self.price_oracle_address().set(&price_oracle_address);
        self.admin().set(&self.blockchain().get_caller());
        self.ipx_per_epoch()
            .set(BigUint::from(INITIAL_IPX_PER_EPOCH));
    }

    #[upgrade]
    fn upgrade(&self) {}
}
