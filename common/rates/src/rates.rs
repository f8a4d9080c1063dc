#![no_std]

use common_constants::EPOCHS_PER_YEAR;
use common_errors::ERROR_NO_INTEREST_RATE_DATA;
use common_structs::InterestRateData;

multiversx_sc::imports!();

/// Jump-rate interest model. Each market admits per-year parameters which
/// are stored as per-epoch rates; queries derive borrow and supply rates
/// from the market's current utilization.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    #[view(getInterestRateData)]
    #[storage_mapper("interest_rate_data")]
    fn interest_rate_data(
        &self,
        asset: &TokenIdentifier,
    ) -> SingleValueMapper<InterestRateData<Self::Api>>;

    /// Admits per-year parameters for an asset, converting them to
    /// per-epoch rates.
    fn set_interest_rate_data_internal(
        &self,
        asset: &TokenIdentifier,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) -> InterestRateData<Self::Api> {
        let epochs_per_year = BigUint::from(EPOCHS_PER_YEAR);
        let data = InterestRateData {
            base_per_epoch: base_rate_per_year / &epochs_per_year,
            multiplier_per_epoch: multiplier_per_year / &epochs_per_year,
            jump_multiplier_per_epoch: jump_multiplier_per_year / &epochs_per_year,
            kink,
        };
        self.interest_rate_data(asset).set(&data);
        data
    }

    /// Utilization = borrows / (cash + borrows - reserves); zero when
    /// nothing is borrowed.
    fn compute_utilization(
        &self,
        cash: &BigUint,
        borrows: &BigUint,
        reserves: &BigUint,
    ) -> BigUint {
        if borrows == &BigUint::zero() {
            BigUint::zero()
        } else {
            self.fdiv(borrows, &(&(cash + borrows) - reserves))
        }
    }

    /// Kinked borrow-rate curve over a utilization value.
    fn compute_borrow_rate(
        &self,
        data: &InterestRateData<Self::Api>,
        utilization: &BigUint,
    ) -> BigUint {
        if utilization <= &data.kink {
            self.fmul(utilization, &data.multiplier_per_epoch) + &data.base_per_epoch
        } else {
            let excess = utilization - &data.kink;
            self.fmul(&data.kink, &data.multiplier_per_epoch)
                + &data.base_per_epoch
                + self.fmul(&excess, &data.jump_multiplier_per_epoch)
        }
    }

    /// Supply rate = utilization * borrow_rate * (1 - reserve_factor).
    fn compute_supply_rate(
        &self,
        data: &InterestRateData<Self::Api>,
        utilization: &BigUint,
        reserve_factor: &BigUint,
    ) -> BigUint {
        let borrow_rate = self.compute_borrow_rate(data, utilization);
        let net_rate = self.fmul(&borrow_rate, &(self.one() - reserve_factor));
        self.fmul(utilization, &net_rate)
    }

    /// Per-epoch borrow rate for a market. Markets are admitted to the
    /// model before any rate query; a missing entry is unrecoverable.
    fn borrow_rate_per_epoch(
        &self,
        asset: &TokenIdentifier,
        cash: &BigUint,
        borrows: &BigUint,
        reserves: &BigUint,
    ) -> BigUint {
        let mapper = self.interest_rate_data(asset);
        require!(!mapper.is_empty(), ERROR_NO_INTEREST_RATE_DATA);
        let data = mapper.get();
        let utilization = self.compute_utilization(cash, borrows, reserves);
        self.compute_borrow_rate(&data, &utilization)
    }

    /// Per-epoch supply rate for a market.
    fn supply_rate_per_epoch(
        &self,
        asset: &TokenIdentifier,
        cash: &BigUint,
        borrows: &BigUint,
        reserves: &BigUint,
        reserve_factor: &BigUint,
    ) -> BigUint {
        let mapper = self.interest_rate_data(asset);
        require!(!mapper.is_empty(), ERROR_NO_INTEREST_RATE_DATA);
        let data = mapper.get();
        let utilization = self.compute_utilization(cash, borrows, reserves);
        self.compute_supply_rate(&data, &utilization, reserve_factor)
    }
}
