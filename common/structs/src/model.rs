#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Elastic/base pair translating pool shares into underlying amounts while
/// the underlying side grows with interest.
///
/// Rounding direction is chosen by the caller at every conversion: debt is
/// rounded against the borrower, collateral claims against the depositor.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Rebase<M: ManagedTypeApi> {
    pub base: BigUint<M>,
    pub elastic: BigUint<M>,
}

impl<M: ManagedTypeApi> Rebase<M> {
    pub fn new() -> Self {
        Rebase {
            base: BigUint::zero(),
            elastic: BigUint::zero(),
        }
    }

    /// Converts an underlying amount into shares at the current ratio.
    /// With an empty pool the mapping is one to one.
    pub fn to_base(&self, elastic: &BigUint<M>, round_up: bool) -> BigUint<M> {
        if self.elastic == 0 {
            elastic.clone()
        } else if round_up {
            (elastic * &self.base + &self.elastic - &BigUint::from(1u64)) / &self.elastic
        } else {
            elastic * &self.base / &self.elastic
        }
    }

    /// Converts shares into an underlying amount at the current ratio.
    pub fn to_elastic(&self, base: &BigUint<M>, round_up: bool) -> BigUint<M> {
        if self.base == 0 {
            base.clone()
        } else if round_up {
            (base * &self.elastic + &self.base - &BigUint::from(1u64)) / &self.base
        } else {
            base * &self.elastic / &self.base
        }
    }

    /// Appends `elastic` underlying and derives the proportional share
    /// increment, which is returned.
    pub fn add_elastic(&mut self, elastic: &BigUint<M>, round_up: bool) -> BigUint<M> {
        let base = self.to_base(elastic, round_up);
        self.elastic += elastic;
        self.base += &base;
        base
    }

    /// Removes `base` shares and derives the proportional underlying
    /// amount removed, which is returned.
    pub fn sub_base(&mut self, base: &BigUint<M>, round_up: bool) -> BigUint<M> {
        let elastic = self.to_elastic(base, round_up);
        self.elastic -= &elastic;
        self.base -= base;
        elastic
    }

    /// Grows the underlying side only. Share count is unchanged, so every
    /// share is now worth more underlying.
    pub fn increase_elastic(&mut self, elastic: &BigUint<M>) {
        self.elastic += elastic;
    }

    /// Shrinks the underlying side only.
    pub fn decrease_elastic(&mut self, elastic: &BigUint<M>) {
        self.elastic -= elastic;
    }
}

/// Per-asset market state.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketData<M: ManagedTypeApi> {
    /// Interest accumulated for the protocol, denominated in the underlying.
    pub total_reserves: BigUint<M>,
    /// Epoch at which interest and rewards were last applied.
    pub accrued_epoch: u64,
    pub borrow_cap: BigUint<M>,
    pub collateral_cap: BigUint<M>,
    /// Cash on hand; mirrors the controller's balance of the underlying.
    pub balance_value: BigUint<M>,
    pub is_paused: bool,
    /// Collateral factor applied when this asset backs a loan.
    pub ltv: BigUint<M>,
    /// Portion of accrued interest routed to `total_reserves`.
    pub reserve_factor: BigUint<M>,
    /// Share of the protocol-wide IPX emission assigned to this market.
    pub allocation_points: BigUint<M>,
    /// Cumulative IPX per collateral share, scaled by `decimals_factor`.
    pub accrued_collateral_rewards_per_share: BigUint<M>,
    /// Cumulative IPX per unit of loan principal, scaled by `decimals_factor`.
    pub accrued_loan_rewards_per_share: BigUint<M>,
    pub collateral_rebase: Rebase<M>,
    pub loan_rebase: Rebase<M>,
    /// 10^decimals of the underlying; denominator of the reward accumulators.
    pub decimals_factor: BigUint<M>,
}

/// Per-(asset, user) position.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Account<M: ManagedTypeApi> {
    /// Base-side loan shares.
    pub principal: BigUint<M>,
    /// Base-side collateral shares.
    pub shares: BigUint<M>,
    /// Reward-debt watermark for the collateral side.
    pub collateral_rewards_paid: BigUint<M>,
    /// Reward-debt watermark for the loan side.
    pub loan_rewards_paid: BigUint<M>,
}

impl<M: ManagedTypeApi> Account<M> {
    pub fn new() -> Self {
        Account {
            principal: BigUint::zero(),
            shares: BigUint::zero(),
            collateral_rewards_paid: BigUint::zero(),
            loan_rewards_paid: BigUint::zero(),
        }
    }
}

/// Per-market liquidation parameters.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Liquidation<M: ManagedTypeApi> {
    /// Seized on top of the repaid debt value.
    pub penalty_fee: BigUint<M>,
    /// Protocol's cut of the penalty.
    pub protocol_percentage: BigUint<M>,
}

/// Jump-rate model parameters, stored per epoch.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct InterestRateData<M: ManagedTypeApi> {
    pub base_per_epoch: BigUint<M>,
    pub multiplier_per_epoch: BigUint<M>,
    pub jump_multiplier_per_epoch: BigUint<M>,
    /// Utilization threshold past which the jump multiplier applies.
    pub kink: BigUint<M>,
}

/// Oracle answer for one asset.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub decimals: u8,
}
