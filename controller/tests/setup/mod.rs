use crate::{constants::*, proxys::*};

use multiversx_sc::types::{
    BigUint, EsdtLocalRole, EsdtTokenPayment, ManagedAddress, TestAddress,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{
        ExpectError, ReturnsNewManagedAddress, ReturnsResult, ScenarioTxRun, ScenarioTxWhitebox,
        ScenarioWorld, StorageTokenWrapper, TestTokenIdentifier,
    },
};

use whirpool_controller::storage::StorageModule;

pub fn err(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap()
}

// `BigUint::from(u64)` casts through `i64` and panics for values above
// `i64::MAX`, so the `u64::MAX` "repay everything" sentinel used by the
// repay helpers below must go through big-endian bytes instead.
fn biguint_from_u64(value: u64) -> BigUint<StaticApi> {
    BigUint::from_bytes_be(&value.to_be_bytes())
}

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, whirpool_controller::ContractBuilder);
    blockchain.register_contract(PRICE_ORACLE_PATH, price_oracle::ContractBuilder);

    blockchain
}

#[derive(Default, Debug, PartialEq, Eq)]
pub struct MarketSnapshot {
    pub collateral_base: u64,
    pub collateral_elastic: u64,
    pub loan_base: u64,
    pub loan_elastic: u64,
    pub total_reserves: u64,
    pub balance_value: u64,
}

#[derive(Default, Debug, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub principal: u64,
    pub shares: u64,
}

pub struct WhirpoolTestState {
    pub world: ScenarioWorld,
    pub controller: ManagedAddress<StaticApi>,
    pub price_oracle: ManagedAddress<StaticApi>,
}

impl WhirpoolTestState {
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world.current_block().block_epoch(0);

        let price_oracle = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .init()
            .code(PRICE_ORACLE_PATH)
            .new_address(PRICE_ORACLE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let controller = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .init(&price_oracle)
            .code(CONTROLLER_PATH)
            .new_address(CONTROLLER_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&controller)
            .whitebox(whirpool_controller::contract_obj, |sc| {
                sc.ipx_token().set_token_id(IPX_TOKEN.to_token_identifier());
                sc.dnr_token().set_token_id(DNR_TOKEN.to_token_identifier());
            });

        world.set_esdt_local_roles(
            controller.clone(),
            IPX_TOKEN.as_bytes(),
            &[EsdtLocalRole::Mint, EsdtLocalRole::Burn],
        );
        world.set_esdt_local_roles(
            controller.clone(),
            DNR_TOKEN.as_bytes(),
            &[EsdtLocalRole::Mint, EsdtLocalRole::Burn],
        );

        Self {
            world,
            controller,
            price_oracle,
        }
    }

    /// Funds a user account with the given token balances.
    pub fn add_user(&mut self, address: TestAddress, usdc: u64, weth: u64, dnr: u64) {
        self.world
            .account(address)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(usdc))
            .esdt_balance(WETH_TOKEN, BigUint::<StaticApi>::from(weth))
            .esdt_balance(DNR_TOKEN, BigUint::<StaticApi>::from(dnr));
    }

    pub fn advance_epoch(&mut self, epoch: u64) {
        self.world.current_block().block_epoch(epoch);
    }

    pub fn set_price(&mut self, token: TestTokenIdentifier, price: u64, decimals: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_oracle)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(token.to_token_identifier(), BigUint::from(price), decimals)
            .run();
    }

    pub fn set_rate_data(
        &mut self,
        token: TestTokenIdentifier,
        base_per_year: u64,
        multiplier_per_year: u64,
        jump_multiplier_per_year: u64,
        kink: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .set_interest_rate_data(
                token.to_token_identifier(),
                BigUint::from(base_per_year),
                BigUint::from(multiplier_per_year),
                BigUint::from(jump_multiplier_per_year),
                BigUint::from(kink),
            )
            .run();
    }

    /// Creates a market with default caps and fees, admits the default
    /// rate curve and feeds a $1 price.
    pub fn create_market(&mut self, token: TestTokenIdentifier, ltv: u64, allocation_points: u64) {
        self.create_market_with_caps(token, ltv, allocation_points, DEFAULT_CAP, DEFAULT_CAP);
    }

    pub fn create_market_with_caps(
        &mut self,
        token: TestTokenIdentifier,
        ltv: u64,
        allocation_points: u64,
        borrow_cap: u64,
        collateral_cap: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .create_market(
                token.to_token_identifier(),
                BigUint::from(borrow_cap),
                BigUint::from(collateral_cap),
                BigUint::from(ltv),
                BigUint::from(allocation_points),
                BigUint::from(MAX_FEE),
                BigUint::from(MAX_FEE),
                DECIMALS,
            )
            .run();

        self.set_rate_data(token, BASE_RATE_PER_YEAR, 0, 0, KINK);
        self.set_price(token, MANTISSA, 9);
    }

    pub fn deposit(&mut self, user: TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .deposit()
            .payment(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                BigUint::from(amount),
            ))
            .run();
    }

    pub fn deposit_expect_err(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .deposit()
            .payment(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                BigUint::from(amount),
            ))
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn withdraw(&mut self, user: TestAddress, token: TestTokenIdentifier, shares: u64) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .withdraw(token.to_token_identifier(), BigUint::from(shares))
            .run();
    }

    pub fn withdraw_expect_err(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        shares: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .withdraw(token.to_token_identifier(), BigUint::from(shares))
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn borrow(&mut self, user: TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .borrow(token.to_token_identifier(), BigUint::from(amount))
            .run();
    }

    pub fn borrow_expect_err(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .borrow(token.to_token_identifier(), BigUint::from(amount))
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn repay(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        principal_to_repay: u64,
    ) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .repay(biguint_from_u64(principal_to_repay))
            .payment(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                BigUint::from(amount),
            ))
            .run();
    }

    pub fn repay_expect_err(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        principal_to_repay: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .repay(biguint_from_u64(principal_to_repay))
            .payment(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                BigUint::from(amount),
            ))
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn borrow_dnr(&mut self, user: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .borrow_dnr(BigUint::from(amount))
            .run();
    }

    pub fn borrow_dnr_expect_err(&mut self, user: TestAddress, amount: u64, error: &[u8]) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .borrow_dnr(BigUint::from(amount))
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn repay_dnr(&mut self, user: TestAddress, amount: u64, principal_to_repay: u64) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .repay_dnr(biguint_from_u64(principal_to_repay))
            .payment(EsdtTokenPayment::new(
                DNR_TOKEN.to_token_identifier(),
                0,
                BigUint::from(amount),
            ))
            .run();
    }

    pub fn enter_market(&mut self, user: TestAddress, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .enter_market(token.to_token_identifier())
            .run();
    }

    pub fn exit_market(&mut self, user: TestAddress, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .exit_market(token.to_token_identifier())
            .run();
    }

    pub fn exit_market_expect_err(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .exit_market(token.to_token_identifier())
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn claim_rewards(&mut self, user: TestAddress, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .claim_rewards(token.to_token_identifier())
            .run();
    }

    pub fn claim_all_rewards(&mut self, user: TestAddress) {
        self.world
            .tx()
            .from(user)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .claim_all_rewards()
            .run();
    }

    pub fn liquidate(
        &mut self,
        liquidator: TestAddress,
        collateral_token: TestTokenIdentifier,
        loan_token: TestTokenIdentifier,
        payment: u64,
        borrower: TestAddress,
    ) {
        self.world
            .tx()
            .from(liquidator)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .liquidate(
                collateral_token.to_token_identifier(),
                borrower.to_managed_address(),
            )
            .payment(EsdtTokenPayment::new(
                loan_token.to_token_identifier(),
                0,
                BigUint::from(payment),
            ))
            .run();
    }

    pub fn liquidate_expect_err(
        &mut self,
        liquidator: TestAddress,
        collateral_token: TestTokenIdentifier,
        loan_token: TestTokenIdentifier,
        payment: u64,
        borrower: TestAddress,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(liquidator)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .liquidate(
                collateral_token.to_token_identifier(),
                borrower.to_managed_address(),
            )
            .payment(EsdtTokenPayment::new(
                loan_token.to_token_identifier(),
                0,
                BigUint::from(payment),
            ))
            .returns(ExpectError(4, err(error)))
            .run();
    }

    pub fn liquidate_dnr(
        &mut self,
        liquidator: TestAddress,
        collateral_token: TestTokenIdentifier,
        payment: u64,
        borrower: TestAddress,
    ) {
        self.world
            .tx()
            .from(liquidator)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .liquidate_dnr(
                collateral_token.to_token_identifier(),
                borrower.to_managed_address(),
            )
            .payment(EsdtTokenPayment::new(
                DNR_TOKEN.to_token_identifier(),
                0,
                BigUint::from(payment),
            ))
            .run();
    }

    pub fn set_dnr_rate(&mut self, rate_per_epoch: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .update_dnr_interest_rate_per_epoch(BigUint::from(rate_per_epoch))
            .run();
    }

    pub fn update_ipx_per_epoch(&mut self, ipx_per_epoch: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .update_ipx_per_epoch(BigUint::from(ipx_per_epoch))
            .run();
    }

    pub fn pause_market(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .pause_market(token.to_token_identifier())
            .run();
    }

    pub fn borrow_rate_per_epoch(&mut self, token: TestTokenIdentifier) -> u64 {
        let rate = self
            .world
            .query()
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .get_borrow_rate_per_epoch(token.to_token_identifier())
            .returns(ReturnsResult)
            .run();
        rate.to_u64().unwrap()
    }

    pub fn pending_rewards(&mut self, token: TestTokenIdentifier, user: TestAddress) -> u64 {
        let pending = self
            .world
            .query()
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .get_pending_rewards(token.to_token_identifier(), user.to_managed_address())
            .returns(ReturnsResult)
            .run();
        pending.to_u64().unwrap()
    }

    pub fn account_balances(
        &mut self,
        token: TestTokenIdentifier,
        user: TestAddress,
    ) -> (u64, u64) {
        let balances = self
            .world
            .query()
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .get_account_balances(token.to_token_identifier(), user.to_managed_address())
            .returns(ReturnsResult)
            .run();
        let (collateral, debt) = balances.into_tuple();
        (collateral.to_u64().unwrap(), debt.to_u64().unwrap())
    }

    pub fn is_user_solvent(
        &mut self,
        user: TestAddress,
        modified_token: TestTokenIdentifier,
        withdraw_value: u64,
        borrow_value: u64,
    ) -> bool {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_controller::ControllerProxy)
            .is_user_solvent(
                user.to_managed_address(),
                modified_token.to_token_identifier(),
                BigUint::from(withdraw_value),
                BigUint::from(borrow_value),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_snapshot(&mut self, token: TestTokenIdentifier) -> MarketSnapshot {
        let mut snapshot = MarketSnapshot::default();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .whitebox(whirpool_controller::contract_obj, |sc| {
                let market = sc.market(&token.to_token_identifier()).get();
                snapshot = MarketSnapshot {
                    collateral_base: market.collateral_rebase.base.to_u64().unwrap(),
                    collateral_elastic: market.collateral_rebase.elastic.to_u64().unwrap(),
                    loan_base: market.loan_rebase.base.to_u64().unwrap(),
                    loan_elastic: market.loan_rebase.elastic.to_u64().unwrap(),
                    total_reserves: market.total_reserves.to_u64().unwrap(),
                    balance_value: market.balance_value.to_u64().unwrap(),
                };
            });
        snapshot
    }

    pub fn account_snapshot(
        &mut self,
        token: TestTokenIdentifier,
        user: TestAddress,
    ) -> AccountSnapshot {
        let mut snapshot = AccountSnapshot::default();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .whitebox(whirpool_controller::contract_obj, |sc| {
                let mapper = sc.account(&token.to_token_identifier(), &user.to_managed_address());
                if !mapper.is_empty() {
                    let account = mapper.get();
                    snapshot = AccountSnapshot {
                        principal: account.principal.to_u64().unwrap(),
                        shares: account.shares.to_u64().unwrap(),
                    };
                }
            });
        snapshot
    }

    pub fn check_controller_balance(&mut self, token: TestTokenIdentifier, amount: u64) {
        self.world
            .check_account(CONTROLLER_ADDRESS)
            .esdt_balance(token, BigUint::<StaticApi>::from(amount));
    }

    pub fn check_esdt_balance(
        &mut self,
        address: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
    ) {
        self.world
            .check_account(address)
            .esdt_balance(token, BigUint::<StaticApi>::from(amount));
    }
}
