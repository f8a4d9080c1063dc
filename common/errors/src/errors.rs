#![no_std]

pub static ERROR_ONLY_ADMIN: &[u8] = b"Caller is not the admin.";

pub static ERROR_MARKET_DOES_NOT_EXIST: &[u8] = b"Market does not exist for this asset.";

pub static ERROR_MARKET_ALREADY_EXISTS: &[u8] = b"Market already exists for this asset.";

pub static ERROR_MARKET_PAUSED: &[u8] = b"Market is paused.";

pub static ERROR_DEPOSIT_NOT_ALLOWED: &[u8] = b"Deposit is not allowed.";

pub static ERROR_WITHDRAW_NOT_ALLOWED: &[u8] = b"Withdraw would leave the account insolvent.";

pub static ERROR_BORROW_NOT_ALLOWED: &[u8] = b"Borrow would leave the account insolvent.";

pub static ERROR_REPAY_NOT_ALLOWED: &[u8] = b"Repay is not allowed.";

pub static ERROR_NOT_ENOUGH_CASH_TO_WITHDRAW: &[u8] =
    b"Not enough cash in the market to withdraw.";

pub static ERROR_NOT_ENOUGH_CASH_TO_LEND: &[u8] = b"Not enough cash in the market to lend.";

pub static ERROR_BORROW_CAP_LIMIT_REACHED: &[u8] = b"Borrow cap limit reached.";

pub static ERROR_MAX_COLLATERAL_REACHED: &[u8] = b"Maximum collateral reached.";

pub static ERROR_NOT_ENOUGH_SHARES: &[u8] = b"Not enough shares in the account.";

pub static ERROR_NOT_ENOUGH_RESERVES: &[u8] = b"Not enough reserves.";

pub static ERROR_USER_IS_INSOLVENT: &[u8] = b"Account is insolvent.";

pub static ERROR_USER_IS_SOLVENT: &[u8] = b"Account is solvent.";

pub static ERROR_DNR_OPERATION_NOT_ALLOWED: &[u8] = b"Operation not allowed for DNR.";

pub static ERROR_CAN_NOT_USE_DNR: &[u8] = b"DNR can not be used as collateral.";

pub static ERROR_MARKET_EXIT_LOAN_OPEN: &[u8] = b"Can not exit a market with an open loan.";

pub static ERROR_LIQUIDATOR_IS_BORROWER: &[u8] = b"Liquidator can not be the borrower.";

pub static ERROR_ZERO_LIQUIDATION_AMOUNT: &[u8] = b"Liquidation amount is zero.";

pub static ERROR_VALUE_TOO_HIGH: &[u8] = b"Value is too high.";

pub static ERROR_NO_ADDRESS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_ZERO_ORACLE_PRICE: &[u8] = b"Oracle price is zero.";

pub static ERROR_ACCOUNT_COLLATERAL_DOES_NOT_EXIST: &[u8] =
    b"Collateral account does not exist.";

pub static ERROR_ACCOUNT_LOAN_DOES_NOT_EXIST: &[u8] = b"Loan account does not exist.";

pub static ERROR_MARKET_NOT_UP_TO_DATE: &[u8] = b"Market is not accrued to the current epoch.";

pub static ERROR_NO_INTEREST_RATE_DATA: &[u8] = b"Interest rate data not set for this asset.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_NO_PRICE_FEED: &[u8] = b"No price feed for this asset.";
