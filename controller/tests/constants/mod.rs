use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const MANTISSA: u64 = 1_000_000_000;

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-abcdef");
pub const IPX_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("IPX-abcdef");
pub const DNR_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("DNR-abcdef");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const DEPOSITOR: TestAddress = TestAddress::new("depositor");
pub const BORROWER: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR: TestAddress = TestAddress::new("liquidator");

pub const CONTROLLER_ADDRESS: TestSCAddress = TestSCAddress::new("controller");
pub const PRICE_ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("price-oracle");

pub const CONTROLLER_PATH: MxscPath = MxscPath::new("output/whirpool-controller.mxsc.json");
pub const PRICE_ORACLE_PATH: MxscPath =
    MxscPath::new("../price-oracle/output/price-oracle.mxsc.json");

/// 1% per epoch once divided by the epochs in a year.
pub const BASE_RATE_PER_YEAR: u64 = 3_650_000_000;
pub const KINK: u64 = 800_000_000; // 80%

pub const LTV_50: u64 = 500_000_000;
pub const LTV_75: u64 = 750_000_000;

/// Highest admissible penalty / protocol fraction.
pub const MAX_FEE: u64 = 25_000_000;

pub const DEFAULT_CAP: u64 = 1_000_000_000_000;
pub const DECIMALS: usize = 9;

pub const INITIAL_IPX_PER_EPOCH: u64 = 10_000_000_000_000;
