#![no_std]

/// Fixed-point scale shared by fractions, rates and normalized prices.
pub const MANTISSA: u64 = 1_000_000_000;

/// Per-year rate inputs are converted to per-epoch rates at admission.
pub const EPOCHS_PER_YEAR: u64 = 365;

/// Reserve factor assigned to every market at creation (20%).
pub const INITIAL_RESERVE_FACTOR: u64 = 200_000_000;

/// IPX emission seeded at deploy time, per epoch across all markets.
pub const INITIAL_IPX_PER_EPOCH: u64 = 10_000_000_000_000;

/// Ceiling enforced on penalty fees, protocol percentages and reserve
/// factor updates.
pub const TWENTY_FIVE_PER_CENT: u64 = 25_000_000;
