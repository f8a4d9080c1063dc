#![no_std]

use common_constants::MANTISSA;

multiversx_sc::imports!();

/// Fixed-point helpers shared by every module. All fractions are scaled by
/// MANTISSA and results are floor-truncated; callers that need the edge
/// round up explicitly at the call site.
#[multiversx_sc::module]
pub trait SharedMathModule {
    #[inline]
    fn fmul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b / self.one()
    }

    #[inline]
    fn fdiv(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * &self.one() / b
    }

    #[inline]
    fn one(&self) -> BigUint {
        BigUint::from(MANTISSA)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
