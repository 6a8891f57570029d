//! Overflow-safe arithmetic helpers for lock accounting.
//!
//! Every helper maps overflow to `ContractError::Overflow` so call sites can
//! propagate it with `?` instead of trapping.

use escrow_errors::ContractError;

#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn mul_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// `amount * rate / 10_000`, multiplied before dividing.
#[inline]
pub fn bps(amount: i128, rate: u32) -> Result<i128, ContractError> {
    Ok(mul_i128(amount, rate as i128)? / crate::decay::FEE_DENOMINATOR)
}
