use crate::err::VaultError;
use crate::libraries::MulDiv;
use anchor_lang::prelude::*;

pub const REBALANCE_FEE: u64 = 1_000_000; // 0.1%
pub const FEE_PRECISION: u64 = 1_000_000_000;

/// Fee charged on the vault balance when funds move to a new protocol.
pub fn get_rebalance_fee_amount(amount: u64) -> Result<u64> {
    get_fee_amount(amount, REBALANCE_FEE)
}

pub fn get_fee_amount(x: u64, percent: u64) -> Result<u64> {
    x.mul_div_floor(percent, FEE_PRECISION)
        .ok_or_else(|| error!(VaultError::MathOverflow))
}
