use spl_math::uint::U256;

/// Multiply-then-divide in one step, widening the intermediate product
/// through `U256` so `a * b` can never overflow before the division.
pub trait MulDiv: Sized {
    /// `self * num / denom`, rounded toward zero.
    fn mul_div_floor(self, num: Self, denom: Self) -> Option<Self>;

    /// `self * num / denom`, rounded away from zero.
    fn mul_div_ceil(self, num: Self, denom: Self) -> Option<Self>;
}

impl MulDiv for u64 {
    fn mul_div_floor(self, num: u64, denom: u64) -> Option<u64> {
        if denom == 0 {
            return None;
        }

        let result = U256::from(self) * U256::from(num) / U256::from(denom);
        fit_u64(result)
    }

    fn mul_div_ceil(self, num: u64, denom: u64) -> Option<u64> {
        if denom == 0 {
            return None;
        }

        let product = U256::from(self) * U256::from(num);
        let result = (product + U256::from(denom - 1)) / U256::from(denom);
        fit_u64(result)
    }
}

fn fit_u64(value: U256) -> Option<u64> {
    if value > U256::from(u64::MAX) {
        None
    } else {
        Some(value.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_floor_basic() {
        // 10 * 3 / 4 = 7.5 -> 7
        assert_eq!(10u64.mul_div_floor(3, 4), Some(7));
        assert_eq!(100u64.mul_div_floor(1, 1), Some(100));
        assert_eq!(0u64.mul_div_floor(1_000, 3), Some(0));
    }

    #[test]
    fn test_mul_div_ceil_basic() {
        // 10 * 3 / 4 = 7.5 -> 8
        assert_eq!(10u64.mul_div_ceil(3, 4), Some(8));
        // Exact division must not round up
        assert_eq!(12u64.mul_div_ceil(3, 4), Some(9));
    }

    #[test]
    fn test_zero_denominator_is_rejected() {
        assert_eq!(10u64.mul_div_floor(3, 0), None);
        assert_eq!(10u64.mul_div_ceil(3, 0), None);
    }

    #[test]
    fn test_wide_intermediate_product() {
        // u64::MAX * u64::MAX overflows u128::MAX / 2 but fits in U256,
        // and dividing back down lands inside u64 again.
        let result = u64::MAX.mul_div_floor(u64::MAX, u64::MAX);
        assert_eq!(result, Some(u64::MAX));

        println!("✅ Wide intermediate product test passed!");
    }

    #[test]
    fn test_result_larger_than_u64_is_rejected() {
        // u64::MAX * 2 / 1 does not fit back into u64
        assert_eq!(u64::MAX.mul_div_floor(2, 1), None);
        assert_eq!(u64::MAX.mul_div_ceil(2, 1), None);
    }
}
