//! 손익 금액 표시를 위한 Decimal 유틸리티.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal 표시를 위한 확장 트레이트.
pub trait DecimalExt {
    /// 지정된 소수점 자릿수로 반올림합니다 (오사오입, half-to-even).
    fn round_half_even(&self, dp: u32) -> Decimal;

    /// 소수점 `dp` 자리 고정 문자열로 변환합니다 (예: `-2.50`).
    ///
    /// 반올림 결과가 0이면 `-0.00` 대신 `0.00`을 반환합니다.
    fn to_fixed_string(&self, dp: u32) -> String;
}

impl DecimalExt for Decimal {
    fn round_half_even(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
    }

    fn to_fixed_string(&self, dp: u32) -> String {
        let mut rounded = self.round_half_even(dp);
        rounded.rescale(dp);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_string_pads_and_rounds() {
        assert_eq!(dec!(10).to_fixed_string(2), "10.00");
        assert_eq!(dec!(-2.5).to_fixed_string(2), "-2.50");
        assert_eq!(dec!(4.5).to_fixed_string(2), "4.50");
        assert_eq!(dec!(1.005).to_fixed_string(2), "1.00");
        assert_eq!(dec!(1.015).to_fixed_string(2), "1.02");
        assert_eq!(dec!(-3.14159).to_fixed_string(2), "-3.14");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(dec!(-0.001).to_fixed_string(2), "0.00");
        assert_eq!(dec!(-0.004).round_half_even(2), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_fixed_string_has_two_decimals(cents in -10_000_000i64..10_000_000, extra in 0u32..4) {
            let value = Decimal::new(cents, 2 + extra);
            let text = value.to_fixed_string(2);
            let (_, fraction) = text.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
        }
    }
}
