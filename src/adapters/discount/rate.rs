use thiserror::Error;

use crate::domain::Member;
use crate::ports::discount_policy::DiscountPolicy;

/// VIP会員に適用する既定の割引率（%）
pub const DEFAULT_RATE_DISCOUNT_PERCENT: u8 = 10;

/// 割引率が 0〜100 の範囲外
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Discount rate must be between 0 and 100 percent, got {0}")]
pub struct InvalidRate(pub u8);

/// 定率割引ポリシー
///
/// VIP会員には価格の一定割合（小数点以下切り捨て）を割り引く。
/// それ以外の会員は割引なし。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDiscountPolicy {
    percent: u8,
}

impl RateDiscountPolicy {
    pub fn new(percent: u8) -> Result<Self, InvalidRate> {
        if percent > 100 {
            return Err(InvalidRate(percent));
        }
        Ok(Self { percent })
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }
}

impl Default for RateDiscountPolicy {
    fn default() -> Self {
        Self {
            percent: DEFAULT_RATE_DISCOUNT_PERCENT,
        }
    }
}

impl DiscountPolicy for RateDiscountPolicy {
    fn discount(&self, member: &Member, price: u64) -> u64 {
        if !member.grade().is_vip() {
            return 0;
        }
        // percent <= 100 なので結果は price 以下に収まる
        (u128::from(price) * u128::from(self.percent) / 100) as u64
    }
}
