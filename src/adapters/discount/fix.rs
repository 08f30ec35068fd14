use crate::domain::Member;
use crate::ports::discount_policy::DiscountPolicy;

/// VIP会員に適用する既定の定額割引
pub const DEFAULT_FIX_DISCOUNT_AMOUNT: u64 = 1000;

/// 定額割引ポリシー
///
/// VIP会員には価格に関係なく一定額を割り引く（価格を上限とする）。
/// それ以外の会員は割引なし。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixDiscountPolicy {
    amount: u64,
}

impl FixDiscountPolicy {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

impl Default for FixDiscountPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FIX_DISCOUNT_AMOUNT)
    }
}

impl DiscountPolicy for FixDiscountPolicy {
    fn discount(&self, member: &Member, price: u64) -> u64 {
        if member.grade().is_vip() {
            self.amount.min(price)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grade, MemberId};
    use rstest::rstest;

    #[rstest]
    #[case(10000)]
    #[case(20000)]
    #[case(1000)]
    fn test_vip_gets_fixed_amount(#[case] price: u64) {
        let member = Member::new(MemberId::new(1), "memberVIP", Grade::Vip);
        assert_eq!(FixDiscountPolicy::default().discount(&member, price), 1000);
    }

    #[test]
    fn test_basic_gets_no_discount() {
        let member = Member::new(MemberId::new(2), "memberBASIC", Grade::Basic);
        assert_eq!(FixDiscountPolicy::default().discount(&member, 10000), 0);
    }

    #[test]
    fn test_discount_never_exceeds_price() {
        let member = Member::new(MemberId::new(1), "memberVIP", Grade::Vip);
        assert_eq!(FixDiscountPolicy::new(1000).discount(&member, 300), 300);
    }
}
