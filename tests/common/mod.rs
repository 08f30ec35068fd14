#![allow(dead_code)]

use member_order_di::composition::AppContext;
use member_order_di::domain::{Grade, Member, MemberId};
use member_order_di::ports::DiscountPolicy;
use std::sync::Arc;

pub fn vip_member(id: u64) -> Member {
    Member::new(MemberId::new(id), format!("member{}", id), Grade::Vip)
}

pub fn basic_member(id: u64) -> Member {
    Member::new(MemberId::new(id), format!("member{}", id), Grade::Basic)
}

/// 指定した割引ポリシーで組み立て、会員を登録済みの状態にする
pub fn context_with_members(policy: Arc<dyn DiscountPolicy>, members: &[Member]) -> AppContext {
    let context = AppContext::with_policy(policy);
    for member in members {
        context.member_service().join(member.clone());
    }
    context
}
