use crate::domain::{MemberId, Order, Result};
use crate::ports::{DiscountPolicy, MemberRepository};
use std::sync::Arc;

/// 注文サービス
///
/// 会員の検索と割引ポリシーによる計算を組み合わせて注文を作成する。
/// 依存はすべて抽象（トレイト）として構築時に注入される。
/// 割引方式を差し替えてもこのサービスのコードは変わらない。
#[derive(Clone)]
pub struct OrderService {
    member_repository: Arc<dyn MemberRepository>,
    discount_policy: Arc<dyn DiscountPolicy>,
}

impl OrderService {
    pub fn new(
        member_repository: Arc<dyn MemberRepository>,
        discount_policy: Arc<dyn DiscountPolicy>,
    ) -> Self {
        Self {
            member_repository,
            discount_policy,
        }
    }

    /// 注文を作成する
    ///
    /// 1. 会員を検索（存在しなければ NotFound をそのまま返す）
    /// 2. 割引ポリシーで割引額を計算
    /// 3. 注文を組み立てて返す
    ///
    /// # エラー
    /// - NotFound: 会員が登録されていない
    pub fn create_order(
        &self,
        member_id: MemberId,
        item_name: impl Into<String>,
        item_price: u64,
    ) -> Result<Order> {
        let member = self.member_repository.find_by_id(member_id).inspect_err(|e| {
            tracing::warn!("Order rejected: {}", e);
        })?;

        let discount_price = self.discount_policy.discount(&member, item_price);
        let order = Order::new(member_id, item_name, item_price, discount_price);

        tracing::debug!(%member_id, item_price, discount_price = order.discount_price(), "order created");
        Ok(order)
    }

    /// 注入されたリポジトリ（シングルトン共有の確認用）
    pub fn member_repository(&self) -> &Arc<dyn MemberRepository> {
        &self.member_repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::discount::{FixDiscountPolicy, RateDiscountPolicy};
    use crate::adapters::memory::MemberRepository as MemoryMemberRepository;
    use crate::domain::{Grade, Member, MemberError};

    fn order_service(policy: Arc<dyn DiscountPolicy>) -> OrderService {
        let repository = Arc::new(MemoryMemberRepository::new());
        repository.save(Member::new(MemberId::new(1), "memberA", Grade::Vip));
        repository.save(Member::new(MemberId::new(2), "memberB", Grade::Basic));
        OrderService::new(repository, policy)
    }

    #[test]
    fn test_create_order_with_rate_policy() {
        let service = order_service(Arc::new(RateDiscountPolicy::default()));

        let order = service.create_order(MemberId::new(1), "itemA", 10000).unwrap();

        assert_eq!(order.member_id(), MemberId::new(1));
        assert_eq!(order.item_name(), "itemA");
        assert_eq!(order.item_price(), 10000);
        assert_eq!(order.discount_price(), 1000);
        assert_eq!(order.total(), 9000);
    }

    #[test]
    fn test_create_order_with_fix_policy() {
        let service = order_service(Arc::new(FixDiscountPolicy::default()));

        let order = service.create_order(MemberId::new(1), "itemA", 20000).unwrap();
        assert_eq!(order.discount_price(), 1000);
    }

    #[test]
    fn test_basic_member_pays_full_price() {
        let service = order_service(Arc::new(RateDiscountPolicy::default()));

        let order = service.create_order(MemberId::new(2), "itemA", 10000).unwrap();
        assert_eq!(order.discount_price(), 0);
        assert_eq!(order.total(), 10000);
    }

    // 会員が存在しない場合は NotFound が伝播する
    #[test]
    fn test_create_order_for_unknown_member() {
        let service = order_service(Arc::new(RateDiscountPolicy::default()));

        let result = service.create_order(MemberId::new(999), "itemA", 10000);
        assert_eq!(result, Err(MemberError::NotFound(MemberId::new(999))));
    }
}
