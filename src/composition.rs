//! コンポジションルート
//!
//! 具体的な実装型を参照してよいのはこのモジュールだけ。
//! リポジトリと割引ポリシーをそれぞれ一つだけ生成し、
//! 各サービスのコンストラクタへ明示的に渡す。

use std::sync::Arc;

use crate::adapters::discount::{FixDiscountPolicy, RateDiscountPolicy};
use crate::adapters::memory::MemberRepository as MemoryMemberRepository;
use crate::application::{MemberService, OrderService};
use crate::config::{AppConfig, ConfigError, DiscountPolicyKind, Result};
use crate::ports::{DiscountPolicy, MemberRepository};

/// 組み立て済みのアプリケーション
///
/// 共有される依存（リポジトリ・割引ポリシー）の所有者。
/// サービスはこれらを `Arc` で借りて保持する。
#[derive(Clone)]
pub struct AppContext {
    member_repository: Arc<dyn MemberRepository>,
    discount_policy: Arc<dyn DiscountPolicy>,
    member_service: MemberService,
    order_service: OrderService,
}

impl AppContext {
    /// 設定に従ってアプリケーションを組み立てる
    pub fn new(config: &AppConfig) -> Result<Self> {
        let discount_policy = discount_policy(config)?;
        tracing::info!(
            policy = ?config.discount_policy,
            "composing services"
        );
        Ok(Self::with_policy(discount_policy))
    }

    /// 任意の割引ポリシーでアプリケーションを組み立てる
    ///
    /// リポジトリは新たに一つ生成され、両サービスで共有される。
    pub fn with_policy(discount_policy: Arc<dyn DiscountPolicy>) -> Self {
        let member_repository: Arc<dyn MemberRepository> = Arc::new(MemoryMemberRepository::new());

        let member_service = MemberService::new(Arc::clone(&member_repository));
        let order_service =
            OrderService::new(Arc::clone(&member_repository), Arc::clone(&discount_policy));

        Self {
            member_repository,
            discount_policy,
            member_service,
            order_service,
        }
    }

    pub fn member_service(&self) -> &MemberService {
        &self.member_service
    }

    pub fn order_service(&self) -> &OrderService {
        &self.order_service
    }

    pub fn member_repository(&self) -> &Arc<dyn MemberRepository> {
        &self.member_repository
    }

    pub fn discount_policy(&self) -> &Arc<dyn DiscountPolicy> {
        &self.discount_policy
    }
}

fn discount_policy(config: &AppConfig) -> Result<Arc<dyn DiscountPolicy>> {
    let policy: Arc<dyn DiscountPolicy> = match config.discount_policy {
        DiscountPolicyKind::Fix => Arc::new(FixDiscountPolicy::new(config.fix_discount_amount)),
        DiscountPolicyKind::Rate => Arc::new(
            RateDiscountPolicy::new(config.rate_discount_percent)
                .map_err(|e| ConfigError::RateOutOfRange(e.0))?,
        ),
    };
    Ok(policy)
}
