mod common;

use common::{basic_member, vip_member};
use member_order_di::composition::AppContext;
use member_order_di::config::AppConfig;
use member_order_di::domain::MemberId;
use std::sync::Arc;
use std::thread;

// ============================================================================
// 共有シングルトンへの並行アクセス
// ============================================================================

#[test]
fn test_concurrent_joins_are_all_visible() {
    let context = AppContext::new(&AppConfig::default()).unwrap();

    thread::scope(|s| {
        for worker in 0..8u64 {
            let context = &context;
            s.spawn(move || {
                for i in 0..100u64 {
                    context.member_service().join(vip_member(worker * 100 + i));
                }
            });
        }
    });

    for id in 0..800u64 {
        assert!(
            context.member_service().find_member(MemberId::new(id)).is_ok(),
            "member {} missing",
            id
        );
    }
}

// サービスは状態を持たないため、呼び出しの順序に関係なく結果は引数だけで決まる
#[test]
fn test_services_are_stateless_across_callers() {
    let context = Arc::new(AppContext::new(&AppConfig::default()).unwrap());
    context.member_service().join(vip_member(1));
    context.member_service().join(basic_member(2));

    let user_a = {
        let context = Arc::clone(&context);
        thread::spawn(move || {
            context
                .order_service()
                .create_order(MemberId::new(1), "itemA", 10000)
        })
    };
    let user_b = {
        let context = Arc::clone(&context);
        thread::spawn(move || {
            context
                .order_service()
                .create_order(MemberId::new(2), "itemB", 20000)
        })
    };

    let order_a = user_a.join().unwrap().unwrap();
    let order_b = user_b.join().unwrap().unwrap();

    assert_eq!(order_a.item_price(), 10000);
    assert_eq!(order_a.discount_price(), 1000);
    assert_eq!(order_b.item_price(), 20000);
    assert_eq!(order_b.discount_price(), 0);
}

#[test]
fn test_cloned_context_shares_repository() {
    let context = AppContext::new(&AppConfig::default()).unwrap();
    let cloned = context.clone();

    cloned.member_service().join(vip_member(3));

    assert!(Arc::ptr_eq(context.member_repository(), cloned.member_repository()));
    assert!(context.member_service().find_member(MemberId::new(3)).is_ok());
}
