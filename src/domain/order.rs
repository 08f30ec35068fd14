use serde::{Deserialize, Serialize};
use std::fmt;

use super::MemberId;

/// 注文
///
/// `create_order` の呼び出しごとに生成される値オブジェクト。保存はされない。
///
/// 不変条件：`0 <= discount_price <= item_price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    member_id: MemberId,
    item_name: String,
    item_price: u64,
    discount_price: u64,
}

impl Order {
    /// 注文を作成する
    ///
    /// 割引額が商品価格を超える場合は商品価格に切り詰める。
    pub fn new(
        member_id: MemberId,
        item_name: impl Into<String>,
        item_price: u64,
        discount_price: u64,
    ) -> Self {
        Self {
            member_id,
            item_name: item_name.into(),
            item_price,
            discount_price: discount_price.min(item_price),
        }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn item_price(&self) -> u64 {
        self.item_price
    }

    pub fn discount_price(&self) -> u64 {
        self.discount_price
    }

    /// 割引適用後の支払金額
    pub fn total(&self) -> u64 {
        self.item_price - self.discount_price
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{memberId={}, itemName='{}', itemPrice={}, discountPrice={}}}",
            self.member_id, self.item_name, self.item_price, self.discount_price
        )
    }
}
