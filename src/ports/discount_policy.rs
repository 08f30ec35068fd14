use crate::domain::Member;

/// 割引ポリシーポート
///
/// 会員と商品価格から割引額を計算する。副作用を持たない純粋な計算。
/// 新しい割引方式はこのトレイトの実装を追加するだけで導入でき、
/// 注文サービス側の変更は不要。
pub trait DiscountPolicy: Send + Sync {
    /// 割引額を返す
    ///
    /// 戻り値は常に `price` 以下。
    fn discount(&self, member: &Member, price: u64) -> u64;
}
