use crate::domain::{Member, MemberId, Result};

/// 会員リポジトリポート
///
/// 会員の保存と検索を抽象化する。
/// サービス層はこのトレイトのみに依存し、具体的な保存先を知らない。
pub trait MemberRepository: Send + Sync {
    /// 会員を保存する
    ///
    /// 同じIDの会員が既に存在する場合は上書きする。
    fn save(&self, member: Member);

    /// IDで会員を検索する
    ///
    /// 存在しない場合は `MemberError::NotFound` を返す。
    fn find_by_id(&self, member_id: MemberId) -> Result<Member>;
}
