use thiserror::Error;

use super::MemberId;

/// 会員の検索エラー
///
/// リポジトリからサービス層を経由して、そのまま呼び出し元まで伝播する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    /// 会員が存在しない
    #[error("Member not found: {0}")]
    NotFound(MemberId),
}

/// ドメイン層の Result型
pub type Result<T> = std::result::Result<T, MemberError>;
