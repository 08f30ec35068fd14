use crate::domain::{Member, MemberId, Result};
use crate::ports::MemberRepository;
use std::sync::Arc;

/// 会員サービス
///
/// 会員の登録と検索をリポジトリへ委譲する。
/// リポジトリは構築時に注入され、自身で具体的な実装を生成することはない。
#[derive(Clone)]
pub struct MemberService {
    member_repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(member_repository: Arc<dyn MemberRepository>) -> Self {
        Self { member_repository }
    }

    /// 会員を登録する
    pub fn join(&self, member: Member) {
        tracing::debug!(member_id = %member.id(), grade = ?member.grade(), "member joined");
        self.member_repository.save(member);
    }

    /// 会員を検索する
    ///
    /// # エラー
    /// - NotFound: 会員が登録されていない
    pub fn find_member(&self, member_id: MemberId) -> Result<Member> {
        self.member_repository.find_by_id(member_id).inspect_err(|e| {
            tracing::warn!("{}", e);
        })
    }

    /// 注入されたリポジトリ（シングルトン共有の確認用）
    pub fn member_repository(&self) -> &Arc<dyn MemberRepository> {
        &self.member_repository
    }
}
