use crate::domain::{Member, MemberError, MemberId, Result};
use crate::ports::member_repository::MemberRepository as MemberRepositoryTrait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// MemberRepositoryのインメモリ実装
///
/// 複数のサービスから共有される前提のため、内部のマップは `RwLock` で保護する。
/// 書き込みは直列化され、読み込みは並行に行える。
#[derive(Debug, Default)]
pub struct MemberRepository {
    members: RwLock<HashMap<MemberId, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されている会員数
    pub fn len(&self) -> usize {
        self.members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemberRepositoryTrait for MemberRepository {
    fn save(&self, member: Member) {
        tracing::debug!(member_id = %member.id(), "saving member");
        self.members
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(member.id(), member);
    }

    fn find_by_id(&self, member_id: MemberId) -> Result<Member> {
        self.members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&member_id)
            .cloned()
            .ok_or(MemberError::NotFound(member_id))
    }
}
