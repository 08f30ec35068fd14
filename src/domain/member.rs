use serde::{Deserialize, Serialize};

use super::{Grade, MemberId};

/// 会員
///
/// 作成後は不変。フィールドはアクセサ経由でのみ参照できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    grade: Grade,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id,
            name: name.into(),
            grade,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
