use crate::domain::MemberId;
use crate::ports::member_validator::{MemberValidator as MemberValidatorTrait, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// MemberValidatorのインメモリ実装
///
/// 登録されている間だけ会員を有効とみなす。
pub struct InMemoryMemberValidator {
    valid_members: Mutex<HashSet<MemberId>>,
}

impl InMemoryMemberValidator {
    pub fn new() -> Self {
        Self {
            valid_members: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_members(members: impl IntoIterator<Item = MemberId>) -> Self {
        Self {
            valid_members: Mutex::new(members.into_iter().collect()),
        }
    }

    /// 会員を有効として登録する
    pub fn add_member(&self, member_id: MemberId) {
        self.valid_members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(member_id);
    }

    /// 会員の有効性を取り消す
    pub fn remove_member(&self, member_id: MemberId) {
        self.valid_members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&member_id);
    }
}

impl Default for InMemoryMemberValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberValidatorTrait for InMemoryMemberValidator {
    async fn is_valid_member(&self, member_id: MemberId) -> Result<bool> {
        let members = self
            .valid_members
            .lock()
            .map_err(|_| "member validator lock poisoned")?;
        Ok(members.contains(&member_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_member_is_valid() {
        let validator = InMemoryMemberValidator::with_members([MemberId::new(1)]);

        assert!(validator.is_valid_member(MemberId::new(1)).await.unwrap());
        assert!(!validator.is_valid_member(MemberId::new(2)).await.unwrap());
    }

    #[tokio::test]
    async fn test_removed_member_is_invalid() {
        let validator = InMemoryMemberValidator::new();
        validator.add_member(MemberId::new(7));
        validator.remove_member(MemberId::new(7));

        assert!(!validator.is_valid_member(MemberId::new(7)).await.unwrap());
    }
}
