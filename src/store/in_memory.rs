use crate::member::Member;
use crate::store::error::StoreError::{DuplicateMember, UnknownMember};
use crate::store::{MemberStore, Result};

/// A store holding its members in memory only, in insertion order.
/// `save` has nothing to persist and is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryMemberStore {
    members: Vec<Member>,
}

impl From<Vec<Member>> for InMemoryMemberStore {
    fn from(members: Vec<Member>) -> Self {
        Self { members }
    }
}

impl MemberStore for InMemoryMemberStore {
    fn list(&self) -> &[Member] {
        &self.members
    }

    fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name() == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.name() == name)
    }

    fn add(&mut self, member: Member) -> Result<()> {
        if self.find_by_name(member.name()).is_some() {
            return Err(DuplicateMember(member.name().clone()));
        }

        self.members.push(member);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Member> {
        let position = self
            .members
            .iter()
            .position(|member| member.name() == name)
            .ok_or_else(|| UnknownMember(name.to_owned()))?;

        Ok(self.members.remove(position))
    }

    fn save(&mut self) -> Result<()> {
        Ok(())
    }
}
