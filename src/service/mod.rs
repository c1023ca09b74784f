use std::str::FromStr;

use crate::error::Result;
use crate::member::error::MemberError::{AlreadyExists, InvalidData, NotFound, WrongPassword};
use crate::member::{Member, MemberType};
use crate::service::members_by_type::MembersByType;
use crate::store::MemberStore;

pub mod members_by_type;

/// The controller over a [MemberStore]: create, edit, list, authenticate and
/// change passwords of club members.
///
/// It owns a [MembersByType] index, built once at construction and rebuilt
/// wholesale from the store's listing after every mutation. The store mutation
/// and the rebuild are two separate steps; nothing yields between them, so
/// callers never observe the gap.
pub struct MemberService<S: MemberStore> {
    store: S,
    members_by_type: MembersByType,
}

impl<S: MemberStore> MemberService<S> {
    pub fn new(store: S) -> Self {
        let members_by_type = MembersByType::from(store.list().to_vec());
        Self {
            store,
            members_by_type,
        }
    }

    /// Create a member under the trimmed name and add it to the store.
    ///
    /// The name must be non-empty after trimming and not taken yet; the type
    /// must belong to the enumerated set.
    pub fn create(&mut self, name: &str, member_type: &str, password: &str) -> Result<Member> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(InvalidData {
                field: "name".to_owned(),
                value: name.to_owned(),
            }
            .into());
        }
        if self.store.find_by_name(trimmed_name).is_some() {
            return Err(AlreadyExists(trimmed_name.to_owned()).into());
        }

        let member = Member::new(trimmed_name, member_type, password).map_err(|_| InvalidData {
            field: "member type".to_owned(),
            value: member_type.to_owned(),
        })?;
        self.store.add(member.clone())?;
        self.rebuild_type_index();

        debug!("Created member `{}`.", member.name());
        Ok(member)
    }

    /// Rename a member, change its type, or both.
    ///
    /// A new name applies only when non-empty after trimming and different
    /// from the current one; a new type applies only when it belongs to the
    /// enumerated set, and is silently ignored otherwise. The store is saved
    /// and the index rebuilt before returning, even when nothing changed.
    pub fn edit(
        &mut self,
        current_name: &str,
        new_name: Option<&str>,
        new_type: Option<&str>,
    ) -> Result<Member> {
        if self.store.find_by_name(current_name).is_none() {
            return Err(NotFound(current_name.to_owned()).into());
        }

        let mut effective_name = current_name.to_owned();
        if let Some(new_name) = new_name {
            let trimmed_name = new_name.trim();
            if !trimmed_name.is_empty() && trimmed_name != current_name {
                if self.store.find_by_name(trimmed_name).is_some() {
                    return Err(AlreadyExists(trimmed_name.to_owned()).into());
                }

                self.rename_in_store(current_name, trimmed_name)?;
                effective_name = trimmed_name.to_owned();
            }
        }

        if let Some(new_type) = new_type {
            if let Ok(member_type) = MemberType::from_str(new_type) {
                let member = self
                    .store
                    .find_by_name_mut(&effective_name)
                    .ok_or_else(|| NotFound(effective_name.clone()))?;
                member.set_type(member_type);
            }
        }

        self.store.save()?;
        self.rebuild_type_index();

        let member = self
            .store
            .find_by_name(&effective_name)
            .cloned()
            .ok_or_else(|| NotFound(effective_name.clone()))?;
        debug!("Edited member `{current_name}` into {member:?}.");
        Ok(member)
    }

    /// The store's full current listing, in the store's native order.
    pub fn list(&self) -> &[Member] {
        self.store.list()
    }

    /// Non-throwing exact lookup. The mutating operations report an absent
    /// member as an error instead.
    pub fn find(&self, name: &str) -> Option<&Member> {
        self.store.find_by_name(name)
    }

    /// A single stateless credential check. No session or token is issued.
    pub fn authenticate(&self, name: &str, password: &str) -> Result<&Member> {
        let member = self
            .store
            .find_by_name(name)
            .ok_or_else(|| NotFound(name.to_owned()))?;
        if !member.verify_password(password) {
            debug!("Authentication failed for `{name}`.");
            return Err(WrongPassword.into());
        }

        Ok(member)
    }

    /// Swap a member's password after checking the current one, then save
    /// the store.
    pub fn change_password(
        &mut self,
        name: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let member = self
            .store
            .find_by_name_mut(name)
            .ok_or_else(|| NotFound(name.to_owned()))?;
        if !member.change_password(current_password, new_password) {
            return Err(WrongPassword.into());
        }

        self.store.save()?;
        debug!("Changed password of member `{name}`.");
        Ok(())
    }

    /// Pure index read: the members of this type as of the last rebuild.
    /// Empty for a type without members and for unrecognized type values.
    pub fn list_by_type(&self, member_type: &str) -> &[Member] {
        match MemberType::from_str(member_type) {
            Ok(member_type) => self.members_by_type.of_type(member_type),
            Err(_) => &[],
        }
    }

    /// Remove the member, rename it and re-add it under its new name.
    /// If the re-add fails, the original entry is restored before the error
    /// surfaces, so the member is never lost.
    fn rename_in_store(&mut self, current_name: &str, new_name: &str) -> Result<()> {
        let original = self.store.remove(current_name)?;
        let mut renamed = original.clone();
        renamed.rename(new_name);
        if let Err(e) = self.store.add(renamed) {
            error!("Can't re-add member `{current_name}` under the name `{new_name}`, restoring it.\n{e:#?}");
            self.store.add(original)?;
            return Err(e.into());
        }

        Ok(())
    }

    fn rebuild_type_index(&mut self) {
        self.members_by_type = MembersByType::from(self.store.list().to_vec());
    }
}
