use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::member::error::UnknownMemberType;
use crate::member::password::HashedPassword;

pub mod error;
pub mod password;

/// The fixed set of member types a club member can hold.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberType {
    Student,
    Teacher,
    Staff,
}

impl MemberType {
    pub const ALL: [MemberType; 3] =
        [MemberType::Student, MemberType::Teacher, MemberType::Staff];
}

impl FromStr for MemberType {
    type Err = UnknownMemberType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Student" => Ok(MemberType::Student),
            "Teacher" => Ok(MemberType::Teacher),
            "Staff" => Ok(MemberType::Staff),
            _ => Err(UnknownMemberType(value.to_owned())),
        }
    }
}

impl Display for MemberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MemberType::Student => "Student",
            MemberType::Teacher => "Teacher",
            MemberType::Staff => "Staff",
        };
        write!(f, "{name}")
    }
}

/// A club member, identified by its unique name.
/// Name uniqueness is enforced by the service, not by the entity.
#[derive(Getters, PartialEq, Eq, Clone)]
pub struct Member {
    name: String,
    member_type: MemberType,
    password: HashedPassword,
}

impl Member {
    /// Build a member from raw input. The type is validated against the
    /// enumerated set; the password is hashed right away.
    pub fn new(name: &str, member_type: &str, password: &str) -> Result<Self, UnknownMemberType> {
        let member_type = MemberType::from_str(member_type)?;
        Ok(Self {
            name: name.trim().to_owned(),
            member_type,
            password: HashedPassword::new(password),
        })
    }

    pub(crate) fn from_parts(
        name: String,
        member_type: MemberType,
        password: HashedPassword,
    ) -> Self {
        Self {
            name,
            member_type,
            password,
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password.verify(password)
    }

    /// Swap the password for a new one if the current one matches.
    /// Returns whether the swap happened.
    pub fn change_password(&mut self, current_password: &str, new_password: &str) -> bool {
        if !self.password.verify(current_password) {
            return false;
        }

        self.password = HashedPassword::new(new_password);
        true
    }

    pub fn rename(&mut self, new_name: &str) {
        self.name = new_name.trim().to_owned();
    }

    pub fn set_type(&mut self, member_type: MemberType) {
        self.member_type = member_type;
    }
}

impl Debug for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Member {{name={}, type={}, password=MASKED}}",
            self.name, self.member_type
        )
    }
}

#[cfg(test)]
pub mod tests {
    use std::str::FromStr;

    use parameterized::ide;
    use parameterized::parameterized;

    use crate::member::error::UnknownMemberType;
    use crate::member::{Member, MemberType};

    ide!();

    pub fn ana() -> Member {
        Member::new("Ana", "Student", "ana-pw").unwrap()
    }

    pub fn carl() -> Member {
        Member::new("Carl", "Teacher", "carl-pw").unwrap()
    }

    pub fn maria() -> Member {
        Member::new("Maria", "Staff", "maria-pw").unwrap()
    }

    #[parameterized(
        value = {"Student", "Teacher", "Staff"},
        expected_type = {MemberType::Student, MemberType::Teacher, MemberType::Staff}
    )]
    fn should_parse_member_type(value: &str, expected_type: MemberType) {
        assert_eq!(Ok(expected_type), MemberType::from_str(value));
    }

    #[test]
    fn should_parse_back_every_displayed_member_type() {
        for member_type in MemberType::ALL {
            assert_eq!(
                Ok(member_type),
                MemberType::from_str(&member_type.to_string())
            );
        }
    }

    #[parameterized(
        value = {"NotARealType", "student", "STAFF", ""}
    )]
    fn should_not_parse_unknown_member_type(value: &str) {
        assert_eq!(
            Err(UnknownMemberType(value.to_owned())),
            MemberType::from_str(value)
        );
    }

    // region new
    #[test]
    fn should_create_member_with_trimmed_name() {
        let member = Member::new("  Ana  ", "Student", "pw").unwrap();
        assert_eq!("Ana", member.name());
        assert_eq!(&MemberType::Student, member.member_type());
        assert!(member.verify_password("pw"));
    }

    #[test]
    fn should_not_create_member_with_unknown_type() {
        let result = Member::new("Bob", "NotARealType", "pw");
        assert_eq!(Err(UnknownMemberType("NotARealType".to_owned())), result);
    }
    // endregion

    // region change_password
    #[test]
    fn should_change_password_when_current_matches() {
        let mut member = ana();
        assert!(member.change_password("ana-pw", "new-pw"));
        assert!(member.verify_password("new-pw"));
        assert!(!member.verify_password("ana-pw"));
    }

    #[test]
    fn should_not_change_password_when_current_doesnt_match() {
        let mut member = ana();
        assert!(!member.change_password("wrong", "new-pw"));
        assert!(member.verify_password("ana-pw"));
    }
    // endregion

    #[test]
    fn should_rename_with_trimmed_name() {
        let mut member = ana();
        member.rename(" David ");
        assert_eq!("David", member.name());
    }

    #[test]
    fn should_set_type() {
        let mut member = ana();
        member.set_type(MemberType::Staff);
        assert_eq!(&MemberType::Staff, member.member_type());
    }

    #[test]
    fn should_mask_password_in_debug_output() {
        let member = ana();
        assert_eq!(
            "Member {name=Ana, type=Student, password=MASKED}",
            format!("{member:?}")
        );
    }
}
