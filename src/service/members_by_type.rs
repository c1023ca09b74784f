use std::collections::HashMap;
use std::ops::Deref;

use crate::member::{Member, MemberType};

/// Members grouped by member type, in listing order within each group.
///
/// Derived from the store's listing, rebuilt wholesale after each mutation
/// and never persisted. It stores copies of the members and can thus take
/// some memory; this may have to be optimized later on.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MembersByType {
    members: HashMap<MemberType, Vec<Member>>,
}

impl Deref for MembersByType {
    type Target = HashMap<MemberType, Vec<Member>>;

    fn deref(&self) -> &Self::Target {
        &self.members
    }
}

impl From<Vec<Member>> for MembersByType {
    fn from(value: Vec<Member>) -> Self {
        let mut members = HashMap::<MemberType, Vec<Member>>::new();
        for member in value {
            members.entry(*member.member_type()).or_default().push(member);
        }

        Self { members }
    }
}

impl MembersByType {
    /// The members holding this type, in the order of the listing the index
    /// was built from. Empty for a type without any member.
    pub fn of_type(&self, member_type: MemberType) -> &[Member] {
        self.members
            .get(&member_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    mod from_vec {
        use std::collections::HashMap;

        use crate::member::tests::{ana, carl, maria};
        use crate::member::{Member, MemberType};
        use crate::service::members_by_type::MembersByType;

        fn bea() -> Member {
            Member::new("Bea", "Student", "bea-pw").unwrap()
        }

        #[test]
        fn should_group_members_by_type() {
            let members = vec![ana(), carl(), bea(), maria()];

            let expected = HashMap::from([
                (MemberType::Student, vec![ana(), bea()]),
                (MemberType::Teacher, vec![carl()]),
                (MemberType::Staff, vec![maria()]),
            ]);

            let members_by_type = MembersByType::from(members);
            assert_eq!(expected, *members_by_type);
        }

        #[test]
        fn should_keep_listing_order_within_each_group() {
            let members = vec![bea(), ana()];

            let members_by_type = MembersByType::from(members);
            assert_eq!(
                vec![bea(), ana()],
                members_by_type.of_type(MemberType::Student).to_vec()
            );
        }

        #[test]
        fn should_build_empty_index_from_empty_listing() {
            let members_by_type = MembersByType::from(Vec::new());
            assert_eq!(MembersByType::default(), members_by_type);
        }
    }

    mod of_type {
        use crate::member::MemberType;
        use crate::member::tests::ana;
        use crate::service::members_by_type::MembersByType;

        #[test]
        fn should_return_empty_slice_for_type_without_members() {
            let members_by_type = MembersByType::from(vec![ana()]);
            assert!(members_by_type.of_type(MemberType::Teacher).is_empty());
        }
    }
}
