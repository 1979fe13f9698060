//! Selection constraints over a course combination.
//!
//! Two rules decide whether a combination may be offered at all:
//! - **Mutual exclusion**: at most one course per non-null `group_id`.
//! - **Mandatory coverage**: for every mandatory catalog course, the
//!   combination contains that course or another course of its group.
//!
//! A mandatory course without a group can only be covered by selecting it.

use std::collections::HashSet;

use crate::models::{Course, GroupId};

/// Returns `true` if `courses` satisfies both selection rules.
///
/// `mandatory` is the mandatory subset of the catalog. Course identity is
/// by reference, so catalog entries with equal contents stay distinct.
pub fn is_valid(courses: &[&Course], mandatory: &[&Course]) -> bool {
    let mut present_groups: HashSet<GroupId> = HashSet::new();

    for course in courses {
        if let Some(group) = course.group_id {
            if !present_groups.insert(group) {
                return false;
            }
        }
    }

    mandatory.iter().all(|required| {
        courses.iter().any(|c| std::ptr::eq(*c, *required))
            || required
                .group_id
                .is_some_and(|group| present_groups.contains(&group))
    })
}

/// Selection rules precomputed for one catalog.
#[derive(Debug, Clone)]
pub struct SelectionConstraints<'a> {
    mandatory: Vec<&'a Course>,
}

impl<'a> SelectionConstraints<'a> {
    /// Collects the mandatory courses of `catalog`.
    pub fn from_catalog(catalog: &'a [Course]) -> Self {
        Self {
            mandatory: catalog.iter().filter(|c| c.is_mandatory).collect(),
        }
    }

    /// Mandatory courses, in catalog order.
    pub fn mandatory(&self) -> &[&'a Course] {
        &self.mandatory
    }

    /// Whether `courses` may be offered as a result.
    #[inline]
    pub fn permits(&self, courses: &[&Course]) -> bool {
        is_valid(courses, &self.mandatory)
    }
}
