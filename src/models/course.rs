//! Course model.
//!
//! A course is a catalog entry owning one or more weekly time slots. It may
//! belong to a mutual-exclusion group (alternatives such as parallel
//! sections of the same subject), and a group can be marked mandatory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeInterval;

/// Mutual-exclusion group identifier.
pub type GroupId = u32;

/// A course with its weekly time slots.
///
/// Courses are created once when the catalog is loaded and only borrowed
/// afterwards. Identity in selection checks is by reference, not by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Display name, expected to be unique within a catalog.
    pub name: String,
    /// Weekly occurrences.
    pub time_slots: Vec<TimeInterval>,
    /// At most one course per group may be selected. `None` = ungrouped.
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// At least one course of this course's group must be selected.
    #[serde(default)]
    pub is_mandatory: bool,
}

impl Course {
    /// Creates a course with no time slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_slots: Vec::new(),
            group_id: None,
            is_mandatory: false,
        }
    }

    /// Adds a time slot.
    pub fn with_slot(mut self, slot: TimeInterval) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Replaces all time slots.
    pub fn with_slots(mut self, slots: Vec<TimeInterval>) -> Self {
        self.time_slots = slots;
        self
    }

    /// Assigns the course to a mutual-exclusion group.
    pub fn with_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Marks the course (and thereby its group) as mandatory.
    pub fn mandatory(mut self) -> Self {
        self.is_mandatory = true;
        self
    }

    /// Total overlap with `other`, summed over every slot pair.
    ///
    /// Saturates at `u32::MAX`.
    pub fn pairwise_overlap(&self, other: &Course) -> u32 {
        self.time_slots
            .iter()
            .flat_map(|a| other.time_slots.iter().map(move |b| a.overlap_minutes(b)))
            .fold(0, u32::saturating_add)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for (i, slot) in self.time_slots.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{slot}")?;
        }
        Ok(())
    }
}
