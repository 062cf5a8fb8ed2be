use bevy::prelude::*;

use crate::geo::EntryDate;

/// The calendar day stamped on new waste entries and event joins.
/// Starts at the local date; scripts and tests override it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDate(pub EntryDate);

impl Default for SessionDate {
    fn default() -> Self {
        Self(EntryDate::today())
    }
}
