pub mod activity;
mod save;
pub mod types;
pub mod validation;

pub use activity::ActivityLedger;
pub use types::{
    EventId, EventJoin, HotspotId, HotspotPriority, HotspotReport, HotspotSubmission,
    WasteCategory, WasteEntry, WasteEntryId, WasteSubmission,
};
pub(crate) use validation::optional_coordinate;
pub use validation::{Field, ValidationError};
