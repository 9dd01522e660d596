//! Domain model types for the mood log.
//!
//! These types mirror the JSON export format of the mobile app, so field
//! names serialize in camelCase where the export uses camelCase.

mod entry;
mod tag;

pub use entry::{EntryId, LogEntry, Rating, RatingParseError, MAX_MESSAGE_LEN};
pub use tag::{Tag, TagId, TagRef};
