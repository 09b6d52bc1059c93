//! Core types: Category, Note, ids, validated names, timestamps, content format

mod category;
mod content;
mod id;
mod name;
mod note;
mod timestamp;

pub use category::Category;
pub use content::{ContentFormat, to_plain_text};
pub use id::{CategoryId, NoteId, ParseIdError};
pub use name::{CategoryName, NoteTitle, ParseNameError};
pub use note::{Field, Note, NoteSummary, NoteUpdate};
pub use timestamp::{ParseTimestampError, Timestamp};
