//! Service layer for form submissions.
//! - `storage` maps a whole collection to and from one JSON file.
//! - `submissions` holds the entity, input validation and the five operations.

pub mod errors;
pub mod storage;
pub mod submissions;
