//! Storage abstractions for service layer
//!
//! Contains the file-backed list store used as the submission database.

pub mod json_list_store;
