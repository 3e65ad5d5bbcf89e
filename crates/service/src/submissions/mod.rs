//! Form submissions: entity, validation, persistence seam and operations.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Submission, SubmissionInput, SubmissionPayload};
pub use repository::SubmissionRepository;
pub use service::SubmissionService;
