use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::submissions::domain::{
    next_id, parse_int_prefix, LeadingInt, Submission, SubmissionPayload, MSG_EMAIL_REQUIRED,
    MSG_FIELDS_REQUIRED, MSG_INDEX_REQUIRED, MSG_INVALID_ID, MSG_NOT_FOUND, MSG_NO_EMAIL_MATCH,
};
use crate::submissions::repository::SubmissionRepository;

/// Application service for form submissions.
///
/// Each operation performs at most one load and one save of the full
/// collection. Nothing is held between calls and no lock spans a
/// load/mutate/save cycle: concurrent writers can overwrite each other.
#[derive(Clone)]
pub struct SubmissionService {
    repo: Arc<dyn SubmissionRepository>,
}

impl SubmissionService {
    pub fn new(repo: Arc<dyn SubmissionRepository>) -> Self { Self { repo } }

    /// Validate, assign `last.id + 1` (or 1), append and persist.
    #[instrument(skip_all)]
    pub async fn create(&self, payload: &SubmissionPayload) -> Result<Submission, ServiceError> {
        let input = payload.validate()?;
        let mut items = self.repo.load().await?;
        let created = Submission::from_input(next_id(&items)?, input);
        items.push(created.clone());
        self.repo.save(&items).await?;
        info!(id = created.id, "submission_created");
        Ok(created)
    }

    /// Positional read. `index` is a zero-based offset into the current
    /// collection order, not an id.
    #[instrument(skip(self))]
    pub async fn read_at(&self, index: Option<&str>) -> Result<Submission, ServiceError> {
        let raw = index.ok_or_else(|| ServiceError::validation(MSG_INDEX_REQUIRED))?;
        let mut items = self.repo.load().await?;
        let position = parse_int_prefix(raw)
            .and_then(LeadingInt::value)
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < items.len())
            .ok_or_else(|| ServiceError::not_found(MSG_NOT_FOUND))?;
        Ok(items.swap_remove(position))
    }

    /// Full replacement of the record with the given id; the id is kept.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, raw_id: &str, payload: &SubmissionPayload) -> Result<Submission, ServiceError> {
        let parsed = parse_int_prefix(raw_id).ok_or_else(|| ServiceError::validation(MSG_FIELDS_REQUIRED))?;
        let input = payload.validate()?;
        let mut items = self.repo.load().await?;
        let (id, position) = find_by_id(&items, parsed)?;
        let updated = Submission::from_input(id, input);
        items[position] = updated.clone();
        self.repo.save(&items).await?;
        info!(id, position, "submission_updated");
        Ok(updated)
    }

    /// Remove the first record carrying `id`. Ids are never reassigned.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<Submission, ServiceError> {
        let parsed = parse_int_prefix(raw_id).ok_or_else(|| ServiceError::validation(MSG_INVALID_ID))?;
        let mut items = self.repo.load().await?;
        let (id, position) = find_by_id(&items, parsed)?;
        let removed = items.remove(position);
        self.repo.save(&items).await?;
        info!(id, position, "submission_deleted");
        Ok(removed)
    }

    /// Exact, case-sensitive email match, in collection order.
    #[instrument(skip(self))]
    pub async fn search_by_email(&self, email: Option<&str>) -> Result<Vec<Submission>, ServiceError> {
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ServiceError::validation(MSG_EMAIL_REQUIRED))?;
        let found: Vec<Submission> = self
            .repo
            .load()
            .await?
            .into_iter()
            .filter(|s| s.email == email)
            .collect();
        if found.is_empty() {
            return Err(ServiceError::not_found(MSG_NO_EMAIL_MATCH));
        }
        Ok(found)
    }
}

/// First position holding `id`. An out-of-range id matches nothing.
fn find_by_id(items: &[Submission], parsed: LeadingInt) -> Result<(i64, usize), ServiceError> {
    parsed
        .value()
        .and_then(|id| items.iter().position(|s| s.id == id).map(|pos| (id, pos)))
        .ok_or_else(|| ServiceError::not_found(MSG_NOT_FOUND))
}
