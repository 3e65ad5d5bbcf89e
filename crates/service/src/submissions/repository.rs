use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;
use crate::submissions::domain::Submission;

/// Whole-collection persistence for submissions.
/// Implementations read and write the full ordered collection at once.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<Submission>, ServiceError>;
    async fn save(&self, items: &[Submission]) -> Result<(), ServiceError>;
}

#[async_trait]
impl SubmissionRepository for JsonListStore<Submission> {
    async fn load(&self) -> Result<Vec<Submission>, ServiceError> { JsonListStore::load(self).await }
    async fn save(&self, items: &[Submission]) -> Result<(), ServiceError> { JsonListStore::save(self, items).await }
}
