//! Directory lookup backed by the SQLite student table.

use std::sync::Arc;

use async_trait::async_trait;

use libdesk_core::result::AppResult;
use libdesk_core::traits::DirectoryLookup;
use libdesk_core::types::RollNumber;
use libdesk_database::repositories::StudentRepository;

/// Resolves names with one pooled query per call.
#[derive(Debug, Clone)]
pub struct SqlDirectory {
    repo: Arc<StudentRepository>,
}

impl SqlDirectory {
    /// Creates a directory over the given repository.
    pub fn new(repo: Arc<StudentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DirectoryLookup for SqlDirectory {
    async fn resolve(&self, roll_no: &RollNumber) -> AppResult<Option<String>> {
        self.repo.find_name(roll_no.as_str()).await
    }
}
