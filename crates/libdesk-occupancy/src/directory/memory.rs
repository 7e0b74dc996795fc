//! Fixed in-memory directory.

use std::collections::HashMap;

use async_trait::async_trait;

use libdesk_core::result::AppResult;
use libdesk_core::traits::DirectoryLookup;
use libdesk_core::types::RollNumber;

/// Directory over a map that never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entries: HashMap<String, String>,
}

impl StaticDirectory {
    /// Builds a directory from `(roll_no, name)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl DirectoryLookup for StaticDirectory {
    async fn resolve(&self, roll_no: &RollNumber) -> AppResult<Option<String>> {
        Ok(self.entries.get(roll_no.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve() {
        let directory = StaticDirectory::new([("1", "prachi bhilare")]);
        let one = RollNumber::parse("1").unwrap();
        let ninety_nine = RollNumber::parse("99").unwrap();

        assert_eq!(
            directory.resolve(&one).await.unwrap(),
            Some("prachi bhilare".to_string())
        );
        assert_eq!(directory.resolve(&ninety_nine).await.unwrap(), None);
    }
}
