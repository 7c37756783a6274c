use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Fields shared by every aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Business code (room number, confirmation number, "PRP-001", ...)
    pub code: String,
    /// Name shown in lists and pickers
    pub description: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Rebuild from storage with existing metadata
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
        }
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment.filter(|c| !c.trim().is_empty());
    }

    /// Shared validation: a record needs a name
    pub fn validate_base(&self, element_name: &str) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err(format!("{}: name must not be empty", element_name));
        }
        Ok(())
    }
}
