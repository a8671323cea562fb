//! Catalog entry type.

use serde::{Deserialize, Serialize};

/// One catalog entry. Supplied wholesale by the tools endpoint and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
}

impl Tool {
    /// Create a tool without an icon
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            icon: None,
            category: category.into(),
        }
    }

    /// Attach an icon URL
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether the lower-cased needle occurs in the name or description.
    pub(crate) fn mentions(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower) || self.description.to_lowercase().contains(needle_lower)
    }
}
