// src/domain/app_config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

const DEFAULT_CATEGORIES: &[&str] = &["Work", "Personal", "Hacking", "Dev", "Infra"];
const DEFAULT_TAGS: &[&str] = &["C#", "React", "Security", "Docker", "Neo4j"];

/// Reference vocabulary of categories and tags offered when editing entries.
/// Entries are not validated against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(alias = "Categories", default)]
    pub categories: Vec<String>,

    #[serde(alias = "Tags", default)]
    pub tags: Vec<String>,
}

impl AppConfig {
    /// Vocabulary written on first run
    pub fn with_default_vocabulary() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            tags: DEFAULT_TAGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn add_category(&mut self, name: &str) -> DomainResult<()> {
        add_term(&mut self.categories, name, "category")
    }

    pub fn remove_category(&mut self, name: &str) -> DomainResult<()> {
        remove_term(&mut self.categories, name, "category")
    }

    pub fn add_tag(&mut self, name: &str) -> DomainResult<()> {
        add_term(&mut self.tags, name, "tag")
    }

    pub fn remove_tag(&mut self, name: &str) -> DomainResult<()> {
        remove_term(&mut self.tags, name, "tag")
    }
}

fn add_term(terms: &mut Vec<String>, name: &str, kind: &str) -> DomainResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Vocabulary(format!("{} cannot be empty", kind)));
    }
    if terms.iter().any(|t| t == name) {
        return Err(DomainError::Vocabulary(format!(
            "{} '{}' already exists",
            kind, name
        )));
    }
    terms.push(name.to_string());
    Ok(())
}

fn remove_term(terms: &mut Vec<String>, name: &str, kind: &str) -> DomainResult<()> {
    let name = name.trim();
    let before = terms.len();
    terms.retain(|t| t != name);
    if terms.len() == before {
        return Err(DomainError::Vocabulary(format!("{} '{}' not found", kind, name)));
    }
    Ok(())
}
