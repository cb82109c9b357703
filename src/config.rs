use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The environment values gating every remote call. The first two are
/// required; `knowledge_files` is empty when `KNOWLEDGE_FILES` is unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub vector_store_id: String,
    pub knowledge_files: Vec<PathBuf>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing OPENAI_API_KEY or VECTOR_STORE_ID in .env file.")]
    MissingValues,
}

impl Config {
    /// Reads `OPENAI_API_KEY`, `VECTOR_STORE_ID` and the optional
    /// `KNOWLEDGE_FILES` list from the process environment. Callers load the
    /// .env file first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::validate(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("VECTOR_STORE_ID").ok(),
            std::env::var("KNOWLEDGE_FILES").ok(),
        )
    }

    /// The key and identifier must be present and non-empty before any call
    /// is made. `knowledge_files` is a comma-separated path list.
    pub fn validate(
        api_key: Option<String>,
        vector_store_id: Option<String>,
        knowledge_files: Option<String>,
    ) -> Result<Self, ConfigError> {
        match (api_key, vector_store_id) {
            (Some(key), Some(id)) if !key.is_empty() && !id.is_empty() => Ok(Self {
                api_key: key,
                vector_store_id: id,
                knowledge_files: knowledge_files
                    .as_deref()
                    .map(parse_file_list)
                    .unwrap_or_default(),
            }),
            _ => Err(ConfigError::MissingValues),
        }
    }
}

fn parse_file_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_values_accepted() {
        let config = Config::validate(
            Some("sk-test".to_string()),
            Some("vs_1".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.vector_store_id, "vs_1");
        assert!(config.knowledge_files.is_empty());
    }

    #[test]
    fn test_missing_or_empty_values_rejected() {
        assert!(Config::validate(None, Some("vs_1".to_string()), None).is_err());
        assert!(Config::validate(Some("sk-test".to_string()), None, None).is_err());
        assert!(Config::validate(None, None, None).is_err());
        assert!(Config::validate(Some(String::new()), Some("vs_1".to_string()), None).is_err());
        assert!(Config::validate(Some("sk-test".to_string()), Some(String::new()), None).is_err());
    }

    #[test]
    fn test_knowledge_file_list_parsed() {
        let config = Config::validate(
            Some("sk-test".to_string()),
            Some("vs_1".to_string()),
            Some("docs/declaration.docx, docs/bylaws.docx,".to_string()),
        )
        .unwrap();

        assert_eq!(
            config.knowledge_files,
            vec![
                PathBuf::from("docs/declaration.docx"),
                PathBuf::from("docs/bylaws.docx"),
            ]
        );
    }

    #[test]
    fn test_diagnostic_message() {
        let err = Config::validate(None, None, None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing OPENAI_API_KEY or VECTOR_STORE_ID in .env file."
        );
    }
}
