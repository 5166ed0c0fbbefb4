use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::sort::{SortDirection, SortSpec};

/// Initial sort applied when a pipeline is created or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSort {
    /// Field to sort by.
    pub field: String,
    /// Direction to sort in.
    #[serde(default)]
    pub direction: SortDirection,
}

/// Caller-supplied pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Whether the search query filters records.
    pub searchable: bool,
    /// Sort applied before the user picks one.
    pub default_sort: Option<DefaultSort>,
    /// Records per page.
    pub page_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            default_sort: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Error)]
/// Configuration errors. The pipeline itself never fails; these only surface when a caller asks
/// for validation.
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid pipeline config json: {0}")]
    Parse(#[from] serde_json::Error),
    /// `pageSize` must be positive.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// `defaultSort.field` must name a field.
    #[error("default sort field must not be empty")]
    EmptySortField,
}

impl PipelineConfig {
    /// Parses a JSON config such as `{"searchable":true,"pageSize":25}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a valid config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the default sort.
    pub fn with_default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some(DefaultSort {
            field: field.into(),
            direction,
        });
        self
    }

    /// Enables or disables search filtering.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Checks the config without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] or [`ConfigError::EmptySortField`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self
            .default_sort
            .as_ref()
            .is_some_and(|sort| sort.field.trim().is_empty())
        {
            return Err(ConfigError::EmptySortField);
        }
        Ok(())
    }

    /// Returns a copy with invalid values replaced by their fallbacks.
    pub fn normalized(&self) -> Self {
        Self {
            searchable: self.searchable,
            default_sort: self
                .default_sort
                .clone()
                .filter(|sort| !sort.field.trim().is_empty()),
            page_size: if self.page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                self.page_size
            },
        }
    }

    /// Sort the pipeline starts from and returns to on reset.
    pub fn initial_sort(&self) -> SortSpec {
        match &self.default_sort {
            Some(sort) if !sort.field.trim().is_empty() => {
                SortSpec::by(sort.field.clone(), sort.direction)
            }
            _ => SortSpec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PipelineConfig::from_json("{}").expect("parse");
        assert_eq!(config, PipelineConfig::default());
        assert!(config.searchable);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn camel_case_keys_parse() {
        let config = PipelineConfig::from_json(
            r#"{"searchable":false,"pageSize":25,"defaultSort":{"field":"name","direction":"desc"}}"#,
        )
        .expect("parse");
        assert!(!config.searchable);
        assert_eq!(config.page_size, 25);
        assert_eq!(
            config.initial_sort(),
            SortSpec::by("name", SortDirection::Desc)
        );
    }

    #[test]
    fn default_sort_direction_is_ascending() {
        let config =
            PipelineConfig::from_json(r#"{"defaultSort":{"field":"age"}}"#).expect("parse");
        assert_eq!(config.initial_sort(), SortSpec::by("age", SortDirection::Asc));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PipelineConfig::from_json("{\"pageSize\":").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_page_size_fails_validation_and_normalizes_to_default() {
        let config = PipelineConfig::default().with_page_size(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPageSize)));
        assert_eq!(config.normalized().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn blank_sort_field_is_dropped() {
        let config = PipelineConfig::default().with_default_sort("  ", SortDirection::Desc);
        assert!(matches!(config.validate(), Err(ConfigError::EmptySortField)));
        assert_eq!(config.normalized().default_sort, None);
        assert_eq!(config.initial_sort(), SortSpec::default());
    }
}
