//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Nothing in this crate reads environment variables during request handling; the binaries
//! collect raw values and hand them to the parsing helpers below.

use crate::booking::SelectionScope;
use crate::constants::DEFAULT_EMERGENCY_NUMBER;
use crate::{ClinicError, ClinicResult, NonEmptyText};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    catalog_file: Option<PathBuf>,
    emergency_number: NonEmptyText,
    selection_scope: SelectionScope,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if `catalog_file` is given but is not a file, or
    /// if the emergency number contains anything other than digits.
    pub fn new(
        catalog_file: Option<PathBuf>,
        emergency_number: NonEmptyText,
        selection_scope: SelectionScope,
    ) -> ClinicResult<Self> {
        if let Some(path) = &catalog_file {
            if !path.is_file() {
                return Err(ClinicError::InvalidInput(format!(
                    "catalog file does not exist: {}",
                    path.display()
                )));
            }
        }

        if !emergency_number.as_str().bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClinicError::InvalidInput(
                "emergency number must contain only digits".into(),
            ));
        }

        Ok(Self {
            catalog_file,
            emergency_number,
            selection_scope,
        })
    }

    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }

    pub fn emergency_number(&self) -> &NonEmptyText {
        &self.emergency_number
    }

    pub fn selection_scope(&self) -> SelectionScope {
        self.selection_scope
    }
}

/// Resolve the config from raw (typically environment) values.
///
/// Blank values are treated as unset.
pub fn core_config_from_env_values(
    catalog_file: Option<String>,
    emergency_number: Option<String>,
    selection_scope: Option<String>,
) -> ClinicResult<CoreConfig> {
    let catalog_file = non_blank(catalog_file).map(PathBuf::from);
    let emergency_number = NonEmptyText::new(
        non_blank(emergency_number).unwrap_or_else(|| DEFAULT_EMERGENCY_NUMBER.into()),
    )?;
    let selection_scope = selection_scope_from_env_value(selection_scope)?;

    CoreConfig::new(catalog_file, emergency_number, selection_scope)
}

/// Parse the booking selection scope from an optional string value.
///
/// If `value` is `None` or blank, returns the default scope.
pub fn selection_scope_from_env_value(value: Option<String>) -> ClinicResult<SelectionScope> {
    non_blank(value)
        .map(|v| v.parse::<SelectionScope>())
        .transpose()
        .map(Option::unwrap_or_default)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
