//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

impl PayrollConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Missing fields fall back to their defaults, so a file only needs to
    /// name the labels it overrides.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::PayrollConfig;
    ///
    /// let config = PayrollConfig::load("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_shipped_config() {
        let config = PayrollConfig::load("./config/payroll.yaml").unwrap();
        assert_eq!(config.audit.expense_category, "expense");
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        match PayrollConfig::load("./config/does-not-exist.yaml") {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("does-not-exist"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
