//! Configuration types.

use serde::{Deserialize, Serialize};

/// Wording used when synthesizing audit transaction rows.
///
/// A deployment serving a Thai-language ledger, for example, swaps these
/// for the Thai equivalents in its config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLabels {
    /// The ledger category recorded on payroll transactions.
    #[serde(default = "default_expense_category")]
    pub expense_category: String,
    /// The description prefix before the employee name.
    #[serde(default = "default_wages")]
    pub wages: String,
    /// The description marker for a full payment.
    #[serde(default = "default_paid_in_full")]
    pub paid_in_full: String,
    /// The description marker for a partial payment (followed by the
    /// amount).
    #[serde(default = "default_partial_payment")]
    pub partial_payment: String,
}

fn default_expense_category() -> String {
    "expense".to_string()
}

fn default_wages() -> String {
    "Wages".to_string()
}

fn default_paid_in_full() -> String {
    "paid in full".to_string()
}

fn default_partial_payment() -> String {
    "partial payment".to_string()
}

impl Default for AuditLabels {
    fn default() -> Self {
        Self {
            expense_category: default_expense_category(),
            wages: default_wages(),
            paid_in_full: default_paid_in_full(),
            partial_payment: default_partial_payment(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Audit-row wording.
    #[serde(default)]
    pub audit: AuditLabels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = AuditLabels::default();
        assert_eq!(labels.expense_category, "expense");
        assert_eq!(labels.wages, "Wages");
        assert_eq!(labels.paid_in_full, "paid in full");
        assert_eq!(labels.partial_payment, "partial payment");
    }

    #[test]
    fn test_partial_yaml_fills_missing_fields_with_defaults() {
        let yaml = r#"
audit:
  expense_category: "รายจ่าย"
"#;
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.audit.expense_category, "รายจ่าย");
        assert_eq!(config.audit.wages, "Wages");
    }

    #[test]
    fn test_empty_yaml_mapping_is_all_defaults() {
        let config: PayrollConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PayrollConfig::default());
    }
}
