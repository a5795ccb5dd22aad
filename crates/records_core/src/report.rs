//! Validation options and reports.
//!
//! [`ValidationContext`] carries the options of a validation pass;
//! [`ValidationReport`] is the flattened, printable outcome used by the CLI.

/// Context for validation operations.
#[derive(Debug, Default, Clone)]
pub struct ValidationContext {
    /// Reject keys that the schema does not declare instead of dropping them
    pub strict: bool,
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict validation mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Report of validation results.
///
/// Contains detailed information about validation outcomes,
/// including errors, warnings, and statistics.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether validation passed overall
    pub passed: bool,

    /// List of errors encountered
    pub errors: Vec<String>,

    /// List of warnings
    pub warnings: Vec<String>,

    /// Validation statistics
    pub stats: ValidationStats,
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Number of records validated
    pub records_validated: usize,

    /// Number of fields checked
    pub fields_checked: usize,

    /// Number of constraints evaluated
    pub constraints_evaluated: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Creates a new successful validation report.
    pub fn success() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.passed = false;
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
