use std::fmt;
use thiserror::Error;

/// Library-level error type with rich context and user-friendly reporting.
///
/// `EspcoError` is the primary error type returned by espco library operations.
/// It provides:
/// - Detailed error information for programmatic handling
/// - User-friendly messages with context and suggestions
/// - Mapping to CLI exit codes for consistent error reporting
///
/// # Exit Code Mapping
///
/// Use [`to_exit_code()`](Self::to_exit_code) to map errors to CLI exit codes:
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration errors, invalid quantities |
/// | 3 | Unknown catalog item or pack |
/// | 4 | Order operation issued out of sequence |
/// | 1 | Other errors |
///
/// Library code returns `EspcoError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum EspcoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    OrderSequence,
    Validation,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Catalog => write!(f, "Catalog"),
            Self::OrderSequence => write!(f, "Order Sequence"),
            Self::Validation => write!(f, "Validation"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with an optional [defaults] section."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } => Some(
                "An explicit configuration path was given but nothing exists there.".to_string(),
            ),
            Self::DiscoveryFailed { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax of .espco/config.toml".to_string(),
                "Remove keys that are not output_format, verbose or show_items".to_string(),
            ],
            Self::InvalidValue { key, .. } if key == "output_format" => {
                vec!["Use output_format = \"text\" or output_format = \"json\"".to_string()]
            }
            Self::InvalidValue { key, .. } => vec![format!("Review the value given for '{key}'")],
            Self::NotFound { .. } => vec![
                "Check the path passed to --config or ESPCO_CONFIG".to_string(),
                "Omit --config to use .espco/config.toml discovery".to_string(),
            ],
            Self::DiscoveryFailed { .. } => {
                vec!["Run espco from a readable working directory".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Catalog lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown catalog item '{id}'")]
    UnknownItem { id: String },

    #[error("Unknown pack '{id}'")]
    UnknownPack { id: String },

    #[error("Invalid quantity '{value}' in '{token}'")]
    MalformedToken { token: String, value: String },
}

impl UserFriendlyError for CatalogError {
    fn user_message(&self) -> String {
        match self {
            Self::UnknownItem { id } => format!("'{id}' is not an item in the catalog"),
            Self::UnknownPack { id } => format!("'{id}' is not a pack or an item in the catalog"),
            Self::MalformedToken { token, value } => {
                format!("Could not read quantity '{value}' in '{token}'")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::MalformedToken { .. } => {
                Some("Items are written as item-id or item-id:quantity.".to_string())
            }
            _ => Some("The catalog is fixed at build time.".to_string()),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedToken { .. } => {
                vec!["Use a whole quantity of at least 1, e.g. wheelhouse:8".to_string()]
            }
            _ => vec!["Run 'espco catalog' to list item and pack ids".to_string()],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Catalog
    }
}

/// Order accumulation errors.
///
/// Sequence errors mean the caller issued an operation the current order
/// state does not accept. The order is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Quantity must be at least 1, got {quantity}")]
    InvalidQuantity { quantity: u32 },

    #[error("Extra weight must not be negative, got {extra_weight_oz} oz")]
    NegativeExtraWeight { extra_weight_oz: String },

    #[error("Order weight {weight_oz} oz cannot be reported in pounds and ounces")]
    WeightOutOfRange { weight_oz: String },

    #[error("Invalid sequence: cannot {operation} a finalized order before reset")]
    InvalidSequence { operation: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl UserFriendlyError for OrderError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidQuantity { quantity } => {
                format!(
                    "Quantity {quantity} is not allowed; every item needs a quantity of at least 1"
                )
            }
            Self::NegativeExtraWeight { extra_weight_oz } => {
                format!("Extra packaging weight {extra_weight_oz} oz is negative")
            }
            Self::WeightOutOfRange { weight_oz } => {
                format!("The order weighs {weight_oz} oz, which is too heavy to report")
            }
            Self::InvalidSequence { operation } => {
                format!("Cannot {operation} this order because it was already calculated")
            }
            Self::Catalog(err) => err.user_message(),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidQuantity { .. } | Self::NegativeExtraWeight { .. } => None,
            Self::WeightOutOfRange { .. } => {
                Some("The order was left open and can still be reset.".to_string())
            }
            Self::InvalidSequence { .. } => Some(
                "An order is calculated once. Start a new order before adding items again."
                    .to_string(),
            ),
            Self::Catalog(err) => err.context(),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidQuantity { .. } => vec!["Pass a quantity of 1 or more".to_string()],
            Self::NegativeExtraWeight { .. } => {
                vec!["Pass 0 when the item needs no extra packaging".to_string()]
            }
            Self::WeightOutOfRange { .. } => {
                vec!["Check the item quantities and split the order".to_string()]
            }
            Self::InvalidSequence { .. } => {
                vec!["Enter 'new' to start a new order, then add the items".to_string()]
            }
            Self::Catalog(err) => err.suggestions(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidQuantity { .. }
            | Self::NegativeExtraWeight { .. }
            | Self::WeightOutOfRange { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidSequence { .. } => ErrorCategory::OrderSequence,
            Self::Catalog(_) => ErrorCategory::Catalog,
        }
    }
}

impl UserFriendlyError for EspcoError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Order(err) => err.user_message(),
            Self::Catalog(err) => err.user_message(),
            Self::Io(err) => format!("File system operation failed: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Order(err) => err.context(),
            Self::Catalog(err) => err.context(),
            Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Order(err) => err.suggestions(),
            Self::Catalog(err) => err.suggestions(),
            Self::Io(_) => vec!["Check file permissions and available disk space".to_string()],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Order(err) => err.category(),
            Self::Catalog(err) => err.category(),
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl EspcoError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use espco_utils::error::{EspcoError, OrderError};
    ///
    /// let err = EspcoError::Order(OrderError::InvalidSequence {
    ///     operation: "add items to".to_string(),
    /// });
    /// let message = err.display_for_user();
    /// assert!(message.contains("already calculated"));
    /// assert!(message.contains("Suggestions:"));
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> crate::exit_codes::ExitCode {
        use crate::exit_codes::ExitCode;

        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::Catalog(CatalogError::MalformedToken { .. })
            | Self::Order(OrderError::Catalog(CatalogError::MalformedToken { .. })) => {
                ExitCode::CLI_ARGS
            }
            Self::Catalog(_) | Self::Order(OrderError::Catalog(_)) => ExitCode::UNKNOWN_ITEM,
            Self::Order(OrderError::InvalidSequence { .. }) => ExitCode::INVALID_SEQUENCE,
            Self::Order(
                OrderError::InvalidQuantity { .. }
                | OrderError::NegativeExtraWeight { .. }
                | OrderError::WeightOutOfRange { .. },
            ) => ExitCode::CLI_ARGS,
            Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes::ExitCode;

    #[test]
    fn test_exit_code_mapping() {
        let cases = [
            (
                EspcoError::Config(ConfigError::InvalidFile("bad".to_string())),
                ExitCode::CLI_ARGS,
            ),
            (
                EspcoError::Catalog(CatalogError::UnknownItem {
                    id: "pickle".to_string(),
                }),
                ExitCode::UNKNOWN_ITEM,
            ),
            (
                EspcoError::Order(OrderError::Catalog(CatalogError::UnknownPack {
                    id: "pickle-6".to_string(),
                })),
                ExitCode::UNKNOWN_ITEM,
            ),
            (
                EspcoError::Order(OrderError::InvalidSequence {
                    operation: "finalize".to_string(),
                }),
                ExitCode::INVALID_SEQUENCE,
            ),
            (
                EspcoError::Order(OrderError::InvalidQuantity { quantity: 0 }),
                ExitCode::CLI_ARGS,
            ),
            (
                EspcoError::Order(OrderError::WeightOutOfRange {
                    weight_oz: "1e20".to_string(),
                }),
                ExitCode::CLI_ARGS,
            ),
            (
                EspcoError::Io(std::io::Error::other("disk")),
                ExitCode::INTERNAL,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_exit_code(), expected, "{err}");
        }
    }

    #[test]
    fn test_display_for_user_includes_context_and_suggestions() {
        let err = EspcoError::Catalog(CatalogError::UnknownItem {
            id: "pickle".to_string(),
        });
        let message = err.display_for_user();
        assert!(message.starts_with("Error: 'pickle' is not an item"));
        assert!(message.contains("Context: The catalog is fixed"));
        assert!(message.contains("  • Run 'espco catalog'"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            OrderError::InvalidSequence {
                operation: "finalize".to_string()
            }
            .category(),
            ErrorCategory::OrderSequence
        );
        assert_eq!(
            OrderError::InvalidQuantity { quantity: 0 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCategory::OrderSequence.to_string(), "Order Sequence");
    }

    #[test]
    fn test_order_error_wraps_catalog_error_transparently() {
        let err = OrderError::from(CatalogError::UnknownItem {
            id: "pickle".to_string(),
        });
        assert_eq!(err.to_string(), "Unknown catalog item 'pickle'");
    }
}
