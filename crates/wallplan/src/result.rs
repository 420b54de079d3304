//! Result and error types for Wallplan.

use thiserror::Error;

/// Result type for Wallplan operations
pub type WallResult<T> = Result<T, WallError>;

/// Errors that can occur while designing or planning a wall
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallError {
    /// A course cannot be closed exactly with the available bricks and joints
    #[error("Cannot fill row {row} with {bond} bond: {remaining}mm left over")]
    UnfillableCourse {
        /// Row index of the failing course
        row: usize,
        /// Bond strategy name
        bond: String,
        /// Span (mm) that no brick combination closes
        remaining: u32,
    },

    /// No brick can be laid at a wild-bond cursor without breaking the fill
    #[error("Wild bond found no valid brick for row {row} at x={position}mm")]
    UnresolvableWildStep {
        /// Row index
        row: usize,
        /// Cursor position (mm) where both candidates failed
        position: u32,
    },

    /// A course contains a symbol that is not in the brick table
    #[error("Unknown brick symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol that has no width mapping
        symbol: String,
    },

    /// Bond strategy name not recognized
    #[error("Unsupported bond type '{name}', expected one of: stretcher, english_cross, wild")]
    UnsupportedBond {
        /// Name that was requested
        name: String,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// Configuration could not be parsed
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Error message
        message: String,
    },
}

impl WallError {
    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create an unsupported bond error
    #[must_use]
    pub fn unsupported_bond(name: impl Into<String>) -> Self {
        Self::UnsupportedBond { name: name.into() }
    }
}
