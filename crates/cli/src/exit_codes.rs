//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3       | Transform        | Record schema mismatch                   |
//! | 50-59   | Fetch            | Remote data source failures              |

use pivotgrid_source::SourceError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// A record's shape disagrees with the header (missing/extra fields).
pub const EXIT_SCHEMA: u8 = 3;

// =============================================================================
// Fetch (50-59)
// =============================================================================

/// Transport failure reaching the endpoint (DNS, connect, TLS, timeout).
pub const EXIT_FETCH_NETWORK: u8 = 50;

/// Endpoint answered with a non-success HTTP status.
pub const EXIT_FETCH_UPSTREAM: u8 = 51;

/// Response body was not valid JSON.
pub const EXIT_FETCH_PARSE: u8 = 52;

/// Response body was JSON but not a list of uniform scalar objects.
pub const EXIT_FETCH_SHAPE: u8 = 53;

/// Map a load failure to its registered exit code.
pub fn source_exit_code(err: &SourceError) -> u8 {
    match err {
        SourceError::Network(_) => EXIT_FETCH_NETWORK,
        SourceError::Status(_) => EXIT_FETCH_UPSTREAM,
        SourceError::Parse(_) => EXIT_FETCH_PARSE,
        SourceError::Shape(_) => EXIT_FETCH_SHAPE,
    }
}
