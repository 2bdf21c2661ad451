//! Password policy auditing library
//!
//! Each input line carries an occurrence policy and a candidate password:
//!
//! ```text
//! 1-3 a: abcde
//! ```
//!
//! meaning `abcde` must contain `a` at least 1 and at most 3 times. Lines are
//! parsed into [`ValidationEntry`] values, checked, and tallied into an
//! [`AuditReport`].
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-policy` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_INPUT_PATH`: Custom path to the entry file
//!   (default: `./exercise_part_one_input.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{audit_lines, parse_entry, validate_entry, FailureMode};
//!
//! let entry = parse_entry("1-3 a: abcde").expect("well-formed line");
//! assert!(validate_entry(&entry));
//!
//! let report = audit_lines(&["1-3 a: abcde", "1-3 b: cdefg"], FailureMode::FailFast)
//!     .expect("no malformed lines");
//! assert_eq!((report.total, report.invalid, report.valid), (2, 1, 1));
//! ```

// Internal modules
mod audit;
mod entry;
mod input;
mod parser;
mod validator;

// Public API
pub use audit::{AuditError, AuditReport, FailureMode, RejectedLine, audit_lines};
pub use entry::ValidationEntry;
pub use input::{
    DEFAULT_INPUT_PATH, INPUT_PATH_ENV, InputError, drop_final_empty_line, get_input_path,
    read_lines, split_lines,
};
pub use parser::{ParseError, parse_entry};
pub use validator::{count_occurrences, validate_entry};
