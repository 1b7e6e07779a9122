//! Configuration section definitions.
//!
//! Each module corresponds to a section in `favtrim.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `key`     | `[key]`      | Near-white keying threshold          |
//! | `favicon` | `[favicon]`  | Favicon size chain and file names    |
//! | `apple`   | `[apple]`    | Rounded Apple touch icon             |

mod apple;
mod favicon;
mod key;

pub use apple::AppleConfig;
pub use favicon::FaviconConfig;
pub use key::KeyConfig;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Check that a configured file name is a bare name, not a path.
fn validate_file_name(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error(field, format!("{field} must not be empty"));
    } else if value.contains(['/', '\\']) {
        diag.error_with_hint(
            field,
            format!("{field} must be a file name, got `{value}`"),
            "set the top-level `output` to change the directory",
        );
    }
}
