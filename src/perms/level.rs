// file: src/perms/level.rs
// version: 1.0.0
// guid: 8b3f61d4-05c2-4a98-b7e6-1d4a92c5f083

//! Requested permission level

use std::fmt;
use std::str::FromStr;

use crate::PermsError;

/// Permission level a caller can request for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    Read,
    Edit,
}

impl PermissionLevel {
    /// Get the level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Read => "Read",
            PermissionLevel::Edit => "Edit",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = PermsError;

    /// Parse a level case-insensitively; anything other than read/edit
    /// is rejected before any network call is made
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("read") {
            Ok(PermissionLevel::Read)
        } else if value.eq_ignore_ascii_case("edit") {
            Ok(PermissionLevel::Edit)
        } else {
            Err(PermsError::invalid_argument(
                "Permission requested should be either 'Read' or 'Edit'",
            ))
        }
    }
}
