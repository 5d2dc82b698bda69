//! User roles
//!
//! Roles are coarse authorization labels attached to every user. They are
//! stored as lowercase text (`normal`, `admin`) and travel over the wire in the
//! same form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Authorization label of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account; may read events only
    #[default]
    Normal,
    /// May create, update and delete events
    Admin,
}

impl Role {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Normal => "normal",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Role::Normal),
            "admin" => Ok(Role::Admin),
            other => Err(SharedError::unknown_role(other)),
        }
    }
}

// Used by `#[sqlx(try_from = "String")]` when decoding user rows.
impl TryFrom<String> for Role {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
