//! Room enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use roomhub_core::AppError;

/// The fixed set of bookable rooms.
///
/// Maps to the Postgres enum type `room`; the display labels are the
/// caller-facing names used in requests and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room")]
pub enum Room {
    /// Sala A.
    #[sqlx(rename = "Sala A")]
    #[serde(rename = "Sala A")]
    SalaA,
    /// Sala B.
    #[sqlx(rename = "Sala B")]
    #[serde(rename = "Sala B")]
    SalaB,
    /// Sala C.
    #[sqlx(rename = "Sala C")]
    #[serde(rename = "Sala C")]
    SalaC,
    /// Sala D.
    #[sqlx(rename = "Sala D")]
    #[serde(rename = "Sala D")]
    SalaD,
}

impl Room {
    /// All bookable rooms, in display order.
    pub const ALL: [Room; 4] = [Room::SalaA, Room::SalaB, Room::SalaC, Room::SalaD];

    /// Return the caller-facing room name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaA => "Sala A",
            Self::SalaB => "Sala B",
            Self::SalaC => "Sala C",
            Self::SalaD => "Sala D",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Room {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sala A" => Ok(Self::SalaA),
            "Sala B" => Ok(Self::SalaB),
            "Sala C" => Ok(Self::SalaC),
            "Sala D" => Ok(Self::SalaD),
            other => Err(AppError::validation(format!(
                "'{other}' is not a valid room. Expected one of: Sala A, Sala B, Sala C, Sala D"
            ))),
        }
    }
}
