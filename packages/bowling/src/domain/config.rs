//! Game configuration.
//!
//! The only knob is how strictly pin counts are checked. Configuration is
//! plain data: callers build it in code or hand over a JSON document, nothing
//! is read from the environment.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

/// How `Game::roll` treats the pin count it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinValidation {
    /// Accept any count. Callers are trusted to feed well-formed rolls; a
    /// malformed sequence still scores, just not meaningfully.
    Lenient,
    /// Reject a roll that knocks down more pins than are standing in the
    /// current rack.
    #[default]
    Strict,
}

/// Configuration for a single [`Game`](crate::domain::Game).
///
/// # Example JSON Config
///
/// ```json
/// {"validation": "lenient"}
/// ```
///
/// Missing fields take their defaults, so `{}` is a strict game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub validation: PinValidation,
}

impl GameConfig {
    pub const fn strict() -> Self {
        Self {
            validation: PinValidation::Strict,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            validation: PinValidation::Lenient,
        }
    }

    /// Build a config from an optional JSON document.
    ///
    /// `None` and malformed documents both yield the default config; the
    /// latter is logged so a typo does not go unnoticed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|err| {
                warn!(error = %err, "malformed game config, falling back to defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.validation == PinValidation::Strict
    }
}
