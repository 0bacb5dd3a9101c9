//! What the engine hands back to its host after every call.

use serde::{Deserialize, Serialize};

/// How a command turned out.
///
/// None of these are errors: every kind carries text meant for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// The command did what was asked.
    Ok,
    /// The command could not be understood, or needs an object.
    InvalidInput,
    /// A required item, flag or location was missing.
    PreconditionNotMet,
    /// The turn limit was reached and the game ended.
    TurnLimitReached,
    /// The computer booted; the game was won.
    TerminalSuccess,
    /// The game ended some other way, or had already ended.
    GameOver,
}

/// Text to show the player, with an optional image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Message for the player.
    pub text: String,
    /// Path of an image to show alongside the text.
    pub image: Option<String>,
    /// Outcome classification.
    pub kind: ResponseKind,
}

impl Response {
    /// A successful response.
    pub fn ok(text: impl Into<String>) -> Self {
        Self::with_kind(ResponseKind::Ok, text)
    }

    /// The player's input could not be acted on.
    pub fn invalid(text: impl Into<String>) -> Self {
        Self::with_kind(ResponseKind::InvalidInput, text)
    }

    /// A precondition was not met.
    pub fn refused(text: impl Into<String>) -> Self {
        Self::with_kind(ResponseKind::PreconditionNotMet, text)
    }

    /// A response of any kind, without an image.
    pub fn with_kind(kind: ResponseKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
            kind,
        }
    }

    /// Attach an image.
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}
