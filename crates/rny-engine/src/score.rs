//! Score keeping.

use serde::{Deserialize, Serialize};

/// One logged score increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    /// Why points were awarded.
    pub reason: String,
    /// How many points.
    pub delta: u32,
}

/// Accumulated score with its reasons.
///
/// Points are only ever added, and each reason is awarded at most once, so
/// replaying an action cannot farm points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    total: u32,
    log: Vec<ScoreEvent>,
}

impl Score {
    /// Zero score, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current total.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Every increase, oldest first.
    pub fn log(&self) -> &[ScoreEvent] {
        &self.log
    }

    /// Whether a reason has already been awarded.
    pub fn has_awarded(&self, reason: &str) -> bool {
        self.log.iter().any(|e| e.reason == reason)
    }

    /// Award points for a reason. Returns false if nothing was added.
    pub fn award(&mut self, reason: impl Into<String>, delta: u32) -> bool {
        let reason = reason.into();
        if delta == 0 || self.has_awarded(&reason) {
            return false;
        }
        log::info!("score +{delta}: {reason}");
        self.total = self.total.saturating_add(delta);
        self.log.push(ScoreEvent { reason, delta });
        true
    }

    /// Multi-line summary for the `score` command.
    pub fn summary(&self) -> String {
        let mut out = format!("Your score: {}", self.total);
        for event in &self.log {
            out.push_str(&format!("\n  +{} {}", event.delta, event.reason));
        }
        out
    }
}
