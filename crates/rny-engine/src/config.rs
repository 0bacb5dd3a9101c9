//! Configuration for an adventure session.

use serde::{Deserialize, Serialize};

/// Configuration for an adventure session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of turns after which the game is forced to end.
    pub max_turns: u32,
    /// Points awarded for booting the computer.
    pub win_bonus: u32,
    /// Points deducted from the win bonus once the game has been saved.
    pub save_penalty: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_turns: 150,
            win_bonus: 30,
            save_penalty: 10,
        }
    }
}

impl EngineConfig {
    /// Set the turn limit (at least 1).
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    /// Set the win bonus.
    pub fn with_win_bonus(mut self, bonus: u32) -> Self {
        self.win_bonus = bonus;
        self
    }

    /// Set the save penalty.
    pub fn with_save_penalty(mut self, penalty: u32) -> Self {
        self.save_penalty = penalty;
        self
    }

    /// The bonus actually awarded on winning.
    pub fn final_bonus(&self, save_used: bool) -> u32 {
        if save_used {
            self.win_bonus.saturating_sub(self.save_penalty)
        } else {
            self.win_bonus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_turns, 150);
        assert_eq!(cfg.win_bonus, 30);
        assert_eq!(cfg.save_penalty, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_max_turns(20)
            .with_win_bonus(50)
            .with_save_penalty(25);
        assert_eq!(cfg.max_turns, 20);
        assert_eq!(cfg.win_bonus, 50);
        assert_eq!(cfg.save_penalty, 25);
    }

    #[test]
    fn max_turns_at_least_one() {
        let cfg = EngineConfig::default().with_max_turns(0);
        assert_eq!(cfg.max_turns, 1);
    }

    #[test]
    fn save_penalty_reduces_bonus() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.final_bonus(false), 30);
        assert_eq!(cfg.final_bonus(true), 20);

        let cfg = cfg.with_save_penalty(100);
        assert_eq!(cfg.final_bonus(true), 0);
    }
}
