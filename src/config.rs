//! Engine configuration
//!
//! Difficulty is the only tunable: it fixes how many plies the search looks
//! ahead after each candidate move, and is therefore also the only control
//! over how long [`crate::GomokuEngine::best_move`] takes.

use serde::{Deserialize, Serialize};

/// Named search-depth tier.
///
/// The numeric level doubles as the ply count searched below each
/// candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 1 ply
    #[display("easy")]
    Easy,
    /// 3 plies
    #[default]
    #[display("medium")]
    Medium,
    /// 5 plies
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// Map any integer level onto a tier.
    ///
    /// At or below 1 is `Easy`, at or above 5 is `Hard`, anything in between
    /// is `Medium`.
    #[must_use]
    pub fn from_level(level: i32) -> Self {
        if level <= 1 {
            Difficulty::Easy
        } else if level >= 5 {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }

    /// Integer level (1, 3 or 5)
    #[must_use]
    pub fn level(self) -> i32 {
        i32::from(self.depth())
    }

    /// Plies searched below each candidate move
    #[must_use]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

/// Settings for a new [`crate::GomokuEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
}

impl EngineConfig {
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_clamping() {
        assert_eq!(Difficulty::from_level(-7), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(3), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(4), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(5), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(42), Difficulty::Hard);
    }

    #[test]
    fn test_level_matches_depth() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.level(), i32::from(d.depth()));
            assert_eq!(Difficulty::from_level(d.level()), d);
        }
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_config_from_json() {
        let config: EngineConfig = serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);

        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        assert!(serde_json::from_str::<EngineConfig>(r#"{"difficulty":"insane"}"#).is_err());
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            r#""medium""#
        );
    }
}
