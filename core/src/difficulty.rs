use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// How long a freshly spawned mole stays up before it ducks back into its hole.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub const fn visible_ms(self) -> Millis {
        use Difficulty::*;
        match self {
            Easy => 1500,
            Medium => 1200,
            Hard => 900,
            Impossible => 500,
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
            Impossible => "impossible",
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
            Impossible => "Impossible",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == s)
            .ok_or(GameError::UnknownDifficulty)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_visible_durations() {
        assert_eq!(Difficulty::Easy.visible_ms(), 1500);
        assert_eq!(Difficulty::Medium.visible_ms(), 1200);
        assert_eq!(Difficulty::Hard.visible_ms(), 900);
        assert_eq!(Difficulty::Impossible.visible_ms(), 500);
    }

    #[test]
    fn parses_level_names_only() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("impossible".parse::<Difficulty>(), Ok(Difficulty::Impossible));
        assert_eq!("Hard".parse::<Difficulty>(), Err(GameError::UnknownDifficulty));
        assert_eq!("bogus".parse::<Difficulty>(), Err(GameError::UnknownDifficulty));
    }

    #[test]
    fn default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
