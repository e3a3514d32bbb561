use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Puzzle difficulty, expressed as how many of the 81 cells get hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of solution cells cleared when deriving the puzzle
    pub fn hidden_cells(self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
        }
    }

    /// Number of pre-filled (fixed) cells the puzzle starts with
    pub fn given_cells(self) -> usize {
        81 - self.hidden_cells()
    }

    /// The next difficulty in the cycle, wrapping from Hard back to Easy
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{}' (easy, medium, hard)", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_cell_counts() {
        assert_eq!(Difficulty::Easy.hidden_cells(), 35);
        assert_eq!(Difficulty::Medium.hidden_cells(), 45);
        assert_eq!(Difficulty::Hard.hidden_cells(), 55);
        assert_eq!(Difficulty::Easy.given_cells(), 46);
    }

    #[test]
    fn test_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_serde_representation() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"Easy\"");
        let d: Difficulty = serde_json::from_str("\"Hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }
}
