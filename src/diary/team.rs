//! Teams and the roster of people serving them
//!
//! Two teams, Decani and Cantoris, take turns at the monthly recording.
//! Each team has a fixed compiler and assistant.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{DiaryError, DiaryResult};

// ============================================================================
// Team
// ============================================================================

/// One of the two recording teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Team A, records on Tuesdays
    Decani,
    /// Team B, records on Mondays
    Cantoris,
}

impl Team {
    /// Get both teams
    pub fn all() -> Vec<Self> {
        vec![Self::Decani, Self::Cantoris]
    }

    /// Get team ID as string
    pub fn id(&self) -> &'static str {
        match self {
            Self::Decani => "decani",
            Self::Cantoris => "cantoris",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Decani => "Decani",
            Self::Cantoris => "Cantoris",
        }
    }

    /// The other team
    pub fn other(&self) -> Self {
        match self {
            Self::Decani => Self::Cantoris,
            Self::Cantoris => Self::Decani,
        }
    }

    /// Team serving on a recording weekday
    ///
    /// Monday belongs to Cantoris and Tuesday to Decani. Any other weekday
    /// has no team.
    pub fn for_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Cantoris),
            Weekday::Tue => Some(Self::Decani),
            _ => None,
        }
    }

    /// Recording weekday of this team
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Decani => Weekday::Tue,
            Self::Cantoris => Weekday::Mon,
        }
    }

    /// Parse from string
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "decani" | "a" => Some(Self::Decani),
            "cantoris" | "b" => Some(Self::Cantoris),
            _ => None,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("unknown team '{s}', expected decani or cantoris"))
    }
}

// ============================================================================
// Roster
// ============================================================================

/// Compilers and assistants of both teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub decani_compiler: String,
    pub decani_assistant: String,
    pub cantoris_compiler: String,
    pub cantoris_assistant: String,
}

impl Roster {
    /// Create a roster
    pub fn new(
        decani_compiler: impl Into<String>,
        decani_assistant: impl Into<String>,
        cantoris_compiler: impl Into<String>,
        cantoris_assistant: impl Into<String>,
    ) -> Self {
        Self {
            decani_compiler: decani_compiler.into(),
            decani_assistant: decani_assistant.into(),
            cantoris_compiler: cantoris_compiler.into(),
            cantoris_assistant: cantoris_assistant.into(),
        }
    }

    /// Compiler for a team
    pub fn compiler(&self, team: Team) -> &str {
        match team {
            Team::Decani => &self.decani_compiler,
            Team::Cantoris => &self.cantoris_compiler,
        }
    }

    /// Assistant for a team
    pub fn assistant(&self, team: Team) -> &str {
        match team {
            Team::Decani => &self.decani_assistant,
            Team::Cantoris => &self.cantoris_assistant,
        }
    }

    /// Reject blank names
    pub fn validate(&self) -> DiaryResult<()> {
        let fields = [
            ("decani_compiler", &self.decani_compiler),
            ("decani_assistant", &self.decani_assistant),
            ("cantoris_compiler", &self.cantoris_compiler),
            ("cantoris_assistant", &self.cantoris_assistant),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(DiaryError::blank_roster_name(field));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_mapping_is_asymmetric() {
        assert_eq!(Team::for_weekday(Weekday::Mon), Some(Team::Cantoris));
        assert_eq!(Team::for_weekday(Weekday::Tue), Some(Team::Decani));
        assert_eq!(Team::for_weekday(Weekday::Wed), None);

        for team in Team::all() {
            assert_eq!(Team::for_weekday(team.weekday()), Some(team));
        }
    }

    #[test]
    fn test_other_team() {
        assert_eq!(Team::Decani.other(), Team::Cantoris);
        assert_eq!(Team::Cantoris.other().other(), Team::Cantoris);
    }

    #[test]
    fn test_team_from_str() {
        assert_eq!("Decani".parse::<Team>().unwrap(), Team::Decani);
        assert_eq!("b".parse::<Team>().unwrap(), Team::Cantoris);
        assert!("tenor".parse::<Team>().is_err());
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new("Alice", "Bob", "Carol", "Dave");
        assert_eq!(roster.compiler(Team::Decani), "Alice");
        assert_eq!(roster.assistant(Team::Decani), "Bob");
        assert_eq!(roster.compiler(Team::Cantoris), "Carol");
        assert_eq!(roster.assistant(Team::Cantoris), "Dave");
    }

    #[test]
    fn test_roster_rejects_blank_names() {
        let roster = Roster::new("Alice", "  ", "Carol", "Dave");
        let err = roster.validate().unwrap_err();
        assert_eq!(err, DiaryError::blank_roster_name("decani_assistant"));

        assert!(Roster::new("A", "B", "C", "D").validate().is_ok());
    }
}
