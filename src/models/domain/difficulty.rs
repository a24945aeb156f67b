use serde::{Deserialize, Serialize};
use std::fmt;

/// The three difficulty levels the app advertises. Requests carry difficulty
/// as a raw string so unrecognized values can still flow through prompt
/// composition; this enum is the recognized subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Difficulty {
    #[serde(rename = "Maklik")]
    Easy,
    #[serde(rename = "Gemiddeld")]
    Medium,
    #[serde(rename = "Moeilik")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Exact-match parse. Anything that is not one of the three Afrikaans
    /// labels is unrecognized, including case variants.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Maklik" => Some(Difficulty::Easy),
            "Gemiddeld" => Some(Difficulty::Medium),
            "Moeilik" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Maklik",
            Difficulty::Medium => "Gemiddeld",
            Difficulty::Hard => "Moeilik",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
