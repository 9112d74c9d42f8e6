//! Per-position verdicts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of scoring one position of a guess
///
/// Variants are ordered by strength so that the best verdict for a letter
/// is simply the maximum (`Absent < Present < Correct`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Letter not available after consumption
    Absent,
    /// Right letter, wrong position
    Present,
    /// Right letter, right position
    Correct,
}

impl Verdict {
    /// Wire name used in JSON responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Single character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ordering_ranks_strength() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
    }

    #[test]
    fn verdict_serializes_lowercase() {
        let json = serde_json::to_string(&[Verdict::Correct, Verdict::Present, Verdict::Absent])
            .unwrap();
        assert_eq!(json, r#"["correct","present","absent"]"#);

        let parsed: Verdict = serde_json::from_str(r#""present""#).unwrap();
        assert_eq!(parsed, Verdict::Present);
    }

    #[test]
    fn verdict_renders_codes() {
        assert_eq!(Verdict::Correct.code(), 'G');
        assert_eq!(Verdict::Absent.to_string(), "absent");
        assert_eq!(Verdict::Present.emoji(), '🟨');
    }
}
