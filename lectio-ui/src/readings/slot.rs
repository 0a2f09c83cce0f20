//! Canonical reading-slot identifiers
//!
//! Every raw reading is mapped to exactly one slot before grouping; the
//! slot is the identity used for grouping, ordering, keying and labeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier for a reading's functional role in the liturgy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingSlot {
    #[serde(rename = "lecture_1")]
    Lecture1,
    #[serde(rename = "lecture_2")]
    Lecture2,
    #[serde(rename = "lecture_3")]
    Lecture3,
    #[serde(rename = "lecture_4")]
    Lecture4,
    #[serde(rename = "lecture_5")]
    Lecture5,
    #[serde(rename = "lecture_6")]
    Lecture6,
    #[serde(rename = "lecture_7")]
    Lecture7,
    #[serde(rename = "epitre")]
    Epitre,
    #[serde(rename = "evangile")]
    Evangile,
    #[serde(rename = "psaume")]
    Psaume,
    #[serde(rename = "psaume_2")]
    Psaume2,
    #[serde(rename = "psaume_3")]
    Psaume3,
    #[serde(rename = "psaume_4")]
    Psaume4,
    #[serde(rename = "cantique")]
    Cantique,
    #[serde(rename = "cantique_2")]
    Cantique2,
    #[serde(rename = "alleluia")]
    Alleluia,
    #[serde(rename = "sequence")]
    Sequence,
}

impl ReadingSlot {
    /// All slots, in declaration order (exact-match lookup)
    pub const ALL: [ReadingSlot; 17] = [
        ReadingSlot::Lecture1,
        ReadingSlot::Lecture2,
        ReadingSlot::Lecture3,
        ReadingSlot::Lecture4,
        ReadingSlot::Lecture5,
        ReadingSlot::Lecture6,
        ReadingSlot::Lecture7,
        ReadingSlot::Epitre,
        ReadingSlot::Evangile,
        ReadingSlot::Psaume,
        ReadingSlot::Psaume2,
        ReadingSlot::Psaume3,
        ReadingSlot::Psaume4,
        ReadingSlot::Cantique,
        ReadingSlot::Cantique2,
        ReadingSlot::Alleluia,
        ReadingSlot::Sequence,
    ];

    /// Wire name of the slot
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingSlot::Lecture1 => "lecture_1",
            ReadingSlot::Lecture2 => "lecture_2",
            ReadingSlot::Lecture3 => "lecture_3",
            ReadingSlot::Lecture4 => "lecture_4",
            ReadingSlot::Lecture5 => "lecture_5",
            ReadingSlot::Lecture6 => "lecture_6",
            ReadingSlot::Lecture7 => "lecture_7",
            ReadingSlot::Epitre => "epitre",
            ReadingSlot::Evangile => "evangile",
            ReadingSlot::Psaume => "psaume",
            ReadingSlot::Psaume2 => "psaume_2",
            ReadingSlot::Psaume3 => "psaume_3",
            ReadingSlot::Psaume4 => "psaume_4",
            ReadingSlot::Cantique => "cantique",
            ReadingSlot::Cantique2 => "cantique_2",
            ReadingSlot::Alleluia => "alleluia",
            ReadingSlot::Sequence => "sequence",
        }
    }

    /// Exact match against the wire name; no heuristics
    pub fn from_raw(raw: &str) -> Option<ReadingSlot> {
        ReadingSlot::ALL.iter().copied().find(|s| s.as_str() == raw)
    }

    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            ReadingSlot::Lecture1 => "1ère Lecture",
            ReadingSlot::Lecture2 => "2e Lecture",
            ReadingSlot::Lecture3 => "3e Lecture",
            ReadingSlot::Lecture4 => "4e Lecture",
            ReadingSlot::Lecture5 => "5e Lecture",
            ReadingSlot::Lecture6 => "6e Lecture",
            ReadingSlot::Lecture7 => "7e Lecture",
            ReadingSlot::Epitre => "Épître",
            ReadingSlot::Evangile => "Évangile",
            ReadingSlot::Psaume => "Psaume",
            ReadingSlot::Psaume2 => "Psaume 2",
            ReadingSlot::Psaume3 => "Psaume 3",
            ReadingSlot::Psaume4 => "Psaume 4",
            ReadingSlot::Cantique => "Cantique",
            ReadingSlot::Cantique2 => "Cantique 2",
            ReadingSlot::Alleluia => "Alléluia",
            ReadingSlot::Sequence => "Séquence",
        }
    }

    /// Display emoji for tab buttons
    pub fn emoji(&self) -> &'static str {
        match self {
            ReadingSlot::Psaume
            | ReadingSlot::Psaume2
            | ReadingSlot::Psaume3
            | ReadingSlot::Psaume4
            | ReadingSlot::Sequence => "🎵",
            ReadingSlot::Cantique | ReadingSlot::Cantique2 => "🎼",
            ReadingSlot::Alleluia => "🌟",
            _ => "📖",
        }
    }
}

impl fmt::Display for ReadingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for slot in ReadingSlot::ALL {
            assert_eq!(ReadingSlot::from_raw(slot.as_str()), Some(slot));
        }
    }

    #[test]
    fn from_raw_is_strict() {
        assert_eq!(ReadingSlot::from_raw("Evangile"), None);
        assert_eq!(ReadingSlot::from_raw("lecture"), None);
        assert_eq!(ReadingSlot::from_raw(""), None);
    }

    #[test]
    fn serde_names_match_wire_names() {
        let json = serde_json::to_string(&ReadingSlot::Lecture1).unwrap();
        assert_eq!(json, "\"lecture_1\"");
        let slot: ReadingSlot = serde_json::from_str("\"psaume_2\"").unwrap();
        assert_eq!(slot, ReadingSlot::Psaume2);
    }
}
