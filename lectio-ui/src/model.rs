//! Data model for the reading-browser service
//!
//! Raw types mirror the upstream AELF payload, where no field is
//! guaranteed present. They are validated and defaulted exactly once, in
//! the response shape builder; everything downstream works on the
//! normalized types.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::readings::slot::ReadingSlot;

// ============================================================================
// Raw upstream types (untrusted)
// ============================================================================

/// One reading as returned by the upstream API
///
/// `reference` and `ref` both occur upstream for the same citation; the
/// normalizer coalesces them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawReading {
    #[serde(rename = "type")]
    pub reading_type: Option<String>,
    pub titre: Option<String>,
    pub contenu: Option<String>,
    pub reference: Option<String>,
    #[serde(rename = "ref")]
    pub reference_short: Option<String>,
    pub refrain_psalmique: Option<String>,
    pub verset_evangile: Option<String>,
    pub intro_lue: Option<String>,
    pub ref_refrain: Option<String>,
    pub ref_verset: Option<String>,
}

/// One mass celebration for the day
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMass {
    pub nom: Option<String>,
    pub lectures: Option<Vec<RawReading>>,
}

/// Day-level liturgical metadata as returned upstream
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInformations {
    pub date: Option<String>,
    pub zone: Option<String>,
    pub couleur: Option<String>,
    pub annee: Option<String>,
    pub temps_liturgique: Option<String>,
    pub semaine: Option<String>,
    pub jour_liturgique_nom: Option<String>,
    pub nom: Option<String>,
    pub fete: Option<String>,
    pub ligne1: Option<String>,
    pub ligne2: Option<String>,
    pub ligne3: Option<String>,
}

/// Full upstream payload for one (date, zone) request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMassResponse {
    pub informations: Option<RawInformations>,
    pub messes: Option<Vec<RawMass>>,
}

// ============================================================================
// Normalized types
// ============================================================================

/// Day-level metadata with defaults applied
#[derive(Debug, Clone, Serialize)]
pub struct LiturgicalInfo {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub jour_liturgique_nom: String,
    pub couleur: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annee: Option<String>,
    pub temps_liturgique: String,
    pub semaine: String,
    pub fete: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligne1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligne2: Option<String>,
    pub ligne3: String,
}

/// One mass, passed through with a synthetic identifier attached
#[derive(Debug, Clone, Serialize)]
pub struct Mass {
    pub id: String,
    pub nom: String,
    pub lectures: Vec<RawReading>,
}

/// One normalized reading version within a group
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    #[serde(rename = "type")]
    pub slot: ReadingSlot,
    pub titre: String,
    pub contenu: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refrain_psalmique: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verset_evangile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_lue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_refrain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_verset: Option<String>,
    pub messe_nom: String,
    pub messe_index: usize,
    pub lecture_index: usize,
    pub version_index: usize,
}

impl Reading {
    /// Short human label for version pickers: title, then reference, then a
    /// content excerpt (mirrors the dropdown labels of the web UI)
    pub fn display_label(&self) -> String {
        if !self.titre.is_empty() {
            if self.reference.is_empty() {
                return self.titre.clone();
            }
            return format!("{} - {}", self.titre, self.reference);
        }
        if !self.reference.is_empty() {
            return self.reference.clone();
        }
        let excerpt: String = self.contenu.chars().take(40).collect();
        if excerpt.is_empty() {
            format!("Option {}", self.version_index + 1)
        } else {
            excerpt
        }
    }
}

/// All versions of one reading slot within one mass
#[derive(Debug, Clone, Serialize)]
pub struct ReadingGroup {
    #[serde(rename = "type")]
    pub slot: ReadingSlot,
    pub label: &'static str,
    pub emoji: &'static str,
    pub messe_nom: String,
    pub messe_index: usize,
    pub has_multiple_versions: bool,
    pub versions: Vec<Reading>,
}

/// Insertion-ordered `lectures` mapping
///
/// Serialized as a JSON object whose key order is the presentation order
/// produced by the normalizer. Kept as a vector of pairs so that order is
/// part of the type, not an accident of map iteration.
#[derive(Debug, Clone, Default)]
pub struct LectureMap(Vec<(String, ReadingGroup)>);

impl LectureMap {
    pub fn insert(&mut self, key: String, group: ReadingGroup) {
        self.0.push((key, group));
    }

    pub fn get(&self, key: &str) -> Option<&ReadingGroup> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, g)| g)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn groups(&self) -> impl Iterator<Item = &ReadingGroup> {
        self.0.iter().map(|(_, g)| g)
    }
}

impl Serialize for LectureMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, group) in &self.0 {
            map.serialize_entry(key, group)?;
        }
        map.end()
    }
}

/// The exposed response shape for one (date, zone) request
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedResponse {
    pub informations: LiturgicalInfo,
    pub messes: Vec<Mass>,
    pub lectures: LectureMap,
}
