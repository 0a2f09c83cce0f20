//! Liturgy of the hours (offices)
//!
//! Office payloads are a different upstream shape from masses: a nested
//! `office` object with per-section content, where each section holds
//! either a single lecture or an array of them. Sections are assembled in
//! a fixed display order, skipping absent ones.

use serde::{Deserialize, Serialize};

use crate::readings::shape::EmptyContent;

/// The hours the upstream API serves
pub const KNOWN_OFFICES: [&str; 7] = [
    "lectures",
    "laudes",
    "tierce",
    "sexte",
    "none",
    "vepres",
    "complies",
];

/// Fixed section display order: (id, label, emoji)
const SECTIONS: [(&str, &str, &str); 6] = [
    ("introduction", "Introduction", "📝"),
    ("psaumes", "Psaumes", "🎵"),
    ("lectures", "Lectures", "📖"),
    ("pericopes", "Péricopes", "📜"),
    ("cantique", "Cantique", "🎼"),
    ("conclusion", "Conclusion", "✨"),
];

/// One lecture within an office section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OfficeLecture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(default)]
    pub contenu: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antienne: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repons: Option<String>,
}

/// A section holds one lecture or a list of them upstream
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(Box<OfficeLecture>),
    Many(Vec<OfficeLecture>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<OfficeLecture> {
        match self {
            OneOrMany::One(lecture) => vec![*lecture],
            OneOrMany::Many(lectures) => lectures,
        }
    }
}

/// Raw office payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOffice {
    pub nom: Option<String>,
    pub office: Option<RawOfficeContent>,
}

/// The per-section office content
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOfficeContent {
    pub introduction: Option<OneOrMany>,
    pub psaumes: Option<OneOrMany>,
    pub lectures: Option<OneOrMany>,
    pub pericopes: Option<OneOrMany>,
    pub cantique: Option<OneOrMany>,
    pub conclusion: Option<OneOrMany>,
}

impl RawOfficeContent {
    fn take_section(&mut self, id: &str) -> Option<OneOrMany> {
        match id {
            "introduction" => self.introduction.take(),
            "psaumes" => self.psaumes.take(),
            "lectures" => self.lectures.take(),
            "pericopes" => self.pericopes.take(),
            "cantique" => self.cantique.take(),
            "conclusion" => self.conclusion.take(),
            _ => None,
        }
    }
}

/// One assembled display section
#[derive(Debug, Clone, Serialize)]
pub struct OfficeSection {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub entries: Vec<OfficeLecture>,
}

/// The exposed office view
#[derive(Debug, Clone, Serialize)]
pub struct OfficeView {
    pub nom: String,
    pub sections: Vec<OfficeSection>,
}

/// Assemble the office view: fixed section order, absent sections skipped
///
/// An office with no content at all is a content failure, mirroring the
/// empty-mass rule.
pub fn build_office_view(raw: RawOffice, office_name: &str) -> Result<OfficeView, EmptyContent> {
    let mut content = raw.office.ok_or(EmptyContent)?;

    let mut sections = Vec::new();
    for (id, label, emoji) in SECTIONS {
        if let Some(entries) = content.take_section(id) {
            let entries = entries.into_vec();
            if entries.is_empty() {
                continue;
            }
            sections.push(OfficeSection {
                id,
                label,
                emoji,
                entries,
            });
        }
    }

    if sections.is_empty() {
        return Err(EmptyContent);
    }

    Ok(OfficeView {
        nom: raw.nom.unwrap_or_else(|| display_office_name(office_name)),
        sections,
    })
}

/// "laudes" → "Laudes" for the view header
fn display_office_name(office: &str) -> String {
    let mut chars = office.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
