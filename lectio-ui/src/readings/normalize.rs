//! Reading normalization
//!
//! Takes the raw reading array of one mass and produces the ordered
//! sequence of reading groups the tab UI consumes: classify, group
//! same-slot readings into versions, then reorder by the canonical
//! liturgical sequence.

use lectio_common::scripture;

use crate::model::{RawReading, Reading, ReadingGroup};
use crate::readings::classify::classify;
use crate::readings::slot::ReadingSlot;

/// Canonical presentation order of slots
///
/// Psaume/cantique recur because they interleave with the numbered
/// readings of vigil liturgies; each slot is still emitted at most once
/// (first canonical occurrence wins).
const CANONICAL_SEQUENCE: [ReadingSlot; 17] = [
    ReadingSlot::Lecture1,
    ReadingSlot::Psaume,
    ReadingSlot::Lecture2,
    ReadingSlot::Psaume,
    ReadingSlot::Lecture3,
    ReadingSlot::Cantique,
    ReadingSlot::Lecture4,
    ReadingSlot::Psaume,
    ReadingSlot::Lecture5,
    ReadingSlot::Cantique,
    ReadingSlot::Lecture6,
    ReadingSlot::Psaume,
    ReadingSlot::Lecture7,
    ReadingSlot::Psaume,
    ReadingSlot::Epitre,
    ReadingSlot::Alleluia,
    ReadingSlot::Evangile,
];

/// Normalize the reading list of one mass into ordered reading groups
///
/// Grouping is lossless: every input reading lands in exactly one group,
/// and version order within a group preserves source order. An empty
/// input yields an empty output.
pub fn normalize_mass(
    lectures: &[RawReading],
    messe_nom: &str,
    messe_index: usize,
) -> Vec<ReadingGroup> {
    // Group by slot in first-seen order
    let mut grouped: Vec<(ReadingSlot, Vec<Reading>)> = Vec::new();

    for (lecture_index, raw) in lectures.iter().enumerate() {
        let slot = classify(raw);
        let position = match grouped.iter().position(|(s, _)| *s == slot) {
            Some(position) => position,
            None => {
                grouped.push((slot, Vec::new()));
                grouped.len() - 1
            }
        };
        let versions = &mut grouped[position].1;
        let version_index = versions.len();
        versions.push(build_reading(
            raw,
            slot,
            messe_nom,
            messe_index,
            lecture_index,
            version_index,
        ));
    }

    // Reorder by the canonical sequence; slots outside it keep their
    // first-seen order at the tail
    let mut ordered: Vec<(ReadingSlot, Vec<Reading>)> = Vec::with_capacity(grouped.len());
    for slot in CANONICAL_SEQUENCE {
        if let Some(position) = grouped.iter().position(|(s, _)| *s == slot) {
            ordered.push(grouped.remove(position));
        }
    }
    ordered.append(&mut grouped);

    ordered
        .into_iter()
        .map(|(slot, versions)| ReadingGroup {
            slot,
            label: slot.label(),
            emoji: slot.emoji(),
            messe_nom: messe_nom.to_string(),
            messe_index,
            has_multiple_versions: versions.len() > 1,
            versions,
        })
        .collect()
}

/// Build one normalized version entry from a raw reading
fn build_reading(
    raw: &RawReading,
    slot: ReadingSlot,
    messe_nom: &str,
    messe_index: usize,
    lecture_index: usize,
    version_index: usize,
) -> Reading {
    // reference and ref both occur upstream; coalesce, empty when absent
    let reference = raw
        .reference
        .clone()
        .or_else(|| raw.reference_short.clone())
        .unwrap_or_default();
    let book = scripture::book_name(&reference).map(String::from);

    Reading {
        slot,
        titre: raw.titre.clone().unwrap_or_default(),
        contenu: raw.contenu.clone().unwrap_or_default(),
        reference,
        book,
        refrain_psalmique: raw.refrain_psalmique.clone(),
        verset_evangile: raw.verset_evangile.clone(),
        intro_lue: raw.intro_lue.clone(),
        ref_refrain: raw.ref_refrain.clone(),
        ref_verset: raw.ref_verset.clone(),
        messe_nom: messe_nom.to_string(),
        messe_index,
        lecture_index,
        version_index,
    }
}
