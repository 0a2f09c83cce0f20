//! Reading-type classification
//!
//! Upstream `type` fields are unreliable: gospels arrive tagged with
//! generic type strings, psalms are identified only by their title, and
//! some readings carry no type at all. Classification is a fixed-priority
//! rule list: an exact `type` match short-circuits everything, then
//! case-insensitive substring heuristics over `titre` and `intro_lue`.

use crate::model::RawReading;
use crate::readings::slot::ReadingSlot;

/// Map a raw reading to exactly one canonical slot
pub fn classify(reading: &RawReading) -> ReadingSlot {
    // Tier 1: an exact wire-name match is authoritative
    if let Some(raw_type) = reading.reading_type.as_deref() {
        if let Some(slot) = ReadingSlot::from_raw(raw_type) {
            return slot;
        }
    }

    // Tier 2: title heuristics. The haystack is titre plus intro_lue,
    // lowercased; rule order is the tie-break and must not be reordered.
    let haystack = format!(
        "{} {}",
        reading.titre.as_deref().unwrap_or(""),
        reading.intro_lue.as_deref().unwrap_or("")
    )
    .to_lowercase();

    classify_title(&haystack)
}

/// Ordered substring rules over the lowercased title text
fn classify_title(haystack: &str) -> ReadingSlot {
    // Gospel first: an évangile mis-tagged with a generic type string must
    // not fall through to the generic lecture rule below
    if contains_any(haystack, &["évangile", "evangile"]) {
        return ReadingSlot::Evangile;
    }
    if haystack.contains("psaume") {
        return ReadingSlot::Psaume;
    }
    if haystack.contains("cantique") {
        return ReadingSlot::Cantique;
    }
    // Epistles are announced either as "épître" or as "lettre de saint ..."
    if contains_any(haystack, &["épître", "épitre", "epitre", "lettre"]) {
        return ReadingSlot::Epitre;
    }
    if contains_any(haystack, &["alléluia", "alleluia"]) {
        return ReadingSlot::Alleluia;
    }
    // "deuxième lecture" before the generic lecture rule, which would
    // otherwise swallow it
    if contains_any(haystack, &["deuxième lecture", "deuxieme lecture"]) {
        return ReadingSlot::Lecture2;
    }
    if haystack.contains("lecture") {
        return ReadingSlot::Lecture1;
    }

    // Silent default, not an error: unidentifiable readings act as the
    // first reading
    ReadingSlot::Lecture1
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(raw_type: Option<&str>, titre: Option<&str>, intro_lue: Option<&str>) -> RawReading {
        RawReading {
            reading_type: raw_type.map(String::from),
            titre: titre.map(String::from),
            intro_lue: intro_lue.map(String::from),
            ..RawReading::default()
        }
    }

    #[test]
    fn exact_type_matches_are_identities() {
        for slot in ReadingSlot::ALL {
            let raw = reading(Some(slot.as_str()), None, None);
            assert_eq!(classify(&raw), slot);
        }
    }

    #[test]
    fn exact_type_short_circuits_title_heuristics() {
        let raw = reading(Some("psaume"), Some("Évangile de Jésus Christ selon saint Jean"), None);
        assert_eq!(classify(&raw), ReadingSlot::Psaume);
    }

    #[test]
    fn gospel_title_outranks_other_markers() {
        // Both "évangile" and "lecture" present: gospel wins
        let raw = reading(
            Some("lecture"),
            Some("Lecture de l'évangile selon saint Marc"),
            None,
        );
        assert_eq!(classify(&raw), ReadingSlot::Evangile);
    }

    #[test]
    fn title_markers_classify_untyped_readings() {
        assert_eq!(
            classify(&reading(None, Some("Psaume 117"), None)),
            ReadingSlot::Psaume
        );
        assert_eq!(
            classify(&reading(None, Some("Cantique de Zacharie"), None)),
            ReadingSlot::Cantique
        );
        assert_eq!(
            classify(&reading(None, Some("Lettre de saint Paul aux Romains"), None)),
            ReadingSlot::Epitre
        );
        assert_eq!(
            classify(&reading(None, Some("Alléluia. Alléluia."), None)),
            ReadingSlot::Alleluia
        );
        assert_eq!(
            classify(&reading(None, Some("Deuxième lecture"), None)),
            ReadingSlot::Lecture2
        );
        assert_eq!(
            classify(&reading(None, Some("Première lecture"), None)),
            ReadingSlot::Lecture1
        );
    }

    #[test]
    fn intro_lue_is_consulted_when_titre_is_silent() {
        let raw = reading(None, None, Some("Psaume de David"));
        assert_eq!(classify(&raw), ReadingSlot::Psaume);
    }

    #[test]
    fn empty_reading_defaults_to_first_reading() {
        assert_eq!(classify(&RawReading::default()), ReadingSlot::Lecture1);
        let raw = reading(Some("inconnu"), None, None);
        assert_eq!(classify(&raw), ReadingSlot::Lecture1);
    }
}
