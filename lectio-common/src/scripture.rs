//! Scripture book-name expansion
//!
//! Upstream references abbreviate the book ("Jn 20, 19-31", "1 Co 15, 1-8");
//! the UI displays the full French name. The table covers the 73-book
//! Catholic canon.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Abbreviation → full French book name
static BOOK_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Gn", "Genèse"),
        ("Ex", "Exode"),
        ("Lv", "Lévitique"),
        ("Nb", "Nombres"),
        ("Dt", "Deutéronome"),
        ("Jos", "Josué"),
        ("Jg", "Juges"),
        ("Rt", "Ruth"),
        ("1S", "1 Samuel"),
        ("2S", "2 Samuel"),
        ("1R", "1 Rois"),
        ("2R", "2 Rois"),
        ("1Ch", "1 Chroniques"),
        ("2Ch", "2 Chroniques"),
        ("Esd", "Esdras"),
        ("Ne", "Néhémie"),
        ("Tb", "Tobit"),
        ("Jdt", "Judith"),
        ("Est", "Esther"),
        ("1M", "1 Maccabées"),
        ("2M", "2 Maccabées"),
        ("Jb", "Job"),
        ("Ps", "Psaumes"),
        ("Pr", "Proverbes"),
        ("Qo", "Qohélet"),
        ("Ct", "Cantique des Cantiques"),
        ("Sg", "Sagesse"),
        ("Si", "Siracide"),
        ("Is", "Isaïe"),
        ("Jr", "Jérémie"),
        ("Lm", "Lamentations"),
        ("Ba", "Baruch"),
        ("Ez", "Ézéchiel"),
        ("Dn", "Daniel"),
        ("Os", "Osée"),
        ("Jl", "Joël"),
        ("Am", "Amos"),
        ("Ab", "Abdias"),
        ("Jon", "Jonas"),
        ("Mi", "Michée"),
        ("Na", "Nahum"),
        ("Ha", "Habacuc"),
        ("So", "Sophonie"),
        ("Ag", "Aggée"),
        ("Za", "Zacharie"),
        ("Ml", "Malachie"),
        ("Mt", "Matthieu"),
        ("Mc", "Marc"),
        ("Lc", "Luc"),
        ("Jn", "Jean"),
        ("Ac", "Actes des Apôtres"),
        ("Rm", "Romains"),
        ("1Co", "1 Corinthiens"),
        ("2Co", "2 Corinthiens"),
        ("Ga", "Galates"),
        ("Ep", "Éphésiens"),
        ("Ph", "Philippiens"),
        ("Col", "Colossiens"),
        ("1Th", "1 Thessaloniciens"),
        ("2Th", "2 Thessaloniciens"),
        ("1Tm", "1 Timothée"),
        ("2Tm", "2 Timothée"),
        ("Tt", "Tite"),
        ("Phm", "Philémon"),
        ("He", "Hébreux"),
        ("Jc", "Jacques"),
        ("1P", "1 Pierre"),
        ("2P", "2 Pierre"),
        ("1Jn", "1 Jean"),
        ("2Jn", "2 Jean"),
        ("3Jn", "3 Jean"),
        ("Jd", "Jude"),
        ("Ap", "Apocalypse"),
    ])
});

/// Full French book name for a scripture reference, if the leading
/// abbreviation is recognized.
///
/// Handles both "1Co 15, 1" and "1 Co 15, 1" spellings; the abbreviation
/// is the optional leading book number plus the following letters.
pub fn book_name(reference: &str) -> Option<&'static str> {
    let abbreviation = leading_abbreviation(reference)?;
    BOOK_NAMES.get(abbreviation.as_str()).copied()
}

fn leading_abbreviation(reference: &str) -> Option<String> {
    let trimmed = reference.trim_start();
    let mut chars = trimmed.chars().peekable();
    let mut abbreviation = String::new();

    if let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            abbreviation.push(c);
            chars.next();
            // Tolerate a space between book number and name
            if chars.peek() == Some(&' ') {
                chars.next();
            }
        }
    }

    while let Some(&c) = chars.peek() {
        if c.is_alphabetic() {
            abbreviation.push(c);
            chars.next();
        } else {
            break;
        }
    }

    if abbreviation.is_empty() {
        None
    } else {
        Some(abbreviation)
    }
}
