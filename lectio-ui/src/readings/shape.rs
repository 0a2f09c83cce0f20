//! Response shape builder
//!
//! Assembles the exposed response: liturgical metadata with defaults
//! applied once at the boundary, the mass list with synthetic ids, and
//! the keyed map of normalized reading groups.

use chrono::NaiveDate;
use lectio_common::calendar;
use thiserror::Error;

use crate::model::{
    LectureMap, LiturgicalInfo, Mass, NormalizedResponse, RawInformations, RawMassResponse,
};
use crate::readings::normalize::normalize_mass;

/// Valid JSON that yields no masses and no readings; callers treat this
/// exactly like an unreachable endpoint
#[derive(Debug, Error)]
#[error("Aucune lecture disponible")]
pub struct EmptyContent;

/// Build the normalized response for one (date, zone) payload
///
/// Fails with [`EmptyContent`] when both `messes` and `lectures` come out
/// empty; a vacuously successful empty response is never returned.
pub fn build_response(
    raw: RawMassResponse,
    date: NaiveDate,
    zone: &str,
) -> Result<NormalizedResponse, EmptyContent> {
    let informations = build_informations(raw.informations.unwrap_or_default(), date, zone);

    let raw_messes = raw.messes.unwrap_or_default();
    let multiple_masses = raw_messes.len() > 1;

    let mut messes = Vec::with_capacity(raw_messes.len());
    let mut lectures = LectureMap::default();

    for (messe_index, raw_mass) in raw_messes.into_iter().enumerate() {
        let nom = raw_mass
            .nom
            .unwrap_or_else(|| format!("Messe {}", messe_index + 1));
        let raw_lectures = raw_mass.lectures.unwrap_or_default();

        for group in normalize_mass(&raw_lectures, &nom, messe_index) {
            // Slot name keys the single-mass case; multi-mass days get a
            // disambiguating suffix so parallel masses never collapse
            let key = if multiple_masses {
                format!("{}_messe{}", group.slot.as_str(), messe_index)
            } else {
                group.slot.as_str().to_string()
            };
            lectures.insert(key, group);
        }

        messes.push(Mass {
            id: format!("messe{}", messe_index),
            nom,
            lectures: raw_lectures,
        });
    }

    if messes.is_empty() && lectures.is_empty() {
        return Err(EmptyContent);
    }

    Ok(NormalizedResponse {
        informations,
        messes,
        lectures,
    })
}

/// Apply day-level metadata defaults
fn build_informations(raw: RawInformations, date: NaiveDate, zone: &str) -> LiturgicalInfo {
    let fete = raw
        .fete
        .or_else(|| raw.ligne2.clone())
        .unwrap_or_default();

    LiturgicalInfo {
        date: raw.date.unwrap_or_else(|| calendar::iso(date)),
        zone: raw.zone.or_else(|| Some(zone.to_string())),
        jour_liturgique_nom: raw
            .jour_liturgique_nom
            .or(raw.nom)
            .unwrap_or_else(|| "Jour liturgique".to_string()),
        couleur: raw.couleur.unwrap_or_else(|| "vert".to_string()),
        annee: raw.annee,
        temps_liturgique: raw
            .temps_liturgique
            .unwrap_or_else(|| "ordinaire".to_string()),
        semaine: raw.semaine.unwrap_or_default(),
        fete,
        ligne1: raw.ligne1,
        ligne2: raw.ligne2,
        ligne3: raw
            .ligne3
            .unwrap_or_else(|| calendar::format_date_fr(date)),
    }
}
