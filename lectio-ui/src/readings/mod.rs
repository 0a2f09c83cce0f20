//! Reading normalization engine
//!
//! Pure functions from raw upstream payloads to the presentation shape:
//! slot classification, version grouping, canonical ordering and the
//! final response assembly. No I/O lives here.

pub mod classify;
pub mod normalize;
pub mod office;
pub mod shape;
pub mod slot;

pub use classify::classify;
pub use normalize::normalize_mass;
pub use office::{build_office_view, OfficeView, KNOWN_OFFICES};
pub use shape::{build_response, EmptyContent};
pub use slot::ReadingSlot;
