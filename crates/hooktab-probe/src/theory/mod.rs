//! The simplified music-theory model: scale-degree resolution against a
//! tonal center, and the heuristic harmonic-tension table.

pub mod degree;
pub mod tension;

pub use degree::{digit_to_roman, resolve_root};
pub use tension::tension_strain;
