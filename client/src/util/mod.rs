//! Pure helpers shared by the search pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lead normalization and card rendering live here so they can be tested
//! without a rendering surface.

pub mod lead_cards;
pub mod lead_fields;
