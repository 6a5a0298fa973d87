//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components only walk the view model built in `util::lead_cards`; they make
//! no decisions about what a lead shows.

pub mod lead_card;
pub mod lead_list;
