//! Client-side search state.
//!
//! DESIGN
//! ======
//! `query` validates input, `options` holds configuration, and `search` owns
//! the request lifecycle. None of them touch the DOM directly.

pub mod options;
pub mod query;
pub mod search;
