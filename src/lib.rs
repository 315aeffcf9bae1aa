//! Year-in-review proxy over a NeoDB shelf: completed items per category for a
//! calendar year, plus a merged movie and TV feed.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
