//! Domain utilities

pub mod date;
