//! Command implementations for the finlens CLI.

pub(crate) mod analyze;
pub(crate) mod quote;
pub(crate) mod series;
pub(crate) mod symbols;
