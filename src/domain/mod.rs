//! Domain layer: the question catalog, survey records, classification and
//! aggregation logic. Pure types and functions with no I/O.

pub mod catalog;
pub mod foundation;
pub mod survey;
