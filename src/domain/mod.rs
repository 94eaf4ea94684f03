//! Domain modules (vertical slices): wire types and sub-clients.

pub mod person;
