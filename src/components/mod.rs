//! Reusable view components.

pub mod number_field;
