//! Client-side state modules.
//!
//! A single focused model: the generator form. State lives in plain structs
//! held in `RwSignal` contexts provided by the root component.

pub mod form;
