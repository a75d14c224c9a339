//! # qrstudio
//!
//! Leptos + WASM single-page app that generates styled QR codes from a URL
//! or free text, previews them inline as SVG, and downloads them as PNG.
//!
//! The crate holds the form state, the options builder/validator, and the
//! thin browser glue. All rendering is delegated to the `qrgen` crate
//! behind the [`render::QrRenderer`] capability trait.

pub mod app;
pub mod assets;
pub mod components;
pub mod consts;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;
