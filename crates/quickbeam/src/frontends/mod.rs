//! Language frontends for Quickbeam
//!
//! This module contains implementations of the `LanguageFrontend` trait.

pub mod rust;

pub use rust::RustFrontend;
