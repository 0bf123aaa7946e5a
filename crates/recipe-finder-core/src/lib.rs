//! # Recipe Finder Core
//!
//! Platform-independent heart of the Recipe Finder page: everything except
//! the actual drawing. The Dioxus app crate wires these pieces to signals.
//!
//! ## Modules
//!
//! - [`api`] - Backend wire types, the [`api::RecipeApi`] trait and its HTTP client
//! - [`navigation`] - View state machine with one level of back history
//! - [`views`] - Typed view models for every panel, including the veg/non-veg classifier
//! - [`render`] - The [`render::RenderTarget`] seam the controller draws through
//! - [`controller`] - [`controller::ViewController`], which ties it all together
//! - [`config`] - Endpoint paths, presentation constants, [`config::ApiConfig`]
//! - [`error`] - Error types for backend calls

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod navigation;
pub mod render;
pub mod views;

#[cfg(test)]
mod test_utils;

pub use controller::{ViewAction, ViewController};
pub use navigation::View;
