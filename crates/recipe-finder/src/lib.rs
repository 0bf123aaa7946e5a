//! Recipe Finder - find recipes by the ingredients you already have.
//!
//! Dioxus front end for the recipe backend. All view logic lives in
//! [`recipe_finder_core`]; this crate draws it and feeds user actions back in.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: talks to the backend on the page's own origin
//! - **Desktop**: talks to a backend on `localhost:8888`

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
