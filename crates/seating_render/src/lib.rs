//! # seating_render
//!
//! One-way projection of a [`Layout`](seating_engine::Layout) into something
//! a front end can draw. Nothing here feeds back into the engine.
//!
//! This crate provides:
//!
//! - [`plan`] — per-cell views with CSS-style classes, plus item labels.
//! - [`ascii`] — a plain-text chart for terminals and logs.
//! - [`codec`] — JSON helpers for shipping a plan to a browser.
//! - [`error`] — render-layer error types.

pub mod ascii;
pub mod codec;
pub mod error;
pub mod plan;

pub use ascii::render_ascii;
pub use codec::{from_json, to_json};
pub use error::RenderError;
pub use plan::{CellView, Label, RenderOptions, RenderPlan};
