//! Yew components for the Inference landing page.
//!
//! The page is rendered in the browser through [`App`] and exported to
//! static HTML through [`document::render_document`].

pub mod app;
pub mod components;
pub mod document;
pub mod pages;

pub use app::App;
pub use pages::{Home, HomeProps};
