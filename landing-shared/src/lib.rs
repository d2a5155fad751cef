#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! Shared building blocks for the Inference landing page: the class name
//! composer used by every component and the page configuration.

pub mod class_names;
pub mod config;
