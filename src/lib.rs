//! Controlled light/dark theme switch for Yew applications.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod motion;

pub use components::{ThemeToggle, ThemeToggleProps, stylesheet};
