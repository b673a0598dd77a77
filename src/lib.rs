//! Terminal audio player with a manually navigated, three-line lyrics window.
//!
//! The pure core lives in [`model`]: a playlist controller and a lyrics window
//! engine driven through [`model::Session`]. Everything else adapts it to a
//! terminal, a rodio output and files on disk.

pub mod audio;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
