//! Headless model for search-hit annotations on a media progress bar.
//!
//! The browser glue implements [`Player`] and [`Renderer`]; everything in
//! here runs without a DOM.

pub mod active;
pub mod args;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod hit;
pub mod navigation;
pub mod player;
pub mod registry;
pub mod render;
pub mod search;

pub use args::PluginCall;
pub use config::{Config, ConfigPatch};
pub use controller::AnnotationController;
pub use document::SearchResults;
pub use error::AnnotationError;
pub use hit::Hit;
pub use navigation::Direction;
pub use player::Player;
pub use registry::Registry;
pub use render::{Marker, MarkerId, Renderer};
