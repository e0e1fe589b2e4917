//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable rendering
//! components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Truncation and search match highlighting
//! - [`theme`]: Light and dark color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{Body, DisplayItem, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
