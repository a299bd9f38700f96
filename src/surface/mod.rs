//! Surface Module - render-target abstraction
//!
//! Controllers draw on a [`Surface`] instead of a concrete backend:
//!
//! - **target** - the trait, typed style properties, visual-state snapshot
//! - **memory** - headless surface that records operations (tests, demos)
//! - **term** - crossterm-backed surface bound to one terminal row

mod memory;
mod target;
mod term;

pub use memory::{MemorySurface, SurfaceOp};
pub use target::{StyleProperty, Surface, VisualState};
pub use term::TermSurface;
