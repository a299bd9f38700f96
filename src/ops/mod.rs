//! Ops Module - the pure utility functions behind the demo
//!
//! Independent, side-effect-free building blocks the handlers call:
//!
//! - **calc** - derived numeric facts (square, cube, root, parity, factorial)
//! - **text** - case transformations with a capitalize default
//! - **color** - random `#RRGGBB` generation
//! - **scope** - session-scoped vs call-local counter demonstration
//! - **rate** - debounce/throttle callback wrappers

pub mod calc;
pub mod color;
pub mod rate;
pub mod scope;
pub mod text;

pub use calc::{CalcError, CalcReport, compute, compute_str, factorial};
pub use color::{random_color, random_rgba};
pub use rate::{Debounce, Throttle};
pub use scope::{ScopeReport, ScopeSession};
pub use text::{TextStyle, format, format_named};
