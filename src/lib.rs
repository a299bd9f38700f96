//! # chalkboard
//!
//! Interactive terminal playground for core UI-scripting concepts:
//! session-scoped state, pure functions, and animation orchestration over
//! an abstract render surface.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals)
//! for the reactive status line.
//!
//! ## Architecture
//!
//! Controllers never touch a concrete backend. Each one owns a
//! [`Surface`](surface::Surface) (markers, typed style properties, text)
//! and at most one [`ScheduledTask`](timer::ScheduledTask), so the whole
//! state-machine layer runs headless in tests:
//!
//! ```text
//! DemoEvent → handler → ops / controller → Surface → terminal row
//!                              └─ ScheduledTask ticks ─┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - color, markers, animation names, timing constants
//! - [`surface`] - render-target trait plus memory and terminal backends
//! - [`timer`] - cancellable scheduled tasks (periodic and one-shot)
//! - [`ops`] - the pure utility functions (calc, text, color, scope, rate)
//! - [`controllers`] - animation, flip card, loading bar, modal
//! - [`app`] - event wiring, key bindings, the interactive loop

pub mod app;
pub mod controllers;
pub mod ops;
pub mod surface;
pub mod timer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use surface::{MemorySurface, StyleProperty, Surface, SurfaceOp, TermSurface, VisualState};

pub use timer::ScheduledTask;

pub use ops::{
    CalcError, CalcReport, Debounce, ScopeReport, ScopeSession, TextStyle, Throttle, compute,
    compute_str, factorial, format, format_named, random_color, random_rgba,
};

pub use controllers::{AnimationController, FlipCard, LoadingBar, LoadingPhase, Modal};

pub use app::{DemoApp, DemoEvent, Regions};
