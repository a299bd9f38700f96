//! Controllers Module - small stateful machines, one surface each
//!
//! Each controller owns exactly one [`Surface`](crate::surface::Surface)
//! and at most one live [`ScheduledTask`](crate::timer::ScheduledTask):
//!
//! - **animation** - Idle/Animating rotation ticks (~50ms)
//! - **flip** - binary front/back toggle, no timer
//! - **loading** - Idle/Loading/Complete/Stopped random progress (~200ms)
//! - **modal** - open with entrance animation, delayed hide on close
//!
//! Starting while active is a no-op; every stop-equivalent is idempotent
//! and always clears the task handle.

mod animation;
mod flip;
mod loading;
mod modal;

pub use animation::AnimationController;
pub use flip::FlipCard;
pub use loading::{LoadingBar, LoadingPhase};
pub use modal::Modal;
