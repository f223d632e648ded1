//! Window state module
//!
//! Provides the per-window registry entry, the registry itself, and the
//! chrome press-target classification used by the drag engine.

mod entry;
mod region;
mod registry;

pub use entry::{WindowEntry, WindowFx};
pub use region::ChromeTarget;
pub use registry::{WindowRegistry, CASCADE_ORIGIN, CASCADE_STEP, DEFAULT_WINDOW_SIZE};
