//! Background tasks owned by the server lifecycle.

mod reaper;

pub use reaper::{Reaper, ReaperConfig, ReaperHandle};
