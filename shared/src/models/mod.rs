//! Domain models for the Fire & Weather Dashboard

mod fire;
mod prediction;
mod weather;

pub use fire::*;
pub use prediction::*;
pub use weather::*;
