//! Ready-made game definitions.
//!
//! - `BoardBuilder`: assembles a definition from cities, routes and tables
//! - `sample::small_world`: a twelve-city board used by the tests and
//!   benches

mod builder;
pub mod sample;

pub use builder::BoardBuilder;
