//! Board pieces: locations, diseases, research centers, infection rate.
//!
//! These types appear both in the static game definition and in the live
//! situation; setup deep-copies the definition's values and play mutates
//! the copies.

mod location;

pub use location::{Disease, InfectionRateLevel, Location, ResearchCenter, MAX_CUBES};
