mod allocator;
mod entities;
mod error;
mod runner;

pub use allocator::{Allocation, Allocator, DroneSummary};
pub use entities::{Drone, Location, Trip, Weight};
pub use error::{AllocationError, CapacityExceededError, ValidationError};
pub use runner::Runner;

pub const SAMPLE_DRONES_CSV_PATH: &'static str = "./test_data/drones.csv";
pub const SAMPLE_LOCATIONS_CSV_PATH: &'static str = "./test_data/locations.csv";
