use thiserror::Error;

use crate::Weight;

/// Raised when an entity is constructed from incomplete or zero-valued input
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("drone name is required")]
    EmptyDroneName,
    #[error("drone max capacity must be greater than zero")]
    ZeroCapacity,
    #[error("location name is required")]
    EmptyLocationName,
    #[error("location package weight must be greater than zero")]
    ZeroWeight,
}

/// Raised by `Drone::deliver` when a trip would weigh more than the drone can carry
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("drone {drone} cannot carry {requested} (max capacity {capacity})")]
pub struct CapacityExceededError {
    pub drone: String,
    pub capacity: Weight,
    /// Total weight of the rejected trip, saturated at `Weight::MAX`
    pub requested: Weight,
}

/// Invariant violations inside an allocation run.
///
/// None of these are caused by bad input data: entity construction already
/// rejects that. Seeing one of them means the allocator itself misbehaved, or
/// the fleet is too large to tabulate on this platform.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AllocationError {
    #[error("no capacity tier can carry a load of {load}")]
    NoSufficientTier { load: Weight },
    #[error("knapsack table for {locations} locations at capacity {capacity} does not fit in memory")]
    TableTooLarge { locations: usize, capacity: Weight },
    #[error("dispatch rejected by drone: {0}")]
    Delivery(#[from] CapacityExceededError),
}
