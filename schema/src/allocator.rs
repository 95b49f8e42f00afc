use crate::{AllocationError, Drone, Location, Trip};

/// Assigns locations to a fleet of drones as capacity-bounded trips
pub trait Allocator {
    /// Plan trips for `locations` across `drones`.
    ///
    /// Neither input is mutated; the returned `Allocation` lists every drone in
    /// input order, including those that received no trips.
    fn allocate(
        &self,
        drones: &[Drone],
        locations: &[Location],
    ) -> Result<Allocation, AllocationError>;
}

/// Result of an allocation run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Allocation {
    /// One entry per input drone, in input order
    pub drones: Vec<DroneSummary>,
    /// Locations no drone could take, in the order they were left
    pub undelivered: Vec<Location>,
}

impl Allocation {
    pub fn new(drones: &[Drone], undelivered: Vec<Location>) -> Self {
        Self {
            drones: drones.iter().map(DroneSummary::from).collect(),
            undelivered,
        }
    }

    pub fn undelivered_names(&self) -> Vec<&str> {
        self.undelivered.iter().map(Location::name).collect()
    }
}

/// A drone's trips, reduced to the names of the locations visited
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DroneSummary {
    pub name: String,
    pub trips: Vec<Vec<String>>,
}

impl From<&Drone> for DroneSummary {
    fn from(drone: &Drone) -> Self {
        Self {
            name: drone.name().to_string(),
            trips: drone.trips().iter().map(Trip::location_names).collect(),
        }
    }
}
