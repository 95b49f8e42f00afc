use std::collections::BTreeMap;

use schema::{Drone, Weight};

/// Drones sharing one max capacity, served in turn
#[derive(Debug)]
struct CapacityTier {
    /// Indices into the fleet, in input order
    drones: Vec<usize>,
    /// Next drone to receive a trip
    cursor: usize,
}

impl CapacityTier {
    fn next_drone(&mut self) -> usize {
        let drone = self.drones[self.cursor];
        self.cursor = (self.cursor + 1) % self.drones.len();
        drone
    }
}

/// Fleet grouped by max capacity, cheapest tier first
#[derive(Debug)]
pub struct CapacityTiers {
    tiers: BTreeMap<Weight, CapacityTier>,
}

impl CapacityTiers {
    pub fn from_drones(drones: &[Drone]) -> Self {
        let mut tiers = BTreeMap::<Weight, CapacityTier>::new();
        for (index, drone) in drones.iter().enumerate() {
            tiers
                .entry(drone.max_capacity())
                .or_insert_with(|| CapacityTier {
                    drones: vec![],
                    cursor: 0,
                })
                .drones
                .push(index);
        }

        Self { tiers }
    }

    /// Largest capacity in the fleet, `None` for an empty fleet
    pub fn highest_capacity(&self) -> Option<Weight> {
        self.tiers.keys().next_back().copied()
    }

    /// Picks the drone for a trip weighing `load`: the next in turn within the
    /// smallest tier that can carry it.
    pub fn dispatch(&mut self, load: Weight) -> Option<usize> {
        self.tiers
            .range_mut(load..)
            .next()
            .map(|(_, tier)| tier.next_drone())
    }
}
