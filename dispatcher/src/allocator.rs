use std::cmp::Reverse;

use itertools::{Either, Itertools};
use schema::{Allocation, AllocationError, Allocator, Drone, Location};

use crate::knapsack::{KnapsackTable, Selection};
use crate::tiers::CapacityTiers;

/// A greedy allocator which, every round, packs the heaviest subset of the
/// remaining locations that the largest drone could carry, then hands that trip
/// to the smallest drone able to take it.
///
/// This is not an exact multi-knapsack solver: rounds are decided one at a time
/// and never revisited, and small drones may sit idle if every round's best
/// load is too heavy for them.
///
/// Each round costs O(locations * highest capacity) time and memory, and there
/// may be as many rounds as locations.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnapsackAllocator;

impl KnapsackAllocator {
    pub fn new() -> Self {
        Self
    }
}

impl Allocator for KnapsackAllocator {
    fn allocate(
        &self,
        drones: &[Drone],
        locations: &[Location],
    ) -> Result<Allocation, AllocationError> {
        let mut fleet = drones.to_vec();
        let mut remaining = locations.to_vec();
        let mut tiers = CapacityTiers::from_drones(&fleet);

        let Some(highest_capacity) = tiers.highest_capacity() else {
            log::info!("no drones available, {} locations left", remaining.len());
            return Ok(Allocation::new(&fleet, remaining));
        };
        let capacity = usize::try_from(highest_capacity).map_err(|_| {
            AllocationError::TableTooLarge {
                locations: remaining.len(),
                capacity: highest_capacity,
            }
        })?;

        let mut rounds = 0;
        while !remaining.is_empty() {
            let weights = remaining.iter().map(Location::weight).collect_vec();
            let selection = KnapsackTable::build(&weights, capacity)
                .ok_or(AllocationError::TableTooLarge {
                    locations: weights.len(),
                    capacity: highest_capacity,
                })?
                .select(&weights);

            // Nothing left fits even the largest drone
            if selection.total_weight == 0 {
                break;
            }

            let load = selection.total_weight;
            let drone_index = tiers
                .dispatch(load)
                .ok_or(AllocationError::NoSufficientTier { load })?;

            let (trip, rest) = split_selection(remaining, &selection);
            remaining = rest;

            let drone = &mut fleet[drone_index];
            log::debug!(
                "round {}: {} ({} locations, weight {}) -> {}",
                rounds,
                trip.iter().map(Location::name).join(", "),
                trip.len(),
                load,
                drone.name(),
            );
            drone.deliver(trip)?;
            rounds += 1;
        }

        if !remaining.is_empty() {
            log::warn!(
                "{} locations exceed every drone's capacity: {}",
                remaining.len(),
                remaining.iter().map(Location::name).join(", "),
            );
        }
        log::info!("allocated {} trips across {} drones", rounds, fleet.len());

        Ok(Allocation::new(&fleet, remaining))
    }
}

/// Splits the selected locations out of `remaining`.
///
/// The trip keeps the selection's order (highest index first); the rest keep
/// their relative order.
fn split_selection(
    remaining: Vec<Location>,
    selection: &Selection,
) -> (Vec<Location>, Vec<Location>) {
    let (mut selected, rest): (Vec<(usize, Location)>, Vec<Location>) = remaining
        .into_iter()
        .enumerate()
        .partition_map(|(index, location)| {
            if selection.indices.contains(&index) {
                Either::Left((index, location))
            } else {
                Either::Right(location)
            }
        });
    selected.sort_by_key(|(index, _)| Reverse(*index));

    let trip = selected.into_iter().map(|(_, location)| location).collect();
    (trip, rest)
}
