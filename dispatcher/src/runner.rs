use std::time::Duration;

use futures::future::BoxFuture;
use schema::{Allocation, Allocator, Drone, Location, Runner};

use crate::KnapsackAllocator;

type Success = <CsvRunner as Runner<KnapsackAllocator>>::Success;
type Error = <CsvRunner as Runner<KnapsackAllocator>>::Error;

/// Runner which allocates a fleet and locations loaded from CSV
pub struct CsvRunner {
    drones: Vec<Drone>,
    locations: Vec<Location>,
    /// Upper bound on a single allocation run
    timeout: Option<Duration>,
}

impl CsvRunner {
    pub fn from_csv_paths(
        drones_csv_path: &str,
        locations_csv_path: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let drones = Drone::from_csv(drones_csv_path)?;
        let locations = Location::from_csv(locations_csv_path)?;
        log::info!(
            "loaded {} drones and {} locations",
            drones.len(),
            locations.len()
        );

        Ok(Self::new(drones, locations))
    }

    pub fn new(drones: Vec<Drone>, locations: Vec<Location>) -> Self {
        Self {
            drones,
            locations,
            timeout: None,
        }
    }

    /// Give up on allocations which take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run with the default allocator
    pub fn run_with_defaults(&self) -> BoxFuture<'static, Result<Success, Error>> {
        self.run(KnapsackAllocator::new())
    }

    async fn run_inner<A>(
        timeout: Option<Duration>,
        drones: Vec<Drone>,
        locations: Vec<Location>,
        allocator: A,
    ) -> Result<Success, Error>
    where
        A: Allocator + Send + 'static,
    {
        // The allocation is CPU-bound, so keep it off the async workers
        let task = tokio::task::spawn_blocking(move || allocator.allocate(&drones, &locations));

        let joined = match timeout {
            Some(limit) => tokio::time::timeout(limit, task).await.map_err(|_| {
                // the blocking thread keeps running until the allocation returns
                format!("allocation did not finish within {limit:?}")
            })?,
            None => task.await,
        };

        joined
            .map_err(|e| format!("allocation task failed: {e}"))?
            .map_err(|e| e.to_string())
    }
}

impl<A> Runner<A> for CsvRunner
where
    A: Allocator + Send + 'static,
{
    type Response = BoxFuture<'static, Result<Allocation, String>>;
    /// Trips per drone, plus whatever could not be delivered
    type Success = Allocation;
    /// Description of what went wrong
    type Error = String;

    fn run(&self, allocator: A) -> Self::Response {
        let drones = self.drones.clone();
        let locations = self.locations.clone();
        let timeout = self.timeout;
        Box::pin(async move { Self::run_inner(timeout, drones, locations, allocator).await })
    }
}
