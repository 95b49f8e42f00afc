mod allocator;
mod knapsack;
mod runner;
mod tiers;

pub use allocator::KnapsackAllocator;
pub use runner::CsvRunner;
