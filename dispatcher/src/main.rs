use std::env;
use std::time::Duration;

use itertools::Itertools;

use dispatcher::CsvRunner;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let drones_path = env::var("DRONES_CSV_PATH")
        .unwrap_or_else(|_| schema::SAMPLE_DRONES_CSV_PATH.to_string());
    let locations_path = env::var("LOCATIONS_CSV_PATH")
        .unwrap_or_else(|_| schema::SAMPLE_LOCATIONS_CSV_PATH.to_string());
    let timeout = env::var("ALLOCATION_TIMEOUT_SECS")
        .ok()
        .map(|secs| secs.parse::<u64>())
        .transpose()?
        .map(Duration::from_secs);

    let mut runner = CsvRunner::from_csv_paths(&drones_path, &locations_path)?;
    if let Some(timeout) = timeout {
        runner = runner.with_timeout(timeout);
    }

    log::info!("allocating {} against {}", locations_path, drones_path);
    let allocation = runner.run_with_defaults().await?;

    for drone in &allocation.drones {
        println!("[{}]", drone.name);
        for (i, trip) in drone.trips.iter().enumerate() {
            println!("Trip #{}", i + 1);
            println!("{}", trip.iter().map(|name| format!("[{name}]")).join(", "));
        }
        println!();
    }

    if !allocation.undelivered.is_empty() {
        println!("[Undelivered]");
        println!(
            "{}",
            allocation
                .undelivered_names()
                .iter()
                .map(|name| format!("[{name}]"))
                .join(", ")
        );
    }

    Ok(())
}
