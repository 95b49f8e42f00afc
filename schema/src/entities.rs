use crate::{CapacityExceededError, ValidationError};

/// Package weights and carry capacities, in whole units
pub type Weight = u64;

/// A `Location` to which a drone delivers a single package
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    name: String,
    weight: Weight,
}

impl Location {
    pub fn new(name: impl Into<String>, weight: Weight) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyLocationName);
        }
        if weight == 0 {
            return Err(ValidationError::ZeroWeight);
        }

        Ok(Self { name, weight })
    }

    /// Reads `name, weight` records, one per line
    pub fn from_csv(path: &str) -> Result<Vec<Self>, Box<dyn std::error::Error>> {
        read_records(path)?
            .into_iter()
            .map(|(name, weight)| Self::new(name, weight).map_err(Into::into))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight of the package bound for this location
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Locations served together by one flight, in the order they were dispatched
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    locations: Vec<Location>,
}

impl Trip {
    pub fn location_names(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|location| location.name.clone())
            .collect()
    }
}

/// A carrier with a fixed max capacity and the trips it has been given so far
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drone {
    name: String,
    max_capacity: Weight,
    trips: Vec<Trip>,
}

impl Drone {
    pub fn new(name: impl Into<String>, max_capacity: Weight) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyDroneName);
        }
        if max_capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }

        Ok(Self {
            name,
            max_capacity,
            trips: Vec::new(),
        })
    }

    /// Reads `name, max capacity` records, one per line
    pub fn from_csv(path: &str) -> Result<Vec<Self>, Box<dyn std::error::Error>> {
        read_records(path)?
            .into_iter()
            .map(|(name, capacity)| Self::new(name, capacity).map_err(Into::into))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_capacity(&self) -> Weight {
        self.max_capacity
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Records a new trip to `locations`, in the given order.
    ///
    /// Fails without touching the drone if the packages together weigh more than
    /// its max capacity, whoever the caller is.
    pub fn deliver(&mut self, locations: Vec<Location>) -> Result<(), CapacityExceededError> {
        let total = locations
            .iter()
            .try_fold(0 as Weight, |acc, location| acc.checked_add(location.weight));

        match total {
            Some(total) if total <= self.max_capacity => {
                self.trips.push(Trip { locations });
                Ok(())
            }
            total => Err(CapacityExceededError {
                drone: self.name.clone(),
                capacity: self.max_capacity,
                requested: total.unwrap_or(Weight::MAX),
            }),
        }
    }
}

fn read_records(path: &str) -> Result<Vec<(String, Weight)>, Box<dyn std::error::Error>> {
    let csv_bytes = std::fs::read(path)?;
    let mut records = vec![];

    for (line_number, line) in String::from_utf8(csv_bytes)?.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = line.split(", ").collect::<Vec<_>>();
        let [name, weight] = values.as_slice() else {
            return Err(format!("{path}:{}: expected `name, weight`", line_number + 1).into());
        };
        records.push((name.trim().to_string(), weight.trim().parse::<Weight>()?));
    }

    Ok(records)
}
