use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{self, Airport, AirportV2};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate airport name: {0}")]
    DuplicateName(String),
}

struct Records {
    entries: Vec<AirportV2>,
    by_name: HashMap<String, usize>,
}

/// In-memory airport records, keyed by name, listed in load order
pub struct AirportStore {
    records: RwLock<Records>,
}

impl AirportStore {
    pub fn new(entries: Vec<AirportV2>) -> Result<Self, StoreError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.airport.name.clone(), idx).is_some() {
                return Err(StoreError::DuplicateName(entry.airport.name.clone()));
            }
        }

        info!("Loaded {} airport records", entries.len());
        Ok(Self {
            records: RwLock::new(Records { entries, by_name }),
        })
    }

    /// Store populated with the built-in seed records
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(models::seed())
    }

    pub async fn list(&self) -> Vec<Airport> {
        let records = self.records.read().await;
        records.entries.iter().map(|e| e.airport.clone()).collect()
    }

    pub async fn list_v2(&self) -> Vec<AirportV2> {
        self.records.read().await.entries.clone()
    }

    #[cfg(test)]
    pub async fn get(&self, name: &str) -> Option<Airport> {
        let records = self.records.read().await;
        records
            .by_name
            .get(name)
            .map(|&idx| records.entries[idx].airport.clone())
    }

    /// Replace the image reference of the named airport.
    /// Returns false if no airport has that name.
    pub async fn set_image_url(&self, name: &str, image_url: &str) -> bool {
        let mut records = self.records.write().await;
        let Some(&idx) = records.by_name.get(name) else {
            return false;
        };

        records.entries[idx].airport.image_url = image_url.to_string();
        debug!("Set image_url for {} to {}", name, image_url);
        true
    }
}
