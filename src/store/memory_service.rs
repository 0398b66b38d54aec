use std::collections::HashMap;
use std::fs;
use std::sync::RwLock;

use log::info;

use crate::types::error::StoreError;
use crate::types::item::Item;

pub struct MemoryService {
    pub(crate) cars: RwLock<HashMap<u32, Item>>,
}

impl MemoryService {
    pub fn new() -> Self {
        MemoryService {
            cars: RwLock::new(HashMap::new()),
        }
    }

    /// Seeds the store from a JSON file mapping string-encoded ids to items.
    /// Any failure here is fatal to startup.
    pub fn from_file(path: &str) -> Result<Self, StoreError> {
        info!("Loading car data from {}...", path);

        let raw = fs::read_to_string(path)?;
        let entries: HashMap<String, Item> = serde_json::from_str(&raw)?;

        let mut cars = HashMap::with_capacity(entries.len());
        for (key, item) in entries {
            let id: u32 = key.parse().map_err(|_| StoreError::InvalidId(key.clone()))?;

            // keys like "1" and "01" normalize to the same id
            if cars.insert(id, item).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }

        info!("Loaded {} cars.", cars.len());

        Ok(MemoryService {
            cars: RwLock::new(cars),
        })
    }
}

impl Default for MemoryService {
    fn default() -> Self {
        Self::new()
    }
}
