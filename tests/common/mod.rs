use std::sync::Arc;

use car_catalog::store::memory_service::MemoryService;

pub mod client;

pub struct TestContext {
    pub store: Arc<MemoryService>,
}

impl TestContext {
    pub fn new() -> TestContext {
        let store = Arc::new(MemoryService::new());

        for (id, item) in test_data::seed_cars() {
            store.create_item(id, item).expect("Failed to seed car");
        }

        TestContext { store }
    }
}

// Test data helpers
pub mod test_data {
    use car_catalog::types::item::Item;

    pub fn civic() -> Item {
        Item {
            name: "Civic".to_string(),
            model: 2020,
            price: 22000.0,
            tint: None,
        }
    }

    pub fn corolla() -> Item {
        Item {
            name: "Corolla".to_string(),
            model: 2021,
            price: 24500.0,
            tint: Some(true),
        }
    }

    #[allow(dead_code)]
    pub fn accord() -> Item {
        Item {
            name: "Accord".to_string(),
            model: 2019,
            price: 19500.5,
            tint: Some(false),
        }
    }

    pub fn seed_cars() -> Vec<(u32, Item)> {
        vec![(1, civic()), (2, corolla())]
    }
}
