use crate::store::memory_service::MemoryService;
use crate::types::item::{Item, UpdateItem};

impl MemoryService {
    pub fn get_item_by_id(&self, id: u32) -> Option<Item> {
        self.cars.read().ok()?.get(&id).cloned()
    }

    pub fn get_item_by_name(&self, name: Option<&str>) -> Option<Item> {
        let cars = self.cars.read().ok()?;

        // linear scan, first exact match wins; an absent name matches nothing
        cars.values()
            .find(|item| Some(item.name.as_str()) == name)
            .cloned()
    }

    pub fn create_item(&self, id: u32, item: Item) -> Option<Item> {
        let mut cars = self.cars.write().ok()?;

        if cars.contains_key(&id) {
            return None;
        }

        cars.insert(id, item.clone());

        Some(item)
    }

    pub fn patch_item(&self, id: u32, patch: UpdateItem) -> Option<Item> {
        let mut cars = self.cars.write().ok()?;
        let item = cars.get_mut(&id)?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(model) = patch.model {
            item.model = model;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        // a patch cannot clear the tint flag, only set it
        if let Some(Some(tint)) = patch.tint {
            item.tint = Some(tint);
        }

        Some(item.clone())
    }

    pub fn put_item(&self, id: u32, update: UpdateItem) -> Option<Item> {
        let mut cars = self.cars.write().ok()?;
        let current = cars.get(&id)?.clone();

        // overlay the provided fields and replace the entry wholesale;
        // an explicit null tint clears the flag
        let updated = Item {
            name: update.name.unwrap_or(current.name),
            model: update.model.unwrap_or(current.model),
            price: update.price.unwrap_or(current.price),
            tint: update.tint.unwrap_or(current.tint),
        };

        cars.insert(id, updated.clone());

        Some(updated)
    }

    pub fn delete_item(&self, id: u32) -> Option<()> {
        self.cars.write().ok()?.remove(&id).map(|_| ())
    }
}
