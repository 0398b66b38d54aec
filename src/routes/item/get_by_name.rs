use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[get("/get-by-name")]
async fn get_by_name(
    store: web::Data<Arc<MemoryService>>,
    query: web::Query<NameQuery>,
) -> ApiResult<Item> {
    let item = store
        .get_item_by_name(query.name.as_deref())
        .ok_or(AppError::NotFound("Item name not found"))?;

    Ok(ApiResponse::Ok(item))
}
