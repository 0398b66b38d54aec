use actix_web::{post, web};
use std::sync::Arc;

use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult};

#[post("/create-item/{item_id}")]
async fn create(
    store: web::Data<Arc<MemoryService>>,
    path: web::Path<u32>,
    body: web::Json<Item>,
) -> ApiResult<Item> {
    let item_id = path.into_inner();

    let item = store
        .create_item(item_id, body.into_inner())
        .ok_or(AppError::AlreadyExists("Item ID already exists."))?;

    Ok(ApiResponse::Created(item))
}
