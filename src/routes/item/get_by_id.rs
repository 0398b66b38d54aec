use actix_web::{get, web};
use std::sync::Arc;

use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/get-by-id/{item_id}")]
async fn get_by_id(
    store: web::Data<Arc<MemoryService>>,
    path: web::Path<u32>,
) -> ApiResult<Item> {
    let item_id = path.into_inner();

    let item = store
        .get_item_by_id(item_id)
        .ok_or(AppError::NotFound("Item ID not found"))?;

    Ok(ApiResponse::Ok(item))
}
