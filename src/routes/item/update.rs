use actix_web::{put, web};
use std::sync::Arc;

use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::item::{Item, UpdateItem};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/update-item/{item_id}")]
async fn update(
    store: web::Data<Arc<MemoryService>>,
    path: web::Path<u32>,
    body: web::Json<UpdateItem>,
) -> ApiResult<Item> {
    let item_id = path.into_inner();

    let item = store
        .put_item(item_id, body.into_inner())
        .ok_or(AppError::NotFound("Item ID does not exist"))?;

    Ok(ApiResponse::Ok(item))
}
