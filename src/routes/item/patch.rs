use actix_web::{patch, web};
use std::sync::Arc;

use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::item::{Item, UpdateItem};
use crate::types::response::{ApiResponse, ApiResult};

#[patch("/patch-item/{item_id}")]
async fn patch(
    store: web::Data<Arc<MemoryService>>,
    path: web::Path<u32>,
    body: web::Json<UpdateItem>,
) -> ApiResult<Item> {
    let item_id = path.into_inner();

    let item = store
        .patch_item(item_id, body.into_inner())
        .ok_or(AppError::NotFound("Item not found"))?;

    Ok(ApiResponse::Ok(item))
}
