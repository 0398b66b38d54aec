use actix_web::{delete, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub item_id: u32,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteRes {
    #[serde(rename = "Success")]
    pub success: String,
}

#[delete("/delete-item")]
async fn delete(
    store: web::Data<Arc<MemoryService>>,
    query: web::Query<DeleteQuery>,
) -> ApiResult<DeleteRes> {
    store
        .delete_item(query.item_id)
        .ok_or(AppError::NotFound("Item ID does not exist"))?;

    Ok(ApiResponse::Ok(DeleteRes {
        success: "Item deleted".to_string(),
    }))
}
