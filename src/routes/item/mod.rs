pub mod create;
pub mod delete;
pub mod get_by_id;
pub mod get_by_name;
pub mod patch;
pub mod update;
