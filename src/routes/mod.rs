use actix_web::web;

pub mod health;
pub mod item;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    cfg.service(item::get_by_id::get_by_id)
        .service(item::get_by_name::get_by_name)
        .service(item::create::create)
        .service(item::patch::patch)
        .service(item::update::update)
        .service(item::delete::delete);
}
