use actix_web::{web, App};
use std::sync::Arc;

use car_catalog::store::memory_service::MemoryService;

pub struct TestClient {
    pub store: Arc<MemoryService>,
}

impl TestClient {
    pub fn new(store: Arc<MemoryService>) -> Self {
        TestClient { store }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.store)))
            .configure(car_catalog::routes::configure_routes)
    }
}
