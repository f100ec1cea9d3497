pub mod repository;
pub mod routes;
pub mod selection;
pub mod service;

pub use routes::get_router;
