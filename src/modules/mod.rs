pub mod return_reason;

mod router;
pub use router::get_router;
