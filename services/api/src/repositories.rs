//! Repositories for database operations
//!
//! Each repository owns a clone of the shared pool and expresses every
//! mutation as a single SQL statement; the store is the only serialization
//! point for concurrent requests.

pub mod cart;
pub mod food;
pub mod user;

pub use cart::CartRepository;
pub use food::FoodRepository;
pub use user::UserRepository;
