pub mod config;
pub mod error;
pub mod registry;
pub mod server;

pub use config::RentalConfig;
pub use error::{RentalError, Result};
pub use registry::{Item, ItemRegistry, MemoryRegistry, Rental};
pub use server::RentalServer;
