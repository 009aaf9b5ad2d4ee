//! Client for the t2 traffic exchange, the carrier's marketplace where
//! subscribers resell unused minutes, gigabytes and SMS as lots.
mod client;
mod date;
mod error;
mod headers;
pub mod inventory;
mod page;
pub mod pricing;
pub mod schema;

pub use client::Client;
pub use error::Error;
pub use inventory::AvailableForSale;

pub type Result<T> = std::result::Result<T, Error>;
