//! Supply/demand schedule and its equilibrium.

pub mod entities;
pub mod services;

pub use entities::*;
pub use services::*;
