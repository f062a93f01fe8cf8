pub mod error;
pub mod models;
pub mod store;

pub use error::{Error, ErrorCode};
pub use models::*;
pub use store::{DesignStore, StoreError, VotingError};

#[cfg(test)]
mod tests;
