pub mod seed;
pub mod server;
pub mod store;

#[cfg(test)]
mod tests_api;

pub use server::{router, AppState};
pub use store::LibraryStore;

// Re-export the collaborator error for API consumers
pub use snipvault_common::StoreError;
