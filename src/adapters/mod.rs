// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod firebase;
pub mod snapshot;
pub mod storage;
