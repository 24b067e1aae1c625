// Adapters layer: concrete implementations for external systems.

pub mod figma;
pub mod storage;

pub use figma::FigmaClient;
pub use storage::LocalStorage;
