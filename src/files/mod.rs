//! Root-directory file loading.

pub mod loader;

pub use loader::load;
