//! Authentication helpers: credential stores and the bearer token injection hook.

pub mod token_injector;
pub mod token_store;

pub use token_injector::TokenInjector;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
