//! JavaScript-facing bridge. No logic here, only conversion to and from JSON.

pub mod wasm_api;

pub use wasm_api::*;
