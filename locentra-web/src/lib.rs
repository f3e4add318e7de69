#![forbid(unsafe_code)]

#[cfg(target_arch = "wasm32")]
pub mod bridge;
pub mod components;
pub mod dom;
pub mod error;
pub mod render;
