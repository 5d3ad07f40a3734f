// src/lib.rs
//
// Passing a function as an argument: one reusable helper, one customization
// point, any number of independent call sites.

pub mod error;
pub mod types;
pub mod helper;
pub mod customizations;
pub mod output;
pub mod call_sites;
pub mod logging;
pub mod wasm_api;

pub use error::{FnArgError, Result};
pub use helper::{base_message, superlative, try_superlative, Customize, BASE_PREFIX};
pub use output::OutputBuffer;
pub use types::{CallSiteReport, Message};
pub use wasm_api::FnArgDemo;
