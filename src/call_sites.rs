// src/call_sites.rs
//
// Call sites: each one decides what it needs, builds a customization for it
// and hands that to the helper. None of them knows about the others, and none
// of them requires anything from the helper beyond its signature.

use crate::customizations::{self, log_passthrough, reject_longer_than};
use crate::error::Result;
use crate::helper::{superlative, try_superlative};
use crate::output::OutputBuffer;
use crate::types::Message;

pub mod registry;

pub use registry::{call_sites, find, run, run_all, CallSite};

/// `"awesome"` → `"really super awesome"`.
pub fn really_super() -> Message {
    superlative("awesome", customizations::prefix("really "))
}

/// `"cool"` → `"super cool"`, writing `"super cool"` to `out` on the way.
pub fn logged_super(out: &mut OutputBuffer) -> Message {
    superlative("cool", log_passthrough(out))
}

/// `"rad"` → `"mega super rad"`.
pub fn mega_super() -> Message {
    superlative("rad", |message: Message| message.prepend("mega "))
}

/// Any input, any prefix.
pub fn prefixed_super(input: &str, prefix: &str) -> Message {
    superlative(input, customizations::prefix(prefix))
}

/// Like [`prefixed_super`] without a prefix, but refuses results longer than
/// `max_len` characters. The refusal comes back exactly as the customization
/// produced it.
pub fn bounded_super(input: &str, max_len: usize) -> Result<Message> {
    try_superlative(input, reject_longer_than(max_len))
}
