// src/call_sites/registry.rs
//
// Named table of the demo call sites, used by the CLI and the wasm facade to
// list and run them. Only front ends read this table; the helper never does.

use crate::error::{FnArgError, Result};
use crate::output::OutputBuffer;
use crate::types::{CallSiteReport, Message};

pub struct CallSite {
    pub name: &'static str,
    pub description: &'static str,
    pub input: &'static str,
    pub run: fn(&mut OutputBuffer) -> Result<Message>,
}

lazy_static::lazy_static! {
    static ref CALL_SITES: Vec<CallSite> = vec![
        CallSite {
            name: "really",
            description: "prefixes the base message with \"really \"",
            input: "awesome",
            run: |_| Ok(super::really_super()),
        },
        CallSite {
            name: "logged",
            description: "logs the base message and passes it through",
            input: "cool",
            run: |out| Ok(super::logged_super(out)),
        },
        CallSite {
            name: "mega",
            description: "prefixes the base message with \"mega \"",
            input: "rad",
            run: |_| Ok(super::mega_super()),
        },
    ];
}

pub fn call_sites() -> &'static [CallSite] {
    &CALL_SITES
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static CallSite> {
    CALL_SITES.iter().find(|site| site.name.eq_ignore_ascii_case(name))
}

impl CallSite {
    /// Runs this call site against a fresh output buffer.
    pub fn report(&self) -> Result<CallSiteReport> {
        let mut out = OutputBuffer::new();
        let output = (self.run)(&mut out)?;
        log::debug!("call site {} produced {:?}", self.name, output.as_str());
        Ok(CallSiteReport {
            name: self.name.to_string(),
            input: self.input.to_string(),
            output,
            logged: out.take_lines(),
        })
    }
}

pub fn run(name: &str) -> Result<CallSiteReport> {
    find(name)
        .ok_or_else(|| FnArgError::UnknownCallSite(name.to_string()))?
        .report()
}

/// Runs every registered call site in table order, stopping at the first
/// failure.
pub fn run_all() -> Result<Vec<CallSiteReport>> {
    CALL_SITES.iter().map(CallSite::report).collect()
}
