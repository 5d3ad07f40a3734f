// src/wasm_api.rs
//
// JavaScript-facing wrapper around the call sites.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use crate::call_sites::{self, CallSite};
use crate::output::OutputBuffer;
use crate::types::{CallSiteReport, Message};

#[derive(Serialize)]
struct CallSiteInfo {
    name: &'static str,
    description: &'static str,
    input: &'static str,
}

impl From<&CallSite> for CallSiteInfo {
    fn from(site: &CallSite) -> Self {
        CallSiteInfo {
            name: site.name,
            description: site.description,
            input: site.input,
        }
    }
}

/// Shape handed to JavaScript by `run`: a plain object with
/// `status`, `name`, `input`, `output` and `logged`.
#[derive(Debug, PartialEq, Serialize)]
struct RunResult {
    status: &'static str,
    name: String,
    input: String,
    output: Message,
    logged: Vec<String>,
}

impl From<CallSiteReport> for RunResult {
    fn from(report: CallSiteReport) -> Self {
        RunResult {
            status: "OK",
            name: report.name,
            input: report.input,
            output: report.output,
            logged: report.logged,
        }
    }
}

#[wasm_bindgen]
pub struct FnArgDemo {
    output: OutputBuffer,
}

#[wasm_bindgen]
impl FnArgDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        FnArgDemo {
            output: OutputBuffer::new(),
        }
    }

    #[wasm_bindgen]
    pub fn list_call_sites(&self) -> Result<JsValue, String> {
        let sites: Vec<CallSiteInfo> = call_sites::call_sites().iter().map(CallSiteInfo::from).collect();
        to_value(&sites).map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn call_site_names(&self) -> JsValue {
        let arr = js_sys::Array::new();
        for site in call_sites::call_sites() {
            arr.push(&JsValue::from_str(site.name));
        }
        arr.into()
    }

    /// Runs a registered call site. Lines it logs are also appended to this
    /// demo's output, readable through `get_output`.
    #[wasm_bindgen]
    pub fn run(&mut self, name: &str) -> Result<JsValue, String> {
        let result = self.record_run(name)?;
        to_value(&result).map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn run_prefixed(&self, input: &str, prefix: &str) -> String {
        call_sites::prefixed_super(input, prefix).into_string()
    }

    #[wasm_bindgen]
    pub fn run_bounded(&self, input: &str, max_len: usize) -> Result<String, String> {
        call_sites::bounded_super(input, max_len)
            .map(|message| message.into_string())
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn get_output(&self) -> String {
        self.output.get_output()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.output.clear();
    }
}

impl FnArgDemo {
    fn record_run(&mut self, name: &str) -> Result<RunResult, String> {
        let report = call_sites::run(name).map_err(|e| e.to_string())?;
        for line in &report.logged {
            self.output.push_line(line.as_str());
        }
        Ok(RunResult::from(report))
    }
}

impl Default for FnArgDemo {
    fn default() -> Self {
        Self::new()
    }
}
