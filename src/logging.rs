// src/logging.rs
//
// Logger setup for the demo binary, plus the browser console mirror used when
// the crate runs as wasm.

#[cfg(all(target_arch = "wasm32", feature = "console-log"))]
use wasm_bindgen::JsValue;
#[cfg(all(target_arch = "wasm32", feature = "console-log"))]
use web_sys::console;

/// Installs a `fern` dispatcher that writes `[LEVEL target] message` lines to
/// stderr. `verbosity` 0 keeps this crate at info, 1 at debug, 2+ at trace.
pub fn setup_logger(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("fnarg_core", level)
        .level_for("fnarg_demo", level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

/// Mirrors a logged line to the browser console. No-op off wasm32.
#[cfg(all(target_arch = "wasm32", feature = "console-log"))]
pub fn console_line(line: &str) {
    console::log_1(&JsValue::from_str(line));
}

#[cfg(not(all(target_arch = "wasm32", feature = "console-log")))]
pub fn console_line(_line: &str) {}
