// src/customizations.rs
//
// Ready-made customization callables. Call sites pick one of these (or write
// their own closure) and pass it to the helper.

use crate::error::{FnArgError, Result};
use crate::output::OutputBuffer;
use crate::types::Message;

/// Leaves the message alone.
pub fn identity() -> impl FnOnce(Message) -> Message {
    |message| message
}

/// Puts `prefix` in front of the message.
pub fn prefix(prefix: impl Into<String>) -> impl FnOnce(Message) -> Message {
    let prefix = prefix.into();
    move |message| message.prepend(&prefix)
}

/// Records the message as one line in `out`, then returns it unchanged.
///
/// The line also goes to the `log` facade at info level and, on wasm32 with
/// the `console-log` feature, to the browser console.
pub fn log_passthrough(out: &mut OutputBuffer) -> impl FnOnce(Message) -> Message + '_ {
    move |message| {
        log::info!("{}", message);
        crate::logging::console_line(message.as_str());
        out.push_line(message.as_str());
        message
    }
}

/// Fails with [`FnArgError::MessageTooLong`] when the message has more than
/// `max` characters.
pub fn reject_longer_than(max: usize) -> impl FnOnce(Message) -> Result<Message> {
    move |message| {
        let len = message.char_len();
        if len > max {
            return Err(FnArgError::too_long(len, max));
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(identity()(Message::from("super cool")), "super cool");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(prefix("really ")(Message::from("super awesome")), "really super awesome");
    }

    #[test]
    fn test_log_passthrough_records_one_line() {
        let mut out = OutputBuffer::new();
        let result = log_passthrough(&mut out)(Message::from("super cool"));
        assert_eq!(result, "super cool");
        assert_eq!(out.lines(), &["super cool".to_string()]);
    }

    #[test]
    fn test_reject_longer_than() {
        assert_eq!(reject_longer_than(9)(Message::from("super rad")), Ok(Message::from("super rad")));
        assert_eq!(
            reject_longer_than(5)(Message::from("super rad")),
            Err(FnArgError::MessageTooLong { len: 9, max: 5 })
        );
    }
}
