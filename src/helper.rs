// src/helper.rs
//
// The reusable helper. It builds a base message from its input and hands the
// result to exactly one caller-supplied customization before returning.

use crate::types::Message;

/// Text placed in front of every input by the base computation.
pub const BASE_PREFIX: &str = "super ";

/// A single-method capability: take a message, give one back.
///
/// Every `FnOnce(Message) -> Message` closure already implements it, so
/// callers normally pass a closure. Types that want a name of their own can
/// implement it directly.
pub trait Customize {
    fn customize(self, message: Message) -> Message;
}

impl<F> Customize for F
where
    F: FnOnce(Message) -> Message,
{
    fn customize(self, message: Message) -> Message {
        self(message)
    }
}

/// The fixed part of the computation: `"super " + input`.
pub fn base_message(input: &str) -> Message {
    Message::new(input).prepend(BASE_PREFIX)
}

/// Builds the base message for `input` and returns whatever `customization`
/// makes of it.
///
/// [Responsibility]
/// - compute the base message
/// - apply the customization once, passing its result through untouched
///
/// [Usage]
/// - `superlative("day", |m: Message| m.prepend("a "))` → `"a super day"`
///
/// [Side effects]
/// - none of its own; anything observable comes from the customization
pub fn superlative<C>(input: &str, customization: C) -> Message
where
    C: Customize,
{
    let base = base_message(input);
    log::trace!("base message: {}", base);
    customization.customize(base)
}

/// Fallible variant of [`superlative`].
///
/// The customization's error is returned as-is; nothing is caught, wrapped
/// or retried.
pub fn try_superlative<F, E>(input: &str, customization: F) -> std::result::Result<Message, E>
where
    F: FnOnce(Message) -> std::result::Result<Message, E>,
{
    let base = base_message(input);
    log::trace!("base message: {}", base);
    customization(base)
}
