//! Greeting composition.
//!
//! The input name is interpolated into a fixed template with no
//! validation or transformation: empty strings, control characters, and
//! arbitrary length all pass through unchanged.

/// Compose a greeting for `name` using the template `"Hello, {name}!"`.
///
/// Returns a freshly allocated `String`; the input is never modified.
pub fn greet(name: &str) -> String {
    tracing::trace!(name, "greet");
    format!("Hello, {name}!")
}
