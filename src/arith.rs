//! Integer arithmetic helpers.
//!
//! Wraparound is part of the contract: overflow never panics, the sum
//! wraps with two's-complement semantics like a native 32-bit `int`.

/// Add two signed 32-bit integers, wrapping on overflow.
///
/// Total over all inputs. The plain `+` operator would panic on overflow
/// in debug builds, so the wrap is explicit.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    let sum = a.wrapping_add(b);
    tracing::trace!(a, b, sum, "add");
    sum
}
