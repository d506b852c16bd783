//! # mylib
//!
//! A minimal utility library with two pure, stateless operations:
//! wrapping signed integer addition and greeting composition.
//!
//! Both operations are total: they accept every value of their input
//! types and cannot fail. There is no shared state, so they may be
//! called concurrently from any number of threads without coordination.
//!
//! ## Quick start
//!
//! ```rust
//! use mylib::{add, greet};
//!
//! assert_eq!(add(1, 2), 3);
//! assert_eq!(greet("Alice"), "Hello, Alice!");
//! ```

pub mod arith;
pub mod greet;

pub use arith::add;
pub use greet::greet;
