//! Karatsuba multiplication of arbitrary-precision natural numbers.
//!
//! Operands are [`Natural`]s, so negative inputs are rejected when a value is
//! built (`TryFrom<i64>`, `FromStr`) rather than inside the kernel.
//!
//! ```
//! use divconq_karatsuba::{karatsuba_multiply, Natural};
//!
//! let x: Natural = "999999999".parse().unwrap();
//! let product = karatsuba_multiply(&x, &x);
//! assert_eq!(product.to_string(), "999999998000000001");
//! ```

mod config;
mod error;
mod karatsuba;
mod natural;

pub use crate::config::{KaratsubaConfig, BASE_CASE_DIGITS_ENV};
pub use crate::error::{Error, Result};
pub use crate::karatsuba::{karatsuba_multiply, schoolbook_multiply, CallStats, Combine, Karatsuba, Split, Tracer};
pub use crate::natural::Natural;

#[cfg(test)]
mod tests;
