//! Naive 4x4 matrix product used as a toolchain fixture.
//!
//! Every term of the product goes through [`uimult`], which multiplies by
//! repeated addition into a signed accumulator. The arithmetic is deliberately
//! slow and deliberately mixes unsigned inputs with signed sums.

mod error;
mod matrix;
mod product;
mod scalar;

pub use error::Error;
pub use matrix::{Labeled, Matrix, DIM};
pub use product::{multiply, multiply_with};
pub use scalar::{uimult, OverflowPolicy};

/// The product of [`Matrix::input_a`] and [`Matrix::input_b`].
pub fn fixture_product(policy: OverflowPolicy) -> Result<Matrix, Error> {
    multiply(&Matrix::input_a(), &Matrix::input_b(), policy)
}
