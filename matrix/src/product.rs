use crate::{uimult, Error, Matrix, OverflowPolicy, DIM};

/// Computes `a * b`, forming every term with [`uimult`].
pub fn multiply(a: &Matrix, b: &Matrix, policy: OverflowPolicy) -> Result<Matrix, Error> {
    multiply_with(a, b, policy, |x, y| uimult(x, y, policy))
}

/// Computes `a * b` with the textbook `i, j, k` loop nest, forming each term
/// with `scalar`.
///
/// Each cell is summed in a signed accumulator under `policy` and stored back
/// as its two's-complement bit pattern. `scalar` is called exactly
/// `DIM * DIM * DIM` times, in loop order, unless an error stops the product
/// early.
pub fn multiply_with(
    a: &Matrix,
    b: &Matrix,
    policy: OverflowPolicy,
    mut scalar: impl FnMut(u32, u32) -> Result<i32, Error>,
) -> Result<Matrix, Error> {
    let mut c = Matrix::zero();
    for row in 0..DIM {
        for col in 0..DIM {
            let mut sum = 0i32;
            for k in 0..DIM {
                let term = scalar(a[(row, k)], b[(k, col)])?;
                sum = policy
                    .add_signed(sum, term)
                    .ok_or(Error::DotProductOverflow { row, col })?;
            }
            log::trace!("c[{row}][{col}] = {sum}");
            c[(row, col)] = sum as u32;
        }
    }
    log::debug!("Computed {DIM}x{DIM} product with {policy:?} overflow policy");
    Ok(c)
}
