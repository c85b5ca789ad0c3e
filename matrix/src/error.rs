#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("scalar product {a} * {b} overflows the signed accumulator")]
    ScalarOverflow { a: u32, b: u32 },
    #[error("dot product for cell ({row}, {col}) overflows the signed accumulator")]
    DotProductOverflow { row: usize, col: usize },
}
