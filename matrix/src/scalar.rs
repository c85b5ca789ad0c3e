use crate::Error;

/// How the signed accumulators react when a sum leaves the `i32` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound.
    #[default]
    Wrapping,
    /// Clamp at `i32::MIN` / `i32::MAX`.
    Saturating,
    /// Stop and report an [`Error`].
    Checked,
}

impl OverflowPolicy {
    /// Adds an unsigned term to a signed accumulator. `None` means the
    /// checked policy detected an overflow.
    pub(crate) fn add_unsigned(self, acc: i32, rhs: u32) -> Option<i32> {
        match self {
            OverflowPolicy::Wrapping => Some(acc.wrapping_add_unsigned(rhs)),
            OverflowPolicy::Saturating => Some(acc.saturating_add_unsigned(rhs)),
            OverflowPolicy::Checked => acc.checked_add_unsigned(rhs),
        }
    }

    pub(crate) fn add_signed(self, acc: i32, rhs: i32) -> Option<i32> {
        match self {
            OverflowPolicy::Wrapping => Some(acc.wrapping_add(rhs)),
            OverflowPolicy::Saturating => Some(acc.saturating_add(rhs)),
            OverflowPolicy::Checked => acc.checked_add(rhs),
        }
    }
}

/// Multiplies `a` by `b` by adding `a` to a signed accumulator `b` times.
///
/// Runs in O(`b`) additions. The operands are unsigned while the result is
/// signed; sums outside the `i32` range are handled according to `policy`.
pub fn uimult(a: u32, b: u32, policy: OverflowPolicy) -> Result<i32, Error> {
    let mut sum = 0i32;
    let mut remaining = b;
    while remaining != 0 {
        remaining -= 1;
        sum = policy
            .add_unsigned(sum, a)
            .ok_or(Error::ScalarOverflow { a, b })?;
    }
    Ok(sum)
}
