//! Position-wise modular arithmetic over digit sequences.
//!
//! Each position is independent: there is no carry or borrow between digits.
//! Both operations truncate to the shorter operand. The Feistel engine always
//! passes equal-length operands, so truncation never drops data in practice.

/// `out[i] = (a[i] + b[i]) mod radix` for `i < min(a.len(), b.len())`.
pub fn add(radix: usize, a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x % radix + y % radix) % radix)
        .collect()
}

/// `out[i] = (a[i] - b[i]) mod radix`, normalised into `[0, radix)`.
///
/// Truncates to the shorter operand like [`add`].
pub fn sub(radix: usize, a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x % radix + radix - y % radix) % radix)
        .collect()
}
