//! Boundary behavior for integer lattice coordinates.

/// How an out-of-range integer coordinate maps back onto an axis.
///
/// # Examples
///
/// ```
/// use physarum_space::EdgeBehavior;
///
/// assert_eq!(EdgeBehavior::Wrap.resolve(-1, 10), 9);
/// assert_eq!(EdgeBehavior::Clamp.resolve(-1, 10), 0);
/// assert_eq!(EdgeBehavior::Clamp.resolve(12, 10), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range coordinates map to the nearest boundary cell.
    Clamp,
    /// Out-of-range coordinates wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve `val` onto an axis of `len` cells. `len` must be non-zero.
    pub fn resolve(self, val: i64, len: u32) -> usize {
        let n = len as i64;
        if val >= 0 && val < n {
            return val as usize;
        }
        match self {
            EdgeBehavior::Clamp => val.clamp(0, n - 1) as usize,
            EdgeBehavior::Wrap => val.rem_euclid(n) as usize,
        }
    }
}
