//! Cell state codes and the finite set a rule may produce.

use std::fmt;

/// A cell's state code.
///
/// Codes are small non-negative integers; their meaning is defined by the
/// rule that owns the grid (e.g. `0 = dead, 1 = alive` for Life).
pub type CellState = u8;

/// The finite set of state codes a rule declares.
///
/// Every committed grid of an automaton holds only codes from its rule's
/// `StateSet`. Codes are stored in ascending order without duplicates.
///
/// # Examples
///
/// ```
/// use cellauto_core::StateSet;
///
/// let forest = StateSet::new(&[0, 1, 2]);
/// assert!(forest.contains(2));
/// assert!(!forest.contains(3));
/// assert_eq!(forest.len(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateSet {
    codes: &'static [CellState],
}

impl StateSet {
    /// `{0, 1}`: dead/alive or off/on.
    pub const BINARY: Self = Self { codes: &[0, 1] };

    /// Wrap a static list of codes.
    ///
    /// # Panics
    ///
    /// Panics if `codes` is empty or not strictly ascending.
    pub const fn new(codes: &'static [CellState]) -> Self {
        assert!(!codes.is_empty(), "state set must not be empty");
        let mut i = 1;
        while i < codes.len() {
            assert!(
                codes[i - 1] < codes[i],
                "state codes must be strictly ascending"
            );
            i += 1;
        }
        Self { codes }
    }

    /// Whether `state` is a member of the set.
    pub fn contains(&self, state: CellState) -> bool {
        self.codes.binary_search(&state).is_ok()
    }

    /// Number of codes in the set.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always returns `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The codes in ascending order.
    pub fn codes(&self) -> &'static [CellState] {
        self.codes
    }

    /// Iterate over the codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + 'static {
        self.codes.iter().copied()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.codes).finish()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{code}")?;
        }
        write!(f, "}}")
    }
}
