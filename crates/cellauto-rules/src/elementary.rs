//! Wolfram elementary one-dimensional rules.
//!
//! A rule code `r` in `0..=255` encodes the next state for each of the
//! eight `(left, centre, right)` patterns: pattern index
//! `4*left + 2*centre + right` selects bit `idx` of `r`.

use cellauto_core::{CellState, RuleError, StateSet};
use cellauto_space::{Neighbourhood, NeighbourhoodSpec, BOUNDARY_FILL};
use rand::Rng;

use crate::rule::{Glyphs, Rule};

/// An elementary cellular automaton rule in Wolfram numbering.
///
/// [`next_state`](Rule::next_state) reads the window positionally as
/// `(left, centre, right)`. A shorter window reads its missing positions as
/// [`BOUNDARY_FILL`]; extra positions are ignored.
///
/// # Examples
///
/// ```
/// use cellauto_rules::ElementaryRule;
///
/// let rule90 = ElementaryRule::new(90).unwrap();
/// // Rule 90 is left XOR right.
/// assert_eq!(rule90.lookup(1, 0, 0), 1);
/// assert_eq!(rule90.lookup(1, 1, 1), 0);
///
/// assert!(ElementaryRule::new(256).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryRule {
    code: u8,
}

impl ElementaryRule {
    /// Build the rule for `code`.
    ///
    /// Returns `Err(RuleError::RuleCodeOutOfRange)` if `code > 255`.
    pub fn new(code: u32) -> Result<Self, RuleError> {
        let code = u8::try_from(code).map_err(|_| RuleError::RuleCodeOutOfRange { code })?;
        Ok(Self { code })
    }

    /// The rule code.
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Next centre state for the window `(left, centre, right)`.
    ///
    /// Any non-zero input counts as 1.
    pub fn lookup(&self, left: CellState, centre: CellState, right: CellState) -> CellState {
        let idx = 4 * u8::from(left != 0) + 2 * u8::from(centre != 0) + u8::from(right != 0);
        (self.code >> idx) & 1
    }
}

impl Glyphs for ElementaryRule {}

impl Rule for ElementaryRule {
    fn name(&self) -> &str {
        "Elementary 1D"
    }

    fn states(&self) -> StateSet {
        StateSet::BINARY
    }

    fn neighbourhood(&self) -> NeighbourhoodSpec {
        NeighbourhoodSpec::linear()
    }

    fn next_state<G: Rng + ?Sized>(
        &self,
        _current: CellState,
        neighbours: &Neighbourhood,
        _rng: &mut G,
    ) -> CellState {
        let values = neighbours.values();
        let at = |i: usize| values.get(i).copied().unwrap_or(BOUNDARY_FILL);
        self.lookup(at(0), at(1), at(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Outputs for patterns 111, 110, 101, 100, 011, 010, 001, 000.
    fn table(rule: &ElementaryRule) -> [u8; 8] {
        let mut out = [0; 8];
        for (i, pattern) in (0..8u8).rev().enumerate() {
            out[i] = rule.lookup((pattern >> 2) & 1, (pattern >> 1) & 1, pattern & 1);
        }
        out
    }

    #[test]
    fn rule_30_table() {
        let rule = ElementaryRule::new(30).unwrap();
        assert_eq!(table(&rule), [0, 0, 0, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn rule_90_table() {
        let rule = ElementaryRule::new(90).unwrap();
        assert_eq!(table(&rule), [0, 1, 0, 1, 1, 0, 1, 0]);
    }

    #[test]
    fn rule_110_table() {
        let rule = ElementaryRule::new(110).unwrap();
        assert_eq!(table(&rule), [0, 1, 1, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn rule_0_and_255_are_constant() {
        let zero = ElementaryRule::new(0).unwrap();
        let full = ElementaryRule::new(255).unwrap();
        assert_eq!(table(&zero), [0; 8]);
        assert_eq!(table(&full), [1; 8]);
    }

    #[test]
    fn short_window_reads_fill_for_missing_positions() {
        let rule = ElementaryRule::new(30).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // (1, 0, 0) -> pattern 100 -> 1 under rule 30.
        assert_eq!(rule.next_state(0, &Neighbourhood::from(&[1][..]), &mut rng), 1);
        // (0, 0, 0) -> 0.
        assert_eq!(rule.next_state(0, &Neighbourhood::default(), &mut rng), 0);
        // Extra positions beyond the third are ignored: (0, 1, 0) -> 1.
        let wide = Neighbourhood::from(&[0, 1, 0, 1, 1][..]);
        assert_eq!(rule.next_state(0, &wide, &mut rng), 1);
    }

    #[test]
    fn rejects_code_above_255() {
        assert_eq!(
            ElementaryRule::new(256),
            Err(RuleError::RuleCodeOutOfRange { code: 256 })
        );
        assert!(ElementaryRule::new(u32::MAX).is_err());
    }

    #[test]
    fn next_state_reads_linear_window() {
        let rule = ElementaryRule::new(90).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let window = Neighbourhood::from(&[0, 0, 1][..]);
        assert_eq!(rule.next_state(0, &window, &mut rng), 1);
        assert_eq!(rule.neighbourhood(), NeighbourhoodSpec::linear());
        assert_eq!(rule.states(), StateSet::BINARY);
    }

    #[test]
    fn glyphs_are_digits() {
        let rule = ElementaryRule::new(30).unwrap();
        assert_eq!(rule.glyph(0), '0');
        assert_eq!(rule.glyph(1), '1');
    }

    proptest! {
        #[test]
        fn lookup_is_bit_of_code(code in 0u32..256, l in 0u8..2, c in 0u8..2, r in 0u8..2) {
            let rule = ElementaryRule::new(code).unwrap();
            let idx = 4 * l + 2 * c + r;
            prop_assert_eq!(rule.lookup(l, c, r) as u32, (code >> idx) & 1);
        }
    }
}
