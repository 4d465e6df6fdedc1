//! Transition rules for cellauto.
//!
//! Every automaton variant is a [`Rule`]: a stateless per-cell transition
//! that declares its state set and neighbourhood shape. The driver in
//! `cellauto-engine` is generic over the rule, so variants plug in without
//! virtual dispatch.
//!
//! | Rule | States | Neighbourhood |
//! |------|--------|---------------|
//! | [`ElementaryRule`] | `{0, 1}` | linear window |
//! | [`ForestFireRule`] | `{EMPTY, TREE, BURNING}` | Moore ring |
//! | [`LifeRule`] | `{DEAD, ALIVE}` | Moore ring |
//! | [`MajorityRule`] | `{0, 1}` | odd square window |
//!
//! [`AnyRule`] wraps all four for runtime selection.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod any;
pub mod elementary;
pub mod forest_fire;
pub mod life;
pub mod majority;
pub mod rule;

pub use any::{AnyRule, AutomatonKind};
pub use elementary::ElementaryRule;
pub use forest_fire::{ForestFireRule, ForestFireRuleBuilder};
pub use life::LifeRule;
pub use majority::MajorityRule;
pub use rule::{Glyphs, Rule};
