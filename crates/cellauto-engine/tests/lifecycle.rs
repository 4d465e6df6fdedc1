//! Integration test: construction, determinism, and the render hook.

use cellauto_core::{RuleError, StepId};
use cellauto_engine::{
    Automaton, AutomatonConfig, ConfigError, InitialState, RecordingRenderer, TextRenderer,
};
use cellauto_rules::{
    AnyRule, AutomatonKind, ElementaryRule, ForestFireRule, LifeRule, MajorityRule, Rule,
};
use cellauto_space::SpaceError;
use cellauto_test_utils::fixtures::centre_seed;
use cellauto_test_utils::{grid_from_art, seeded_rng, FixedRng};

fn random_forest(seed: u64) -> Automaton<ForestFireRule> {
    let config = AutomatonConfig::forest_fire(32, 32, 0.6, 0.001)
        .unwrap()
        .with_seed(seed)
        .with_initial(InitialState::Random);
    Automaton::new(config).unwrap()
}

// ── evolve(0) ───────────────────────────────────────────────────────

#[test]
fn evolve_zero_is_identity_for_every_rule() {
    let rules: [AnyRule; 4] = [
        ElementaryRule::new(110).unwrap().into(),
        ForestFireRule::new(0.5, 0.1).unwrap().into(),
        LifeRule::new().into(),
        MajorityRule::new(3).unwrap().into(),
    ];
    for rule in rules {
        let rows = if rule.kind() == AutomatonKind::Elementary { 1 } else { 6 };
        let config = AutomatonConfig::new(rows, 6, rule)
            .with_seed(11)
            .with_initial(InitialState::Random);
        let mut ca = Automaton::new(config).unwrap();
        let before = ca.snapshot();
        let mut frames = RecordingRenderer::new();
        let summary = ca.evolve_rendered(0, &mut frames);
        assert_eq!(ca.grid(), &before, "{}", rule.name());
        assert_eq!(ca.step_id(), StepId::ZERO);
        assert_eq!(summary.steps, 0);
        assert!(frames.frames().is_empty());
    }
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn same_seed_same_history() {
    let mut a = random_forest(77);
    let mut b = random_forest(77);
    for _ in 0..20 {
        let ma = a.step();
        let mb = b.step();
        assert_eq!(ma.population, mb.population);
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn different_seeds_diverge() {
    let a = random_forest(1);
    let b = random_forest(2);
    assert_ne!(a.grid(), b.grid());
}

#[test]
fn injected_rng_controls_ignition() {
    let seed = grid_from_art(&["+++", "+++"]);
    let rule = ForestFireRule::new(0.5, 0.01).unwrap();

    let config = AutomatonConfig::new(2, 3, rule).with_initial(InitialState::Grid(seed.clone()));
    let mut always = Automaton::with_rng(config.clone(), FixedRng::low()).unwrap();
    always.step();
    assert_eq!(always.grid().count(2), 6);

    let mut never = Automaton::with_rng(config, FixedRng::high()).unwrap();
    never.evolve(5);
    assert_eq!(never.grid(), &seed);
}

#[test]
fn with_rng_matches_new_for_equal_seed() {
    let config = AutomatonConfig::life(10, 10)
        .unwrap()
        .with_seed(5)
        .with_initial(InitialState::Random);
    let a = Automaton::new(config.clone()).unwrap();
    let b = Automaton::with_rng(config, seeded_rng(5)).unwrap();
    assert_eq!(a.grid(), b.grid());
}

// ── Construction failures ───────────────────────────────────────────

#[test]
fn invalid_parameters_fail_before_any_step() {
    assert_eq!(
        AutomatonConfig::elementary(8, 256, &[0; 8]).unwrap_err(),
        ConfigError::Rule(RuleError::RuleCodeOutOfRange { code: 256 })
    );
    assert!(matches!(
        AutomatonConfig::forest_fire(4, 4, f64::NAN, 0.0),
        Err(ConfigError::Rule(RuleError::ProbabilityOutOfRange { .. }))
    ));
    assert_eq!(
        AutomatonConfig::majority(4, 4, 0).unwrap_err(),
        ConfigError::Rule(RuleError::InvalidWindow { side: 0 })
    );
    assert_eq!(
        Automaton::new(AutomatonConfig::new(0, 4, LifeRule::new()))
            .unwrap_err(),
        ConfigError::Space(SpaceError::EmptySpace)
    );
}

#[test]
fn errors_render_readable_messages() {
    let err = AutomatonConfig::elementary(5, 90, &[1, 0]).unwrap_err();
    assert_eq!(err.to_string(), "initial row has 2 cells, expected 5");
}

// ── Rendering ───────────────────────────────────────────────────────

#[test]
fn text_renderer_prints_each_generation() {
    let config = AutomatonConfig::elementary(3, 90, &centre_seed(3)).unwrap();
    let mut ca = Automaton::new(config).unwrap();
    let mut text = TextRenderer::new();
    ca.render(&mut text);
    ca.evolve_rendered(1, &mut text);
    assert_eq!(text.as_str(), "Step 0\n0 1 0 \n\nStep 1\n1 0 1 \n\n");
}

#[test]
fn forest_text_uses_forest_glyphs() {
    let config = AutomatonConfig::forest_fire(1, 3, 0.5, 0.0)
        .unwrap()
        .with_initial(InitialState::Grid(grid_from_art(&["=+!"])));
    let ca = Automaton::new(config).unwrap();
    let mut text = TextRenderer::without_header();
    ca.render(&mut text);
    assert_eq!(text.into_string(), "= + ! \n\n");
}
