// tests/config_tests.rs
//
// Конфиг движка: SessionRegistry::new проверяет его сам, даже если
// EngineConfig собран в коде, а не разобран из JSON.
//
// Кейсы:
//   1) rounds_per_player = 0 → реестр не создаётся
//   2) пустая палитра → реестр не создаётся, партий нет
//   3) JSON с частью полей → остальное по умолчанию

use std::sync::Arc;

use drawvote_engine::domain::Palette;
use drawvote_engine::infra::ConfigError;
use drawvote_engine::{DeterministicRng, EngineConfig, SessionRegistry, SubscriberRegistry};

fn build(config: EngineConfig) -> Result<SessionRegistry<DeterministicRng>, ConfigError> {
    SessionRegistry::new(
        config,
        DeterministicRng::from_seed(70),
        Arc::new(SubscriberRegistry::new()),
    )
}

#[test]
fn zero_rounds_per_player_is_rejected_by_registry() {
    let cfg = EngineConfig {
        rounds_per_player: 0,
        ..EngineConfig::default()
    };
    assert!(matches!(build(cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn empty_palette_is_rejected_by_registry() {
    let cfg = EngineConfig {
        palette: Palette::new(Vec::new()),
        ..EngineConfig::default()
    };
    assert!(matches!(build(cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn duplicate_palette_color_is_rejected_by_registry() {
    let cfg = EngineConfig {
        palette: Palette::new(vec!["red".into(), "red".into()]),
        ..EngineConfig::default()
    };
    match build(cfg) {
        Err(ConfigError::Invalid(msg)) => assert!(msg.contains("red"), "{msg}"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("duplicate color accepted"),
    }
}

#[test]
fn partial_json_config_builds_registry() {
    let cfg = EngineConfig::from_json_str(r#"{ "rounds_per_player": 3 }"#).unwrap();
    let registry = build(cfg).unwrap();

    assert_eq!(registry.config().rounds_per_player, 3);
    assert_eq!(registry.config().palette, Palette::default());
    assert!(registry.is_empty());
}
