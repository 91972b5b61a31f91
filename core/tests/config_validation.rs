//! Fatal configuration validation, checked before any sampling.

use commission_core::{
    commission::RateSchedule,
    config::{SimConfig, TierConfig},
    error::SimError,
    generator::SimulationGenerator,
};

#[test]
fn default_config_is_valid() {
    assert!(SimConfig::default().validate().is_ok());
}

#[test]
fn weights_not_summing_to_one_are_rejected() {
    let mut config = SimConfig::default();
    config.tiers[0].weight = 0.50; // sum is now 1.2

    let err = config.validate().unwrap_err();
    match err {
        SimError::InvalidConfig { reason } => {
            assert!(reason.contains("sum to 1.0"), "unexpected reason: {reason}");
        }
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn negative_std_is_rejected() {
    let config = SimConfig {
        achievement_std: -0.1,
        ..SimConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn empty_tier_list_is_rejected() {
    let config = SimConfig {
        tiers: vec![],
        ..SimConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn out_of_range_weight_is_rejected() {
    let mut config = SimConfig::default();
    config.tiers[0].weight = -0.30;
    config.tiers[1].weight = 0.90;
    assert!(config.validate().is_err());
}

#[test]
fn generator_construction_fails_on_invalid_config() {
    let config = SimConfig {
        tiers: vec![TierConfig { target_sales: 75_000.0, weight: 0.5 }],
        ..SimConfig::default()
    };
    assert!(SimulationGenerator::new(config, RateSchedule::default()).is_err());
}
