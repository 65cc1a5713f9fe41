// Host-side tests for draw configuration defaults, overrides and validation.

use draw_core::{ConfigError, DrawConfig};
use std::time::Duration;

#[test]
fn defaults_describe_five_of_fifteen() {
    let config = DrawConfig::default();
    assert_eq!(config.range_size, 15);
    assert_eq!(config.visible_count, 5);
    assert_eq!(config.ball_width, 72.0);
    assert_eq!(config.tube_start_x, 137.0);
    assert_eq!(config.origin_x, 900.0);
    assert_eq!(config.lane_y, 670.0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn cooldown_covers_the_whole_animation_by_default() {
    let config = DrawConfig::default();
    // last ball starts after 4 staggers, then travels and pulses up and down
    assert_eq!(config.animation_span(), Duration::from_millis(2000 + 2000 + 400));
    assert_eq!(config.cooldown(), config.animation_span());
}

#[test]
fn fixed_cooldown_overrides_derived_one() {
    let config = DrawConfig {
        cooldown_ms: Some(5000),
        ..DrawConfig::default()
    };
    assert_eq!(config.cooldown(), Duration::from_secs(5));
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config: DrawConfig =
        serde_json::from_str(r#"{"visible_count": 3, "travel_ms": 1000}"#).expect("valid json");
    assert_eq!(config.visible_count, 3);
    assert_eq!(config.travel_ms, 1000);
    assert_eq!(config.range_size, 15);
    assert_eq!(config.stagger_ms, 500);
    assert_eq!(config.cooldown_ms, None);
    assert_eq!(config.cooldown(), Duration::from_millis(1000 + 1000 + 400));
}

#[test]
fn empty_json_is_the_default() {
    let config: DrawConfig = serde_json::from_str("{}").expect("valid json");
    assert_eq!(config, DrawConfig::default());
}

#[test]
fn validate_rejects_impossible_draws() {
    let none = DrawConfig {
        visible_count: 0,
        ..DrawConfig::default()
    };
    assert_eq!(none.validate(), Err(ConfigError::NoVisibleBalls));

    let too_many = DrawConfig {
        visible_count: 16,
        ..DrawConfig::default()
    };
    assert_eq!(
        too_many.validate(),
        Err(ConfigError::CountExceedsRange {
            visible: 16,
            range: 15
        })
    );

    let all = DrawConfig {
        visible_count: 15,
        ..DrawConfig::default()
    };
    assert_eq!(all.validate(), Ok(()));
}

#[test]
fn validate_rejects_bad_geometry_and_timing() {
    let flat = DrawConfig {
        ball_height: 0.0,
        ..DrawConfig::default()
    };
    assert!(matches!(flat.validate(), Err(ConfigError::BallSize { .. })));

    let instant = DrawConfig {
        travel_ms: 0,
        ..DrawConfig::default()
    };
    assert_eq!(instant.validate(), Err(ConfigError::ZeroTravel));
}

#[test]
fn motion_params_are_in_seconds() {
    let motion = DrawConfig::default().motion();
    assert_eq!(motion.stagger_sec, 0.5);
    assert_eq!(motion.travel_sec, 2.0);
    assert_eq!(motion.pulse_sec, 0.2);
    assert_eq!(motion.slot_width, 72.0);
}
