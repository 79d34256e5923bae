// Host-side tests for configuration validation and color handling.

use particle_core::constants::*;
use particle_core::*;

#[test]
fn default_config_matches_tuning_constants_and_validates() {
    let c = FieldConfig::default();
    assert_eq!(c.particle_count, 80);
    assert_eq!(c.particle_size, SizeRange { min: 1.0, max: 3.0 });
    assert_eq!(c.line_distance, 120.0);
    assert_eq!(c.speed, 0.4);
    assert_eq!(c.max_speed, 1.0);
    assert_eq!(c.pointer.radius, 150.0);
    assert_eq!(c.pointer.push_strength, 0.02);
    assert_eq!(c.colors.particle, Rgba::new(0, 212, 170, 0.8));
    assert_eq!(c.colors.line, Rgba::new(0, 212, 170, 0.15));
    assert_eq!(c.colors.line_hover, Rgba::new(124, 58, 237, 0.3));
    assert_eq!(c.validate(), Ok(()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_have_logical_relationships() {
    assert!(PARTICLE_SIZE_MIN <= PARTICLE_SIZE_MAX);
    assert!(PARTICLE_COUNT <= MAX_PARTICLE_COUNT);
    // Initial velocities should not be clamped on the first tick
    assert!(BASE_SPEED / 2.0 < MAX_SPEED);
    // Hovered lines stand out against plain ones
    assert!(HOVER_LINE_ALPHA_SCALE > LINE_ALPHA_SCALE);
    assert!(LINE_WIDTH > 0.0);
}

#[test]
fn zero_particles_is_rejected() {
    let c = FieldConfig {
        particle_count: 0,
        ..FieldConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::ZeroParticles));
}

#[test]
fn particle_count_is_capped() {
    let at_cap = FieldConfig {
        particle_count: MAX_PARTICLE_COUNT,
        ..FieldConfig::default()
    };
    assert_eq!(at_cap.validate(), Ok(()));

    let huge = FieldConfig {
        particle_count: 100_000_000,
        ..FieldConfig::default()
    };
    assert_eq!(
        huge.validate(),
        Err(ConfigError::TooManyParticles {
            count: 100_000_000,
            max: MAX_PARTICLE_COUNT
        })
    );
}

#[test]
fn inverted_or_empty_size_range_is_rejected() {
    let inverted = FieldConfig {
        particle_size: SizeRange { min: 3.0, max: 1.0 },
        ..FieldConfig::default()
    };
    assert_eq!(
        inverted.validate(),
        Err(ConfigError::InvalidSizeRange { min: 3.0, max: 1.0 })
    );

    let zero_min = FieldConfig {
        particle_size: SizeRange { min: 0.0, max: 1.0 },
        ..FieldConfig::default()
    };
    assert!(matches!(
        zero_min.validate(),
        Err(ConfigError::InvalidSizeRange { .. })
    ));

    let fixed = FieldConfig {
        particle_size: SizeRange { min: 2.0, max: 2.0 },
        ..FieldConfig::default()
    };
    assert_eq!(fixed.validate(), Ok(()));
}

#[test]
fn non_positive_distances_and_speeds_are_rejected() {
    let c = FieldConfig {
        line_distance: 0.0,
        ..FieldConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::NotPositive {
            field: "line_distance",
            value: 0.0
        })
    );

    let c = FieldConfig {
        max_speed: -1.0,
        ..FieldConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive {
            field: "max_speed",
            ..
        })
    ));

    let mut c = FieldConfig::default();
    c.pointer.radius = f32::NAN;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive {
            field: "pointer.radius",
            ..
        })
    ));
}

#[test]
fn negative_speed_and_push_are_rejected_but_zero_is_fine() {
    let c = FieldConfig {
        speed: -0.1,
        ..FieldConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::Negative { field: "speed", .. })
    ));

    let mut c = FieldConfig::default();
    c.pointer.push_strength = -0.5;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::Negative {
            field: "pointer.push_strength",
            ..
        })
    ));

    let mut still = FieldConfig {
        speed: 0.0,
        ..FieldConfig::default()
    };
    still.pointer.push_strength = 0.0;
    assert_eq!(still.validate(), Ok(()));
}

#[test]
fn color_alpha_outside_unit_range_is_rejected() {
    let mut c = FieldConfig::default();
    c.colors.line_hover = Rgba::new(1, 2, 3, 1.5);
    assert_eq!(
        c.validate(),
        Err(ConfigError::AlphaOutOfRange {
            field: "colors.line_hover",
            value: 1.5
        })
    );
}

#[test]
fn config_errors_render_readable_messages() {
    let msg = ConfigError::InvalidSizeRange { min: 3.0, max: 1.0 }.to_string();
    assert_eq!(msg, "particle size range is invalid: min 3, max 1");
    let msg = ConfigError::NotPositive {
        field: "line_distance",
        value: 0.0,
    }
    .to_string();
    assert_eq!(msg, "line_distance must be positive, got 0");
}

#[test]
fn colors_format_as_css_rgba() {
    assert_eq!(
        Rgba::new(0, 212, 170, 0.15).css(),
        "rgba(0, 212, 170, 0.15)"
    );
    assert_eq!(Rgba::new(124, 58, 237, 1.0).css(), "rgba(124, 58, 237, 1)");
}

#[test]
fn with_alpha_replaces_alpha_and_keeps_channels() {
    let base = Rgba::new(0, 212, 170, 0.15);
    let faded = base.with_alpha(0.05);
    assert!(faded.same_rgb(&base));
    assert_eq!(faded.alpha, 0.05);
}

#[test]
fn colors_parse_from_css_text() {
    assert_eq!(
        "rgba(0, 212, 170, 0.8)".parse::<Rgba>(),
        Ok(Rgba::new(0, 212, 170, 0.8))
    );
    assert_eq!(
        " rgb(1,2,3) ".parse::<Rgba>(),
        Ok(Rgba::new(1, 2, 3, 1.0))
    );
    assert_eq!("#7c3aed".parse::<Rgba>(), Ok(Rgba::new(124, 58, 237, 1.0)));
    assert_eq!("#7C3AED".parse::<Rgba>(), Ok(Rgba::new(124, 58, 237, 1.0)));
}

#[test]
fn malformed_colors_are_rejected() {
    assert_eq!(
        "rgba(300, 0, 0, 1)".parse::<Rgba>(),
        Err(ColorParseError::Channel("300".to_string()))
    );
    assert_eq!(
        "rgba(0, 0, 0, 1.5)".parse::<Rgba>(),
        Err(ColorParseError::Alpha(1.5))
    );
    assert!(matches!(
        "rgba(1, 2, 3)".parse::<Rgba>(),
        Err(ColorParseError::Syntax(_))
    ));
    assert!(matches!(
        "hsl(120, 50%, 50%)".parse::<Rgba>(),
        Err(ColorParseError::Syntax(_))
    ));
    assert!(matches!(
        "#12345".parse::<Rgba>(),
        Err(ColorParseError::Syntax(_))
    ));
    assert!(matches!(
        "rgb(1, 2, 3".parse::<Rgba>(),
        Err(ColorParseError::Syntax(_))
    ));
}

#[test]
fn css_output_round_trips_through_parser() {
    let c = FieldConfig::default().colors.line_hover;
    assert_eq!(c.css().parse::<Rgba>(), Ok(c));
}
