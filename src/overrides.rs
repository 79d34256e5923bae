use anyhow::{anyhow, Context};
use particle_core::FieldConfig;
use std::str::FromStr;

/// Attribute names (without the `data-` prefix) accepted on the canvas.
pub const OVERRIDE_KEYS: &[&str] = &[
    "particle-count",
    "size-min",
    "size-max",
    "line-distance",
    "speed",
    "max-speed",
    "pointer-radius",
    "push-strength",
    "particle-color",
    "line-color",
    "line-hover-color",
];

/// Apply a single `key=value` override onto `config`. Does not validate the result.
pub fn apply_override(config: &mut FieldConfig, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "particle-count" => config.particle_count = parse(key, value)?,
        "size-min" => config.particle_size.min = parse(key, value)?,
        "size-max" => config.particle_size.max = parse(key, value)?,
        "line-distance" => config.line_distance = parse(key, value)?,
        "speed" => config.speed = parse(key, value)?,
        "max-speed" => config.max_speed = parse(key, value)?,
        "pointer-radius" => config.pointer.radius = parse(key, value)?,
        "push-strength" => config.pointer.push_strength = parse(key, value)?,
        "particle-color" => config.colors.particle = parse(key, value)?,
        "line-color" => config.colors.line = parse(key, value)?,
        "line-hover-color" => config.colors.line_hover = parse(key, value)?,
        _ => return Err(anyhow!("unknown override {:?}", key)),
    }
    Ok(())
}

/// Build the field configuration from defaults plus whatever `lookup` finds.
///
/// Unparseable values are skipped with a warning. If the merged result fails
/// validation the defaults are used unchanged.
pub fn resolve_config(lookup: impl Fn(&str) -> Option<String>) -> FieldConfig {
    let mut config = FieldConfig::default();
    for &key in OVERRIDE_KEYS {
        if let Some(value) = lookup(key) {
            if let Err(e) = apply_override(&mut config, key, &value) {
                log::warn!("[config] ignoring override: {:#}", e);
            }
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {}; falling back to defaults", e);
            FieldConfig::default()
        }
    }
}

fn parse<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("{}={:?}", key, value))
}
