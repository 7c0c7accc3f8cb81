//! Layering of YAML configuration values.
//!
//! - Mappings merge key by key, recursively
//! - Any other overlay value replaces the base value
//! - `null` in an overlay removes the key, restoring the default

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base`, overlay winning on conflicts.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut merged), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                if value.is_null() {
                    merged.remove(&key);
                    continue;
                }
                let next = match merged.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                merged.insert(key, next);
            }
            Value::Mapping(merged)
        }
        (_, overlay) => overlay,
    }
}

/// Merge layers in order; later layers take precedence.
///
/// Empty files parse to `null` and are skipped.
pub fn merge_configs(layers: impl IntoIterator<Item = Value>) -> Value {
    layers
        .into_iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Mapping::new()), deep_merge)
}
