//! Structural deep merge of JSON configuration values.

use serde_json::Value;

/// Deep-merge `overlay` into `base`.
///
/// For each key present in the overlay: if both sides are objects, the merge
/// recurses (a missing base value is treated as an empty object); otherwise
/// the overlay value replaces the base value wholesale. Keys absent from the
/// overlay keep their base value. Arrays are never merged element-wise — an
/// overlay array fully replaces the base array. Unknown keys pass through
/// unchanged. There are no error conditions.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                if overlay_value.is_object() {
                    let slot = base_map.entry(key).or_insert(Value::Object(Default::default()));
                    deep_merge(slot, overlay_value);
                } else {
                    base_map.insert(key, overlay_value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
