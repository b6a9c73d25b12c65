// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_wins_on_conflict() {
        let merged = deep_merge(json!({"a": 1}), json!({"a": 2}));
        assert_eq!(merged, json!({"a": 2}));
    }

    #[test]
    fn test_nested_keys_are_kept() {
        let merged = deep_merge(
            json!({"history": {"extra": true, "list_limit": 1}}),
            json!({"history": {"list_limit": 9}}),
        );
        assert_eq!(merged, json!({"history": {"extra": true, "list_limit": 9}}));
    }

    #[test]
    fn test_non_object_base_is_replaced() {
        let merged = deep_merge(json!([1, 2]), json!({"a": 1}));
        assert_eq!(merged, json!({"a": 1}));
    }
}
