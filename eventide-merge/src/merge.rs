// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde_json::{Map, Value};

/// Merge `source` into `target` in place.
///
/// - Both objects: every key of `source` is merged into the matching key of
///   `target`, recursively. Keys only present in `target` are kept.
/// - `source` is an object, `target` is not: `target` becomes an empty object
///   first, then the rule above applies.
/// - Otherwise `target` is replaced by a copy of `source`.
pub fn deep_merge(target: &mut Value, source: &Value) {
    let Value::Object(source) = source else {
        *target = source.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    if let Value::Object(target) = target {
        for (key, value) in source {
            match target.get_mut(key) {
                Some(existing) => deep_merge(existing, value),
                None => {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// Copy of `base` with every value of `sources` merged in, left to right.
///
/// `base` is left untouched.
#[must_use]
pub fn merged<'a, I>(base: &Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    sources.into_iter().fold(base.clone(), |mut acc, source| {
        deep_merge(&mut acc, source);
        acc
    })
}
