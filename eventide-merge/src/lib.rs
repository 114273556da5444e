// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deep merge of [`serde_json::Value`] trees.
//!
//! Objects are merged key by key, recursively. Any other source value, arrays
//! included, replaces the value found in the target. A deep copy of a value is
//! plain [`Value::clone`].
//!
//! # Example
//!
//! ```
//! use eventide_merge::deep_merge;
//! use serde_json::json;
//!
//! let mut settings = json!({ "theme": { "mode": "dark", "size": 12 }, "plugins": ["a"] });
//! deep_merge(&mut settings, &json!({ "theme": { "size": 14 }, "plugins": ["b"] }));
//!
//! assert_eq!(
//!     settings,
//!     json!({ "theme": { "mode": "dark", "size": 14 }, "plugins": ["b"] })
//! );
//! ```

mod merge;

pub use merge::{deep_merge, merged};
pub use serde_json::Value;
