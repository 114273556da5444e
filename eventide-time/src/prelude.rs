// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::debounce::Debounced;
pub use crate::throttle::Throttled;
pub use eventide_runtime::{Runtime, Timer};
