// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An ordered, opaque sequence of caller-supplied values passed to a view.
///
/// The layer never inspects the values. Views and delegates read them back
/// by position and concrete type with [`get`](ViewParams::get).
///
/// # Example
///
/// ```rust
/// use strata_core::view::ViewParams;
///
/// let params = ViewParams::new().with(42u32).with("player-1".to_string());
///
/// assert_eq!(params.get::<u32>(0), Some(&42));
/// assert_eq!(params.get::<String>(1).map(String::as_str), Some("player-1"));
/// assert!(params.get::<u32>(1).is_none());
/// ```
#[derive(Clone, Default)]
pub struct ViewParams {
    values: Vec<Arc<dyn Any + Send + Sync>>,
}

impl ViewParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends a value, returning the list for chaining.
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends a value.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Arc::new(value));
    }

    /// Returns the value at `index` if it exists and is a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values
            .get(index)
            .and_then(|value| (**value).downcast_ref::<T>())
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ViewParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewParams")
            .field("len", &self.values.len())
            .finish()
    }
}
