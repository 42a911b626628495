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

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A process-unique, opaque identifier for one opened view.
///
/// A fresh handle is minted every time a layer accepts an open request. The
/// handle stays the same for as long as that open lasts, even while the view's
/// instance is being resolved, and is replaced when the view is opened again.
///
/// [`ViewHandle::EMPTY`] is the sentinel returned when an open is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewHandle(Uuid);

impl ViewHandle {
    /// The sentinel handle. Never refers to a view.
    pub const EMPTY: ViewHandle = ViewHandle(Uuid::nil());

    /// Creates a new, random (version 4) `ViewHandle`.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns `true` if this is the [`EMPTY`](Self::EMPTY) sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ViewHandle {
    /// Returns the [`EMPTY`](Self::EMPTY) sentinel.
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
