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

use crate::view::ResourcePath;
use thiserror::Error;

/// Why an [`AssetResolver`](super::AssetResolver) could not produce a prefab.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Nothing is known under the requested path.
    #[error("no resource found at '{path}'")]
    NotFound {
        /// The requested path.
        path: ResourcePath,
    },
    /// The resource exists but could not be loaded or decoded.
    #[error("failed to load '{path}': {reason}")]
    Load {
        /// The requested path.
        path: ResourcePath,
        /// A human readable description of the failure.
        reason: String,
    },
    /// The resolver dropped the completer without ever completing it.
    #[error("resolution of '{path}' was abandoned before completing")]
    Abandoned {
        /// The requested path.
        path: ResourcePath,
    },
}

impl ResolveError {
    /// The path whose resolution failed.
    pub fn path(&self) -> &ResourcePath {
        match self {
            ResolveError::NotFound { path }
            | ResolveError::Load { path, .. }
            | ResolveError::Abandoned { path } => path,
        }
    }
}
