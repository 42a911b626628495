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

/// Running counters describing how a layer has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerStats {
    /// Resolutions handed to the resolver.
    pub resolves_started: u64,
    /// Opens served from a cached node without resolving.
    pub cache_hits: u64,
    /// Completions discarded because their open was closed or superseded.
    pub stale_completions: u64,
    /// Completions that reported a resolver error.
    pub resolve_failures: u64,
    /// Opens rejected because the resource was already open.
    pub duplicate_opens: u64,
}
