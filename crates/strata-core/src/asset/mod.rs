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

//! The contract between a layer and the asset-resolution subsystem.
//!
//! A layer never loads anything itself. It asks an [`AssetResolver`] for the
//! [`Prefab`] behind a resource path and gets back a [`PendingAsset`], a
//! continuation value it polls from its own thread. The resolver completes the
//! matching [`AssetCompleter`] whenever and wherever its work finishes.
//!
//! Resolved prefabs are never retained: the layer instantiates a private copy
//! and hands the prefab back with [`AssetResolver::release`].

mod error;
mod pending;

pub use error::ResolveError;
pub use pending::{AssetCompleter, PendingAsset, Resolution};

use crate::scene::ViewNode;
use crate::view::ResourcePath;

/// An instantiable object produced by an [`AssetResolver`].
///
/// The supertraits allow a resolver to produce prefabs on a worker thread and
/// send them to the thread that owns the layer.
pub trait Prefab: Send + 'static {
    /// Creates a new, independent instance of this prefab.
    ///
    /// The returned node is exclusively owned by the caller.
    fn instantiate(&self) -> Box<dyn ViewNode>;
}

/// Turns resource paths into prefabs, asynchronously.
///
/// Implementations decide how (and on which thread) the work happens. The only
/// requirement is that every [`PendingAsset`] returned by
/// [`resolve_async`](Self::resolve_async) is eventually completed, either with
/// a prefab, with an error, or by dropping its completer.
pub trait AssetResolver {
    /// Starts resolving `path` and returns the continuation to poll.
    fn resolve_async(&mut self, path: &ResourcePath) -> PendingAsset;

    /// Releases a previously resolved resource.
    ///
    /// `full_unload` asks the resolver to also drop whatever backing data it
    /// keeps for the path (bundles, decoded bytes), not just the reference.
    fn release(&mut self, path: &ResourcePath, full_unload: bool);
}
