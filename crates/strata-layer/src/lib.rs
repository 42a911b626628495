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

//! # Strata Layer
//!
//! Lifecycle and cache management for the views of a single UI layer.
//!
//! A [`LayerController`] opens views by resource path, guarantees at most one
//! live instance per path, resolves missing instances asynchronously through
//! an [`AssetResolver`](strata_core::AssetResolver), and keeps closed
//! instances in a cache so that re-opening them skips resolution entirely.
//!
//! The controller is a plain value: build it once in the composition root and
//! pass it to whoever needs it.
//!
//! ```rust
//! use strata_core::asset::{AssetResolver, PendingAsset, ResolveError};
//! use strata_core::view::{ResourcePath, UiId, ViewCallbacks, ViewParams};
//! use strata_layer::{LayerConfig, LayerController};
//!
//! struct EmptyCatalog;
//!
//! impl AssetResolver for EmptyCatalog {
//!     fn resolve_async(&mut self, path: &ResourcePath) -> PendingAsset {
//!         PendingAsset::ready(path.clone(), Err(ResolveError::NotFound { path: path.clone() }))
//!     }
//!
//!     fn release(&mut self, _path: &ResourcePath, _full_unload: bool) {}
//! }
//!
//! let mut layer = LayerController::new(LayerConfig::named("dialog"), EmptyCatalog);
//! let handle = layer.add(UiId(1), "ui/login", ViewParams::new(), ViewCallbacks::new());
//! assert!(!handle.is_empty());
//!
//! layer.update();
//! assert!(!layer.has("ui/login"));
//! assert_eq!(layer.stats().resolve_failures, 1);
//! ```

mod config;
mod controller;
mod delegate;
mod entry;
mod events;
mod in_flight;
mod lookup;
mod stats;
mod table;

pub use config::LayerConfig;
pub use controller::LayerController;
pub use delegate::{CallbackDelegate, CallbackDelegateFactory};
pub use entry::ViewEntry;
pub use events::{LayerEvent, LayerEventBus};
pub use lookup::{ViewLookup, ViewRef};
pub use stats::LayerStats;
