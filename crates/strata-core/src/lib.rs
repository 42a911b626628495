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

//! # Strata Core
//!
//! Foundational crate containing the traits, identifiers, and passive data
//! types shared by every view layer.
//!
//! Nothing in here owns state or drives a lifecycle. The contracts describe the
//! collaborators a layer talks to (the asset resolver, the scene substrate, the
//! per-instance delegate), and the data types describe what a caller hands to a
//! layer when it opens a view.

#![warn(missing_docs)]

pub mod asset;
pub mod delegate;
pub mod scene;
pub mod view;

pub use asset::{AssetCompleter, AssetResolver, PendingAsset, Prefab, Resolution, ResolveError};
pub use delegate::{DelegateFactory, InstanceDelegate};
pub use scene::{LayerInfo, RenderMode, ViewNode};
pub use view::{ResourcePath, UiId, ViewBinding, ViewCallbacks, ViewHandle, ViewParams};
