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

//! Identifiers and caller-supplied data describing a logical view.
//!
//! A view is addressed three ways:
//! - [`ResourcePath`]: the backing resource, unique per live view.
//! - [`ViewHandle`]: minted on every successful open, stable for that open.
//! - [`UiId`]: the caller's logical UI concept, possibly shared by many opens.
//!
//! [`ViewParams`] and [`ViewCallbacks`] travel with the view and are exposed
//! read-only to delegates through a [`ViewBinding`].

mod binding;
mod callbacks;
mod handle;
mod id;
mod params;
mod path;

pub use binding::ViewBinding;
pub use callbacks::{ViewCallback, ViewCallbacks};
pub use handle::ViewHandle;
pub use id::UiId;
pub use params::ViewParams;
pub use path::ResourcePath;
