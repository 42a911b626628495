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

//! Reverse lookups from handles, paths, and logical ids to attached views.

use crate::entry::ViewEntry;
use strata_core::scene::ViewNode;
use strata_core::view::{ResourcePath, UiId, ViewHandle, ViewParams};

/// A key identifying a view either by its resource path or by its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLookup {
    /// Match by backing resource.
    Path(ResourcePath),
    /// Match by the handle of a specific open.
    Handle(ViewHandle),
}

impl ViewLookup {
    pub(crate) fn matches(&self, entry: &ViewEntry) -> bool {
        match self {
            ViewLookup::Path(path) => entry.path() == path,
            ViewLookup::Handle(handle) => !handle.is_empty() && entry.handle() == *handle,
        }
    }
}

impl From<&str> for ViewLookup {
    fn from(path: &str) -> Self {
        ViewLookup::Path(ResourcePath::from(path))
    }
}

impl From<ResourcePath> for ViewLookup {
    fn from(path: ResourcePath) -> Self {
        ViewLookup::Path(path)
    }
}

impl From<&ResourcePath> for ViewLookup {
    fn from(path: &ResourcePath) -> Self {
        ViewLookup::Path(path.clone())
    }
}

impl From<ViewHandle> for ViewLookup {
    fn from(handle: ViewHandle) -> Self {
        ViewLookup::Handle(handle)
    }
}

/// A borrowed view of one attached, live instance.
#[derive(Clone, Copy)]
pub struct ViewRef<'a> {
    entry: &'a ViewEntry,
    node: &'a dyn ViewNode,
}

impl<'a> ViewRef<'a> {
    /// Returns a reference only if the entry is valid, attached, and its node
    /// is active in the hierarchy.
    pub(crate) fn live(entry: &'a ViewEntry) -> Option<Self> {
        if !entry.is_valid() || !entry.is_attached() {
            return None;
        }
        let node = entry.node()?;
        node.is_active().then_some(ViewRef { entry, node })
    }

    /// Handle of the open this instance belongs to.
    pub fn handle(&self) -> ViewHandle {
        self.entry.handle()
    }

    /// Logical id of the open.
    pub fn ui_id(&self) -> UiId {
        self.entry.ui_id()
    }

    /// Backing resource path.
    pub fn path(&self) -> &'a ResourcePath {
        self.entry.path()
    }

    /// Parameters of the open.
    pub fn params(&self) -> &'a ViewParams {
        self.entry.params()
    }

    /// The instantiated node.
    pub fn node(&self) -> &'a dyn ViewNode {
        self.node
    }
}

impl std::fmt::Debug for ViewRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRef")
            .field("handle", &self.handle())
            .field("ui_id", &self.ui_id())
            .field("path", self.path())
            .finish()
    }
}
