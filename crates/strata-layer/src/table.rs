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

//! Path-keyed storage for view entries.

use crate::entry::ViewEntry;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use strata_core::view::ResourcePath;

/// A mapping from resource path to the entry registered for it.
///
/// The controller owns two of these: the active table (views that are open or
/// being resolved) and the cache table (views closed without destruction, whose
/// node is kept for a fast re-open). The coordination between the two lives in
/// the controller; a table only stores.
#[derive(Debug, Default)]
pub(crate) struct ViewTable {
    entries: HashMap<ResourcePath, ViewEntry>,
}

impl ViewTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts an entry under its own path, returning the entry it replaced.
    pub(crate) fn insert(&mut self, entry: ViewEntry) -> Option<ViewEntry> {
        self.entries.insert(entry.path().clone(), entry)
    }

    pub(crate) fn get<Q>(&self, path: &Q) -> Option<&ViewEntry>
    where
        ResourcePath: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(path)
    }

    pub(crate) fn get_mut<Q>(&mut self, path: &Q) -> Option<&mut ViewEntry>
    where
        ResourcePath: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(path)
    }

    pub(crate) fn remove<Q>(&mut self, path: &Q) -> Option<ViewEntry>
    where
        ResourcePath: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(path)
    }

    pub(crate) fn contains<Q>(&self, path: &Q) -> bool
    where
        ResourcePath: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(path)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns every entry, in no particular order.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = ViewEntry> + '_ {
        self.entries.drain().map(|(_, entry)| entry)
    }
}
