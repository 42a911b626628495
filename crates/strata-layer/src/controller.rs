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

//! The `LayerController` creates, tracks, reuses, and tears down the views of
//! one UI layer.
//!
//! It owns two tables keyed by resource path. The active table holds views
//! that are open or still resolving; the cache table holds views that were
//! closed without destruction and keep their node for a fast re-open. A path
//! lives in at most one of them at a time, and at most one entry per path is
//! ever valid.
//!
//! All mutation happens on the thread that owns the controller. Resolutions
//! run wherever the [`AssetResolver`] runs them and are applied when
//! [`update`](LayerController::update) drains them.

use crate::config::LayerConfig;
use crate::delegate::CallbackDelegateFactory;
use crate::entry::{Ticket, ViewEntry, ViewInstance};
use crate::events::LayerEvent;
use crate::in_flight::{self, Completed, InFlight};
use crate::lookup::{ViewLookup, ViewRef};
use crate::stats::LayerStats;
use crate::table::ViewTable;
use strata_core::asset::AssetResolver;
use strata_core::delegate::DelegateFactory;
use strata_core::scene::LayerInfo;
use strata_core::view::{ResourcePath, UiId, ViewCallbacks, ViewHandle, ViewParams};

/// Manages the lifecycle and cache of the views of one layer.
pub struct LayerController<R: AssetResolver> {
    config: LayerConfig,
    info: LayerInfo,
    resolver: R,
    delegates: Box<dyn DelegateFactory>,
    active: ViewTable,
    cache: ViewTable,
    /// Paths of attached views, in attachment order.
    children: Vec<ResourcePath>,
    in_flight: Vec<InFlight>,
    tickets: Ticket,
    event_sender: Option<flume::Sender<LayerEvent>>,
    stats: LayerStats,
}

impl<R: AssetResolver> LayerController<R> {
    /// Creates a layer that resolves through `resolver` and binds a
    /// [`CallbackDelegate`](crate::CallbackDelegate) to every instance.
    pub fn new(config: LayerConfig, resolver: R) -> Self {
        let info = config.layer_info();
        log::info!(
            "Layer '{}' initialized (sort order {}, {:?}).",
            info.name,
            info.sort_order,
            info.render_mode
        );

        Self {
            config,
            info,
            resolver,
            delegates: Box::new(CallbackDelegateFactory),
            active: ViewTable::new(),
            cache: ViewTable::new(),
            children: Vec::new(),
            in_flight: Vec::new(),
            tickets: Ticket::default(),
            event_sender: None,
            stats: LayerStats::default(),
        }
    }

    /// Replaces the factory that builds the delegate of each new instance.
    pub fn with_delegate_factory(mut self, factory: impl DelegateFactory + 'static) -> Self {
        self.delegates = Box::new(factory);
        self
    }

    /// Attaches a sender that receives a [`LayerEvent`] for every attach,
    /// detach, failed resolution, and rejected open.
    pub fn with_event_sender(mut self, sender: flume::Sender<LayerEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    /// Requests that the view backed by `path` become active.
    ///
    /// A cached node is attached before this returns; otherwise the node is
    /// attached by a later [`update`](Self::update), once the resolver completes.
    ///
    /// ## Arguments
    /// * `ui_id` - The logical id the caller tracks this view by.
    /// * `path` - The resource the view is instantiated from.
    /// * `params` - Parameters exposed to the view's hooks and delegate.
    /// * `callbacks` - Lifecycle hooks for this open, replacing any previous set.
    ///
    /// ## Returns
    /// The freshly minted handle, or [`ViewHandle::EMPTY`] if a view for `path`
    /// is already open.
    pub fn add(
        &mut self,
        ui_id: UiId,
        path: impl Into<ResourcePath>,
        params: ViewParams,
        callbacks: ViewCallbacks,
    ) -> ViewHandle {
        let path = path.into();

        if self.active.get(&path).is_some_and(ViewEntry::is_valid) {
            log::warn!(
                "Layer '{}': view '{}' is already open, ignoring request for {}.",
                self.info.name,
                path,
                ui_id
            );
            self.stats.duplicate_opens += 1;
            self.publish(LayerEvent::DuplicateOpen {
                layer: self.info.name.clone(),
                ui_id,
                path,
            });
            return ViewHandle::EMPTY;
        }

        let mut entry = match self.active.remove(&path) {
            Some(entry) => entry,
            None => self
                .cache
                .remove(&path)
                .unwrap_or_else(|| ViewEntry::new(path.clone())),
        };

        let handle = ViewHandle::new();
        let ticket = self.tickets.advance();
        entry.rearm(handle, ui_id, params, callbacks, ticket);
        self.active.insert(entry);

        log::debug!(
            "Layer '{}': opening '{}' as {} ({}).",
            self.info.name,
            path,
            ui_id,
            handle
        );
        self.load(&path);

        handle
    }

    /// Re-issues the resolution of an entry whose previous resolution failed.
    ///
    /// Returns `false` if `path` has no active entry, or if its entry is open
    /// or still resolving.
    pub fn retry(&mut self, path: &str) -> bool {
        let Some(entry) = self.active.get_mut(path) else {
            return false;
        };
        if entry.is_valid() || entry.has_instance() {
            return false;
        }

        entry.rearm_ticket(self.tickets.advance());
        let path = entry.path().clone();
        log::info!("Layer '{}': retrying '{}'.", self.info.name, path);
        self.load(&path);
        true
    }

    /// Closes the view backed by `path`.
    ///
    /// Closing a path that is not open does nothing.
    ///
    /// ## Arguments
    /// * `path` - The resource of the view to close.
    /// * `destroy` - Destroys the node and purges any cached node for the path
    ///   when `true`. When `false` the entry moves to the cache with its node kept.
    pub fn close(&mut self, path: &str, destroy: bool) {
        if destroy {
            self.purge_cached(path);
        }

        let Some(mut entry) = self.active.remove(path) else {
            log::trace!(
                "Layer '{}': close of '{}' ignored, nothing open.",
                self.info.name,
                path
            );
            return;
        };

        self.children.retain(|child| child.as_str() != path);
        self.retire(&mut entry, destroy);

        if !destroy {
            self.cache.insert(entry);
        }
    }

    /// Closes every view of the layer.
    ///
    /// ## Arguments
    /// * `destroy` - When `true` every node, open or cached, is destroyed and both
    ///   tables end empty. When `false` every open view moves to the cache,
    ///   replacing any cached entry for the same path.
    pub fn clear(&mut self, destroy: bool) {
        log::info!(
            "Layer '{}': clearing {} open and {} cached views (destroy: {}).",
            self.info.name,
            self.active.len(),
            self.cache.len(),
            destroy
        );

        // Attached views first, in attachment order, then the ones still resolving.
        let mut entries: Vec<ViewEntry> = std::mem::take(&mut self.children)
            .iter()
            .filter_map(|path| self.active.remove(path))
            .collect();
        entries.extend(self.active.drain());

        for mut entry in entries {
            self.retire(&mut entry, destroy);
            if !destroy {
                self.cache.insert(entry);
            }
        }

        if destroy {
            let cached: Vec<ViewEntry> = self.cache.drain().collect();
            for mut entry in cached {
                if entry.detach(true) {
                    self.resolver.release(entry.path(), self.config.unload_on_destroy);
                }
            }
        }

        debug_assert!(self.active.is_empty());
    }

    /// Applies every resolution that has completed since the last call.
    ///
    /// Must be called regularly (typically once per frame) from the thread
    /// that owns the layer.
    ///
    /// ## Returns
    /// The number of completions processed, including the ones discarded as stale.
    pub fn update(&mut self) -> usize {
        let completed = in_flight::drain_completed(&mut self.in_flight);
        let count = completed.len();
        for completion in completed {
            self.complete(completion);
        }
        count
    }

    /// Returns the attached, live view opened with `handle`.
    pub fn get_by_handle(&self, handle: ViewHandle) -> Option<ViewRef<'_>> {
        if handle.is_empty() {
            return None;
        }
        self.live_views().find(|view| view.handle() == handle)
    }

    /// Returns every attached, live view opened with `ui_id`, in attachment
    /// order.
    pub fn get_all_by_ui_id(&self, ui_id: UiId) -> Vec<ViewRef<'_>> {
        self.live_views()
            .filter(|view| view.ui_id() == ui_id)
            .collect()
    }

    /// Returns `true` if an attached, live view matches the path or handle.
    pub fn has(&self, lookup: impl Into<ViewLookup>) -> bool {
        let lookup = lookup.into();
        self.children
            .iter()
            .filter_map(|path| self.active.get(path))
            .any(|entry| ViewRef::live(entry).is_some() && lookup.matches(entry))
    }

    /// Number of entries in the active table, including unresolved ones.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of entries in the cache table.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of resolutions started and not yet drained by
    /// [`update`](Self::update).
    pub fn pending_len(&self) -> usize {
        self.in_flight.len()
    }

    /// `true` if the active table has an entry for `path`.
    pub fn is_active(&self, path: &str) -> bool {
        self.active.contains(path)
    }

    /// `true` if the cache table has an entry for `path`.
    pub fn is_cached(&self, path: &str) -> bool {
        self.cache.contains(path)
    }

    /// The active entry for `path`, if any.
    pub fn active_entry(&self, path: &str) -> Option<&ViewEntry> {
        self.active.get(path)
    }

    /// The cached entry for `path`, if any.
    pub fn cached_entry(&self, path: &str) -> Option<&ViewEntry> {
        self.cache.get(path)
    }

    /// Usage counters.
    pub fn stats(&self) -> LayerStats {
        self.stats
    }

    /// The configuration this layer was built with.
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// The resolver backing this layer.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Attaches the entry's cached node, or starts resolving one.
    fn load(&mut self, path: &ResourcePath) {
        let Some(entry) = self.active.get(path) else {
            return;
        };

        if entry.has_instance() {
            log::debug!("Layer '{}': cache hit for '{}'.", self.info.name, path);
            self.stats.cache_hits += 1;
            self.attach(path);
            return;
        }

        let ticket = entry.ticket();
        let pending = self.resolver.resolve_async(path);
        self.stats.resolves_started += 1;
        self.in_flight.push(InFlight::new(path.clone(), ticket, pending));
    }

    fn complete(&mut self, completion: Completed) {
        let Completed {
            path,
            ticket,
            resolution,
        } = completion;

        let current = self.active.get(&path).is_some_and(|entry| {
            entry.is_valid() && entry.ticket() == ticket && !entry.has_instance()
        });

        if !current {
            log::debug!(
                "Layer '{}': discarding stale resolution of '{}'.",
                self.info.name,
                path
            );
            self.stats.stale_completions += 1;
            if resolution.is_ok() {
                self.resolver.release(&path, false);
            }
            return;
        }

        let prefab = match resolution {
            Ok(prefab) => prefab,
            Err(error) => {
                log::error!(
                    "Layer '{}': failed to resolve '{}': {}",
                    self.info.name,
                    path,
                    error
                );
                self.stats.resolve_failures += 1;
                let Some(entry) = self.active.get_mut(&path) else {
                    return;
                };
                entry.set_valid(false);
                let handle = entry.handle();
                self.publish(LayerEvent::ResolveFailed {
                    layer: self.info.name.clone(),
                    handle,
                    error,
                });
                return;
            }
        };

        let mut node = prefab.instantiate();
        drop(prefab);
        self.resolver.release(&path, false);
        node.set_name(path.as_str());

        let Some(entry) = self.active.get_mut(&path) else {
            return;
        };
        let delegate = self.delegates.create(&entry.binding());
        entry.install(ViewInstance::new(node, delegate));
        self.attach(&path);
    }

    fn attach(&mut self, path: &ResourcePath) {
        let Some(entry) = self.active.get_mut(path) else {
            return;
        };
        if !entry.attach(&self.info) {
            return;
        }

        let event = LayerEvent::Attached {
            layer: self.info.name.clone(),
            handle: entry.handle(),
            ui_id: entry.ui_id(),
            path: path.clone(),
        };
        log::info!(
            "Layer '{}': attached '{}' as {} ({}).",
            self.info.name,
            path,
            entry.ui_id(),
            entry.handle()
        );

        self.children.retain(|child| child != path);
        self.children.push(path.clone());
        self.publish(event);
    }

    /// Takes an entry that has already left the active table out of the layer.
    fn retire(&mut self, entry: &mut ViewEntry, destroy: bool) {
        let was_attached = entry.is_attached();
        let owned_node = entry.detach(destroy);

        if destroy && owned_node {
            self.resolver.release(entry.path(), self.config.unload_on_destroy);
        }

        if was_attached {
            log::info!(
                "Layer '{}': closed '{}' ({}), destroyed: {}.",
                self.info.name,
                entry.path(),
                entry.handle(),
                destroy
            );
            self.publish(LayerEvent::Detached {
                layer: self.info.name.clone(),
                handle: entry.handle(),
                ui_id: entry.ui_id(),
                path: entry.path().clone(),
                destroyed: destroy,
            });
        }
    }

    fn purge_cached(&mut self, path: &str) {
        let Some(mut entry) = self.cache.remove(path) else {
            return;
        };
        log::debug!("Layer '{}': purging cached '{}'.", self.info.name, path);
        if entry.detach(true) {
            self.resolver.release(entry.path(), self.config.unload_on_destroy);
        }
    }

    /// Iterates attached, live views in attachment order.
    fn live_views(&self) -> impl Iterator<Item = ViewRef<'_>> + '_ {
        self.children
            .iter()
            .filter_map(|path| self.active.get(path))
            .filter_map(ViewRef::live)
    }

    fn publish(&self, event: LayerEvent) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event) {
                log::warn!(
                    "Layer '{}': failed to publish event: {e}. Receiver likely disconnected.",
                    self.info.name
                );
            }
        }
    }
}
