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

mod common;

use common::{entries, layer, recording_layer, test_node};
use strata_core::delegate::InstanceDelegate;
use strata_core::scene::ViewNode;
use strata_core::view::{ResourcePath, UiId, ViewBinding, ViewCallbacks, ViewHandle, ViewParams};
use strata_layer::ViewLookup;

#[test]
fn lookups_follow_attachment_order() {
    let mut layer = layer();

    let menu = layer.add(UiId(7), "ui/menu", ViewParams::new(), ViewCallbacks::new());
    let hud = layer.add(UiId(3), "ui/hud", ViewParams::new(), ViewCallbacks::new());
    let tip = layer.add(UiId(7), "ui/tip", ViewParams::new(), ViewCallbacks::new());

    // Attachment order follows completion, not request order.
    for path in ["ui/tip", "ui/hud", "ui/menu"] {
        layer.resolver().complete(path);
        layer.update();
    }

    let sevens: Vec<ViewHandle> = layer
        .get_all_by_ui_id(UiId(7))
        .iter()
        .map(|view| view.handle())
        .collect();
    assert_eq!(sevens, vec![tip, menu]);

    let threes = layer.get_all_by_ui_id(UiId(3));
    assert_eq!(threes.len(), 1);
    assert_eq!(threes[0].handle(), hud);
    assert!(layer.get_all_by_ui_id(UiId(99)).is_empty());
}

#[test]
fn cache_hit_moves_the_view_to_the_end() {
    let mut layer = layer();

    layer.add(UiId(1), "ui/a", ViewParams::new(), ViewCallbacks::new());
    layer.add(UiId(1), "ui/b", ViewParams::new(), ViewCallbacks::new());
    layer.resolver().complete_all();
    layer.update();

    layer.close("ui/a", false);
    layer.add(UiId(1), "ui/a", ViewParams::new(), ViewCallbacks::new());

    let order: Vec<String> = layer
        .get_all_by_ui_id(UiId(1))
        .iter()
        .map(|view| view.path().to_string())
        .collect();
    assert_eq!(order, vec!["ui/b", "ui/a"]);
}

#[test]
fn has_matches_paths_and_handles() {
    let mut layer = layer();
    let handle = layer.add(UiId(1), "ui/login", ViewParams::new(), ViewCallbacks::new());
    layer.resolver().complete("ui/login");
    layer.update();

    assert!(layer.has("ui/login"));
    assert!(layer.has(ResourcePath::from("ui/login")));
    assert!(layer.has(ViewLookup::Handle(handle)));
    assert!(!layer.has("ui/shop"));
    assert!(!layer.has(ViewHandle::new()));
    assert!(!layer.has(ViewHandle::EMPTY));
    assert!(layer.get_by_handle(ViewHandle::EMPTY).is_none());
}

#[test]
fn lookups_ignore_nodes_deactivated_behind_the_layer() {
    struct HidingDelegate;

    impl InstanceDelegate for HidingDelegate {
        fn on_attach(&mut self, _binding: &ViewBinding<'_>, node: &mut dyn ViewNode) {
            node.set_active(false);
        }

        fn on_detach(&mut self, _: &ViewBinding<'_>, _: &mut dyn ViewNode, _: bool) {}
    }

    let mut layer = layer().with_delegate_factory(|_binding: &ViewBinding<'_>| {
        Box::new(HidingDelegate) as Box<dyn InstanceDelegate>
    });
    let handle = layer.add(UiId(1), "ui/login", ViewParams::new(), ViewCallbacks::new());
    layer.resolver().complete("ui/login");
    layer.update();

    let entry = layer.active_entry("ui/login").expect("registered");
    assert!(entry.is_valid());
    assert!(entry.is_attached());
    assert!(!layer.has(handle));
    assert!(!layer.has("ui/login"));
    assert!(layer.get_by_handle(handle).is_none());
    assert!(layer.get_all_by_ui_id(UiId(1)).is_empty());
}

#[test]
fn lookups_expose_the_open_and_its_node() {
    let mut layer = layer();
    let handle = layer.add(
        UiId(4),
        "ui/reward",
        ViewParams::new().with(250u32),
        ViewCallbacks::new(),
    );
    layer.resolver().complete("ui/reward");
    layer.update();

    let view = layer.get_by_handle(handle).expect("attached");
    assert_eq!(view.ui_id(), UiId(4));
    assert_eq!(view.params().get::<u32>(0), Some(&250));
    assert_eq!(test_node(view.node()).name, "ui/reward");
}

#[test]
fn clear_destroy_empties_everything() {
    let (mut layer, log) = recording_layer();

    for (id, path) in (1..).zip(["ui/a", "ui/b", "ui/c"]) {
        layer.add(UiId(id), path, ViewParams::new(), ViewCallbacks::new());
    }
    layer.resolver().complete_all();
    layer.update();
    // One more that only lives in the cache.
    layer.add(UiId(9), "ui/old", ViewParams::new(), ViewCallbacks::new());
    layer.resolver().complete("ui/old");
    layer.update();
    layer.close("ui/old", false);

    layer.clear(true);

    for path in ["ui/a", "ui/b", "ui/c", "ui/old"] {
        assert!(!layer.has(path));
    }
    assert_eq!(layer.active_len(), 0);
    assert_eq!(layer.cached_len(), 0);

    let mut destroyed = layer.resolver().destroyed();
    destroyed.sort_unstable();
    assert_eq!(destroyed, vec![1, 2, 3, 4]);

    let detaches: Vec<String> = entries(&log)
        .into_iter()
        .filter(|line| line.starts_with("detach"))
        .collect();
    assert_eq!(
        detaches,
        vec![
            "detach ui/old false",
            "detach ui/a true",
            "detach ui/b true",
            "detach ui/c true",
        ]
    );
}

#[test]
fn clear_preserve_moves_everything_to_the_cache() {
    let mut layer = layer();

    layer.add(UiId(1), "ui/a", ViewParams::new(), ViewCallbacks::new());
    layer.add(UiId(2), "ui/b", ViewParams::new(), ViewCallbacks::new());
    layer.resolver().complete_all();
    layer.update();
    // Still resolving when the layer is cleared.
    layer.add(UiId(3), "ui/slow", ViewParams::new(), ViewCallbacks::new());

    layer.clear(false);

    assert_eq!(layer.active_len(), 0);
    assert_eq!(layer.cached_len(), 3);
    assert!(!layer.has("ui/a"));
    assert!(layer.resolver().destroyed().is_empty());
    for path in ["ui/a", "ui/b", "ui/slow"] {
        assert!(!layer.cached_entry(path).unwrap().is_valid());
    }
    assert!(!layer.cached_entry("ui/slow").unwrap().has_instance());

    // Re-opening a cleared view is a cache hit.
    let handle = layer.add(UiId(4), "ui/b", ViewParams::new(), ViewCallbacks::new());
    assert!(layer.has(handle));
    assert_eq!(layer.resolver().request_count("ui/b"), 1);
}

#[test]
fn clear_preserve_keeps_the_latest_open() {
    let mut layer = layer();

    layer.add(UiId(1), "ui/a", ViewParams::new(), ViewCallbacks::new());
    layer.close("ui/a", false);
    layer.add(UiId(2), "ui/a", ViewParams::new(), ViewCallbacks::new());
    layer.resolver().complete_all();
    layer.update();

    layer.clear(false);

    assert_eq!(layer.cached_len(), 1);
    assert_eq!(layer.cached_entry("ui/a").unwrap().ui_id(), UiId(2));
    assert!(layer.cached_entry("ui/a").unwrap().has_instance());
}
