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

// Strata Sandbox
// Drives one view layer against a threaded in-memory catalog.

use std::any::Any;
use std::collections::HashMap;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use strata_core::asset::{AssetCompleter, AssetResolver, PendingAsset, Prefab, ResolveError};
use strata_core::scene::{LayerInfo, ViewNode};
use strata_core::view::{ResourcePath, UiId, ViewCallbacks, ViewParams};
use strata_layer::{LayerConfig, LayerController, LayerEvent, LayerEventBus};

const CONFIG_FILE: &str = "layer.toml";

/// Optional on-disk configuration, read from `layer.toml` when present.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SandboxConfig {
    layer: LayerConfig,
}

fn load_config(path: &Path) -> Result<SandboxConfig> {
    if !path.exists() {
        log::info!("No {} found, using the default layer.", path.display());
        return Ok(SandboxConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// A node that prints what happens to it.
struct ConsoleNode {
    title: String,
    name: String,
    active: bool,
}

impl ViewNode for ConsoleNode {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn attach_to(&mut self, layer: &LayerInfo) {
        println!(
            "  [{}] '{}' parented under '{}'",
            self.name, self.title, layer.name
        );
    }

    fn detach(&mut self) {
        println!("  [{}] '{}' unparented", self.name, self.title);
    }

    fn reset_local_transform(&mut self) {}

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn destroy(self: Box<Self>) {
        println!("  [{}] '{}' destroyed", self.name, self.title);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct ConsolePrefab {
    title: String,
}

impl ConsolePrefab {
    fn boxed(title: &str) -> Box<dyn Prefab> {
        Box::new(Self {
            title: title.to_string(),
        })
    }
}

impl Prefab for ConsolePrefab {
    fn instantiate(&self) -> Box<dyn ViewNode> {
        Box::new(ConsoleNode {
            title: self.title.clone(),
            name: String::new(),
            active: false,
        })
    }
}

/// Resolves paths against a fixed catalog on a background thread.
struct CatalogResolver {
    requests: flume::Sender<AssetCompleter>,
}

impl CatalogResolver {
    fn spawn(catalog: HashMap<&'static str, &'static str>, latency: Duration) -> Self {
        let (requests, incoming) = flume::unbounded::<AssetCompleter>();
        thread::spawn(move || {
            for completer in incoming.iter() {
                thread::sleep(latency);
                let path = completer.path().clone();
                let resolution = match catalog.get(path.as_str()) {
                    Some(title) => Ok(ConsolePrefab::boxed(title)),
                    None => Err(ResolveError::NotFound { path }),
                };
                completer.complete(resolution);
            }
            log::debug!("Catalog worker shutting down.");
        });

        Self { requests }
    }
}

impl AssetResolver for CatalogResolver {
    fn resolve_async(&mut self, path: &ResourcePath) -> PendingAsset {
        let (completer, pending) = PendingAsset::channel(path.clone());
        if let Err(flume::SendError(completer)) = self.requests.send(completer) {
            let path = path.clone();
            completer.complete(Err(ResolveError::Abandoned { path }));
        }
        pending
    }

    fn release(&mut self, path: &ResourcePath, full_unload: bool) {
        log::debug!("Released '{}' (full unload: {}).", path, full_unload);
    }
}

/// Pumps the layer until every resolution has been applied.
fn settle(layer: &mut LayerController<CatalogResolver>) {
    while layer.pending_len() > 0 {
        layer.update();
        thread::sleep(Duration::from_millis(5));
    }
}

fn report(bus: &LayerEventBus, current: &mut Vec<UiId>) {
    for event in bus.drain() {
        match event {
            LayerEvent::Attached { ui_id, .. } => current.push(ui_id),
            LayerEvent::Detached { ui_id, .. } => current.retain(|id| *id != ui_id),
            LayerEvent::ResolveFailed { error, .. } => println!("  resolve failed: {error}"),
            LayerEvent::DuplicateOpen { path, .. } => println!("  '{path}' is already open"),
        }
    }
    println!("  current views: {current:?}");
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config(Path::new(CONFIG_FILE))?;
    let catalog = HashMap::from([
        ("ui/login", "Login"),
        ("ui/hud", "Heads-up display"),
        ("ui/hint", "Hint"),
    ]);
    let resolver = CatalogResolver::spawn(catalog, Duration::from_millis(20));

    let bus = LayerEventBus::new();
    let mut layer = LayerController::new(config.layer, resolver).with_event_sender(bus.sender());
    let mut current = Vec::new();

    println!("Opening views:");
    let login = layer.add(
        UiId(1),
        "ui/login",
        ViewParams::new().with("guest".to_string()),
        ViewCallbacks::new().on_added(|view| {
            let user = view.params().get::<String>(0).map_or("?", String::as_str);
            println!("  login ready for {user}");
        }),
    );
    layer.add(UiId(2), "ui/hud", ViewParams::new(), ViewCallbacks::new());
    layer.add(UiId(2), "ui/hint", ViewParams::new(), ViewCallbacks::new());
    layer.add(UiId(3), "ui/gone", ViewParams::new(), ViewCallbacks::new());
    layer.add(UiId(1), "ui/login", ViewParams::new(), ViewCallbacks::new());
    settle(&mut layer);
    report(&bus, &mut current);

    println!("Lookups:");
    println!("  login open: {}", layer.has(login));
    for view in layer.get_all_by_ui_id(UiId(2)) {
        println!("  ui #2 -> '{}' ({})", view.path(), view.handle());
    }

    println!("Caching the login view:");
    layer.close("ui/login", false);
    report(&bus, &mut current);
    layer.add(UiId(1), "ui/login", ViewParams::new(), ViewCallbacks::new());
    report(&bus, &mut current);

    println!("Clearing the layer:");
    layer.clear(true);
    report(&bus, &mut current);
    log::info!("Final stats: {:?}", layer.stats());

    Ok(())
}
