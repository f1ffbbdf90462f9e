//! Handles to shared resources owned outside the asset pipeline
//!
//! A handle names a resource; it never owns it. Copying a handle shares the
//! underlying resource, so handle-typed fields get reference semantics for
//! free when a rule is cloned.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference to one tile sprite inside a tileset atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteRef {
    /// The tileset this sprite lives in.
    pub tileset: Uuid,
    /// Tile index within the tileset.
    pub tile: u32,
}

impl SpriteRef {
    pub fn new(tileset: Uuid, tile: u32) -> Self {
        Self { tileset, tile }
    }
}

/// A reference to an instantiable object (prefab/scene file).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabRef {
    /// Path to the prefab file (relative to the assets directory)
    pub path: String,
}

impl PrefabRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
