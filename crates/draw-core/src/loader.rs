//! Concurrent, all-or-nothing asset loading.
//!
//! Each leaf identifier becomes one future that yields its own `(id, handle)`
//! pair. The futures are joined with `try_join_all`, so the batch resolves
//! only when every load succeeds and fails as soon as one load fails. The
//! table is assembled once, after the join, so a failed batch leaves nothing
//! half-populated behind.

use crate::error::LoadError;
use crate::manifest::{AssetManifest, AssetPaths};
use fnv::{FnvHashMap, FnvHashSet};
use futures::future::try_join_all;
use std::fmt::Display;
use std::future::Future;

/// Flat, read-only lookup from leaf identifier to loaded handle.
#[derive(Debug)]
pub struct AssetTable<H> {
    entries: FnvHashMap<String, H>,
}

impl<H> AssetTable<H> {
    pub fn get(&self, id: &str) -> Option<&H> {
        self.entries.get(id)
    }

    pub fn require(&self, id: &str) -> Result<&H, LoadError> {
        self.entries
            .get(id)
            .ok_or_else(|| LoadError::Missing(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<H> FromIterator<(String, H)> for AssetTable<H> {
    fn from_iter<I: IntoIterator<Item = (String, H)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Distinct leaf identifiers in first-seen order. Later duplicates are
/// dropped with a warning; they would otherwise overwrite an earlier entry.
pub fn unique_leaf_ids(manifest: &AssetManifest) -> Vec<String> {
    let mut seen = FnvHashSet::default();
    let mut out = Vec::new();
    for id in manifest.leaf_ids() {
        if seen.insert(id) {
            out.push(id.to_string());
        } else {
            log::warn!("[loader] duplicate asset id `{}` ignored", id);
        }
    }
    out
}

/// Load every leaf of `manifest` through `load`, which receives the resolved
/// URL. All requests are issued up front and run concurrently.
pub async fn load_all<H, E, F, Fut>(
    manifest: &AssetManifest,
    paths: &AssetPaths,
    load: F,
) -> Result<AssetTable<H>, LoadError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<H, E>>,
    E: Display,
{
    let ids = unique_leaf_ids(manifest);
    log::info!("[loader] loading {} assets from {}", ids.len(), paths.root);

    let requests = ids.into_iter().map(|id| {
        let url = paths.resolve(&id);
        let pending = load(url.clone());
        async move {
            match pending.await {
                Ok(handle) => Ok((id, handle)),
                Err(e) => Err(LoadError::Asset {
                    id,
                    url,
                    reason: e.to_string(),
                }),
            }
        }
    });

    let loaded = try_join_all(requests).await?;
    let table: AssetTable<H> = loaded.into_iter().collect();
    log::info!("[loader] {} assets ready", table.len());
    Ok(table)
}
