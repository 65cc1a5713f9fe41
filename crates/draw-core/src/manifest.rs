//! Grouped asset manifest and URL resolution.

use crate::constants::{ASSET_EXTENSION, ASSET_ROOT, LABEL_ASSET_PREFIX};
use indexmap::IndexMap;
use serde::Deserialize;

/// `group name -> sub-key -> leaf identifiers`, in the order they were written.
pub type AssetGroup = IndexMap<String, IndexMap<String, Vec<String>>>;

/// Ordered list of asset groups, deserializable from
/// `[{"group": {"sub": ["leaf", ...]}}, ...]`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest {
    pub groups: Vec<AssetGroup>,
}

impl AssetManifest {
    pub fn new(groups: Vec<AssetGroup>) -> Self {
        Self { groups }
    }

    /// Every leaf identifier in manifest order (group, then sub-key, then
    /// list position). Duplicates are kept.
    pub fn leaf_ids(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.values())
            .flat_map(|sub| sub.values())
            .flat_map(|leaves| leaves.iter().map(String::as_str))
    }
}

/// Root path and file extension joined around each leaf identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    pub root: String,
    pub extension: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: ASSET_ROOT.to_string(),
            extension: ASSET_EXTENSION.to_string(),
        }
    }
}

impl AssetPaths {
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Plain concatenation, no escaping.
    pub fn resolve(&self, id: &str) -> String {
        format!("{}{}{}", self.root, id, self.extension)
    }
}

/// Asset identifier for the label sprite of `number`.
pub fn label_asset(number: u32) -> String {
    format!("{LABEL_ASSET_PREFIX}{number}")
}

fn group(name: &str, entries: &[(&str, Vec<String>)]) -> AssetGroup {
    let inner = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    IndexMap::from([(name.to_string(), inner)])
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Manifest for the stock scene: tube, masks, button states, ball bodies and
/// one label per number in `1..=range_size`.
pub fn default_manifest(range_size: u32) -> AssetManifest {
    let scene = group(
        "scene",
        &[
            ("tube", ids(&["tube", "peekshine", "windowshine"])),
            ("masks", ids(&["peekmask", "glassmask"])),
            (
                "playBtn",
                ids(&["playbutton_on", "playbutton_dis", "playbutton_off"]),
            ),
        ],
    );
    let balls = group(
        "balls",
        &[
            ("bodies", ids(&["redb", "blueb", "yellowb"])),
            ("numbers", (1..=range_size).map(label_asset).collect()),
        ],
    );
    AssetManifest::new(vec![scene, balls])
}
