// Host-side tests for the manifest and the all-or-nothing loader.
// Loads are plain in-memory futures driven by `block_on`.

use draw_core::{default_manifest, load_all, unique_leaf_ids, AssetManifest, AssetPaths, LoadError};
use futures::executor::block_on;
use indexmap::IndexMap;
use std::cell::Cell;
use std::task::Poll;

fn manifest(groups: &[(&str, &str, &[&str])]) -> AssetManifest {
    AssetManifest::new(
        groups
            .iter()
            .map(|(group, sub, leaves)| {
                let inner = IndexMap::from([(
                    sub.to_string(),
                    leaves.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                )]);
                IndexMap::from([(group.to_string(), inner)])
            })
            .collect(),
    )
}

#[test]
fn every_leaf_resolves_to_its_own_handle() {
    let m = manifest(&[("g1", "s", &["a", "b"]), ("g2", "s", &["c"])]);
    let paths = AssetPaths::new("img/", ".png");
    let table = block_on(load_all(&m, &paths, |url: String| async move {
        Ok::<_, &str>(url.to_uppercase())
    }))
    .expect("all loads succeed");

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("a").map(String::as_str), Some("IMG/A.PNG"));
    assert_eq!(table.get("b").map(String::as_str), Some("IMG/B.PNG"));
    assert_eq!(table.get("c").map(String::as_str), Some("IMG/C.PNG"));
    assert!(table.get("d").is_none());
    assert_eq!(table.require("d"), Err(LoadError::Missing("d".to_string())));
}

#[test]
fn one_failed_load_fails_the_batch() {
    let m = manifest(&[("g", "s", &["a", "b", "c"])]);
    let paths = AssetPaths::default();
    let result = block_on(load_all(&m, &paths, |url: String| async move {
        if url.ends_with("/b.png") {
            Err("404")
        } else {
            Ok(url)
        }
    }));

    assert_eq!(
        result.unwrap_err(),
        LoadError::Asset {
            id: "b".to_string(),
            url: "assets/b.png".to_string(),
            reason: "404".to_string(),
        }
    );
}

#[test]
fn all_requests_are_issued_before_any_completes() {
    let m = manifest(&[("g", "s", &["a", "b", "c", "d"])]);
    let issued = &Cell::new(0usize);
    let table = block_on(load_all(&m, &AssetPaths::default(), move |url: String| {
        issued.set(issued.get() + 1);
        futures::future::poll_fn(move |cx| {
            if issued.get() == 4 {
                Poll::Ready(Ok::<_, &str>(url.clone()))
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
    }))
    .expect("loads complete once all are in flight");
    assert_eq!(table.len(), 4);
}

#[test]
fn duplicate_ids_are_requested_once() {
    let m = manifest(&[("g1", "s", &["a", "b"]), ("g2", "s", &["a"])]);
    assert_eq!(unique_leaf_ids(&m), vec!["a", "b"]);

    let calls = Cell::new(0usize);
    let table = block_on(load_all(&m, &AssetPaths::default(), |url: String| {
        calls.set(calls.get() + 1);
        async move { Ok::<_, &str>(url) }
    }))
    .expect("loads succeed");
    assert_eq!(calls.get(), 2);
    assert_eq!(table.len(), 2);
}

#[test]
fn empty_manifest_yields_empty_table() {
    let table = block_on(load_all(
        &AssetManifest::default(),
        &AssetPaths::default(),
        |url: String| async move { Ok::<_, &str>(url) },
    ))
    .expect("nothing to load");
    assert!(table.is_empty());
}

#[test]
fn paths_join_root_id_and_extension() {
    let paths = AssetPaths::default();
    assert_eq!(paths.resolve("tube"), "assets/tube.png");
    assert_eq!(AssetPaths::new("", "").resolve("x"), "x");
}

#[test]
fn manifest_deserializes_from_grouped_json() {
    let json = r#"[
        {"scene": {"tube": ["tube", "peekshine"], "masks": ["glassmask"]}},
        {"balls": {"numbers": ["n1", "n2"]}}
    ]"#;
    let m: AssetManifest = serde_json::from_str(json).expect("valid manifest");
    assert_eq!(m.groups.len(), 2);
    let ids: Vec<&str> = m.leaf_ids().collect();
    assert_eq!(ids, vec!["tube", "peekshine", "glassmask", "n1", "n2"]);
}

#[test]
fn first_duplicate_in_manifest_order_wins() {
    let json = r#"[
        {"scene": {"zeta": ["shared", "z1"], "alpha": ["a1", "shared"]}}
    ]"#;
    let m: AssetManifest = serde_json::from_str(json).expect("valid manifest");
    assert_eq!(unique_leaf_ids(&m), vec!["shared", "z1", "a1"]);
}

#[test]
fn default_manifest_lists_scene_and_every_label() {
    let m = default_manifest(15);
    let ids = unique_leaf_ids(&m);
    assert_eq!(ids.len(), 8 + 3 + 15);
    for n in 1..=15 {
        assert!(ids.contains(&format!("n{n}")), "missing label n{n}");
    }
    assert!(!ids.contains(&"n16".to_string()));
}
