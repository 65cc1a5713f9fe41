use crate::constants::SCENE_SPRITES;
use crate::dom::js_err;
use draw_core::{label_asset, load_all, AssetManifest, AssetPaths, AssetTable, DrawConfig, LoadError};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub type ImageTable = AssetTable<web::HtmlImageElement>;

/// Resolves once the image has been fetched and decoded.
pub async fn load_image(url: String) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_src(&url);
    JsFuture::from(img.decode()).await.map_err(js_err)?;
    Ok(img)
}

/// Every image in the manifest, or the first failure.
pub async fn load_images(
    manifest: &AssetManifest,
    paths: &AssetPaths,
) -> Result<ImageTable, LoadError> {
    load_all(manifest, paths, load_image).await
}

/// The scene sprites plus one label per drawable number must be present,
/// otherwise a draw could reference an image that was never requested.
pub fn check_scene_assets(images: &ImageTable, config: &DrawConfig) -> anyhow::Result<()> {
    let labels = (1..=config.range_size).map(label_asset);
    let missing: Vec<String> = SCENE_SPRITES
        .iter()
        .map(|s| s.to_string())
        .chain(labels)
        .filter(|id| !images.contains(id))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("manifest is missing scene assets: {}", missing.join(", "))
    }
}
