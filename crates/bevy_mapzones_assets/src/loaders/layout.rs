use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    prelude::*,
    tasks::ConditionalSendFuture,
};
use thiserror::Error;

use crate::assets::layout::ZoneLayoutAsset;

/// Asset loader for zone layouts (`.zones.json` files)
#[derive(Default)]
pub struct ZoneLayoutLoader;

#[derive(Debug, Error)]
pub enum ZoneLayoutLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse zone layout: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssetLoader for ZoneLayoutLoader {
    type Asset = ZoneLayoutAsset;
    type Settings = ();
    type Error = ZoneLayoutLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let layout = ZoneLayoutAsset::from_slice(&bytes)?;
            debug!(
                "Loaded {} zone definitions from {:?}",
                layout.zones.len(),
                load_context.asset_path().path()
            );

            Ok(layout)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["zones.json"]
    }
}
