//! Shared application state for the web server.

use std::sync::Arc;

use bersih_cleansing::{Kamus, KamusKind, Normaliser};
use bersih_common::Result;
use bersih_config::Config;
use bersih_db::{Database, TweetRepository, TweetStore};

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Pipeline over the kamus tables loaded at startup
    pub normaliser: Normaliser,
    /// Where processed texts are appended
    pub store: Arc<dyn TweetStore>,
    /// Request body ceiling in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(normaliser: Normaliser, store: Arc<dyn TweetStore>) -> Self {
        Self {
            normaliser,
            store,
            max_upload_bytes: bersih_config::ServerConfig::default().max_upload_bytes,
        }
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Load both kamus files and point the store at the configured SQLite
    /// file. The file itself is only touched on the first write.
    pub fn from_config(config: &Config) -> Result<Self> {
        let alay = Kamus::load(KamusKind::Alay, &config.kamus.alay_path)?;
        let abusive = Kamus::load(KamusKind::Abusive, &config.kamus.abusive_path)?;
        let normaliser = Normaliser::new(Arc::new(alay), Arc::new(abusive));

        let db = Database::new(&config.database.path);
        let store: Arc<dyn TweetStore> = Arc::new(TweetRepository::new(Arc::new(db)));

        Ok(Self::new(normaliser, store).with_max_upload_bytes(config.server.max_upload_bytes))
    }
}

pub type SharedState = Arc<AppState>;
