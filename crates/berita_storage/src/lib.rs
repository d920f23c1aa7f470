use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use berita_core::config::StoreConfig;
use berita_core::{ArticleSource, Error, Result};

pub mod backends;

pub use backends::*;

/// The document stores the dashboard can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    Json,
    MongoDb,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "json" => Ok(Self::Json),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            other => Err(Error::Config(format!(
                "unknown storage backend '{}' (expected memory, json or mongodb)",
                other
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Json => "json",
            Self::MongoDb => "mongodb",
        };
        f.write_str(name)
    }
}

/// Build the source described by `config`.
pub async fn create_source(config: &StoreConfig) -> Result<Arc<dyn ArticleSource>> {
    let kind: BackendKind = config.kind.parse()?;
    tracing::debug!(%kind, "creating article source");
    match kind {
        BackendKind::Memory => Ok(Arc::new(InMemorySource::new())),
        BackendKind::Json => {
            let path = config.path.clone().ok_or_else(|| {
                Error::Config("the json backend needs store.path (or --backend-url)".to_string())
            })?;
            Ok(Arc::new(JsonFileSource::new(path)))
        }
        #[cfg(feature = "mongodb")]
        BackendKind::MongoDb => Ok(Arc::new(MongoSource::connect(config).await?)),
        #[cfg(not(feature = "mongodb"))]
        BackendKind::MongoDb => Err(Error::Config(
            "this build has no MongoDB support (enable the `mongodb` feature)".to_string(),
        )),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_source, BackendKind};
}
