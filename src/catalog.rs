use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::data::plants::get_all_plants;
use crate::error::CatalogError;
use crate::models::plant::PlantRecord;

/// Read-only source of plant records. Each call returns a full snapshot;
/// filtering happens in memory.
#[async_trait]
pub trait PlantCatalog: Send + Sync {
    async fn all_plants(&self) -> Result<Vec<PlantRecord>, CatalogError>;

    async fn plant_by_id(&self, id: &str) -> Result<Option<PlantRecord>, CatalogError> {
        Ok(self.all_plants().await?.into_iter().find(|p| p.id == id))
    }
}

/// Catalogue held in memory, shared between workers.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    plants: Arc<Vec<PlantRecord>>,
}

impl InMemoryCatalog {
    pub fn new(plants: Vec<PlantRecord>) -> Self {
        Self {
            plants: Arc::new(plants),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(get_all_plants())
    }
}

#[async_trait]
impl PlantCatalog for InMemoryCatalog {
    async fn all_plants(&self) -> Result<Vec<PlantRecord>, CatalogError> {
        Ok(self.plants.as_ref().clone())
    }
}

/// Catalogue backed by a JSON array file, re-read on every call so edits are
/// picked up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PlantCatalog for JsonFileCatalog {
    async fn all_plants(&self) -> Result<Vec<PlantRecord>, CatalogError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        // A blank file is what readers see while the catalogue is being rewritten.
        if json.trim().is_empty() {
            return Err(CatalogError::Unavailable(format!(
                "'{}' is empty",
                self.path.display()
            )));
        }
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("garden-zones-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[actix_web::test]
    async fn test_in_memory_lookup() {
        let catalog = InMemoryCatalog::default();
        let plant = catalog.plant_by_id("1").await.unwrap();
        assert_eq!(plant.map(|p| p.name), Some("松果菊".to_string()));
        assert!(catalog.plant_by_id("nope").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_json_file_catalog_reads_records() {
        let path = temp_file(
            "ok.json",
            r#"[{"id": "a", "name": "景天", "sunlight": "high", "water_need": "low"}]"#,
        );
        let plants = JsonFileCatalog::new(&path).all_plants().await.unwrap();
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].sunlight, "high");
        std::fs::remove_file(path).ok();
    }

    #[actix_web::test]
    async fn test_json_file_catalog_missing_file() {
        let err = JsonFileCatalog::new("/nonexistent/plants.json")
            .all_plants()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[actix_web::test]
    async fn test_json_file_catalog_blank_file_is_unavailable() {
        let path = temp_file("blank.json", "  \n");
        let err = JsonFileCatalog::new(&path).all_plants().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
        std::fs::remove_file(path).ok();
    }

    #[actix_web::test]
    async fn test_json_file_catalog_malformed() {
        let path = temp_file("bad.json", "{not json");
        let err = JsonFileCatalog::new(&path).all_plants().await.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        std::fs::remove_file(path).ok();
    }
}
