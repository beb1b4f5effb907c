//! 目錄檔載入

use std::fs;
use std::path::Path;

use haul_core::{Catalog, Result};

/// 載入目錄 JSON 檔（`{"products": [...]}`）
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let catalog = Catalog::from_json_str(&raw)?;
    tracing::debug!("已載入目錄: {:?}（產品 {} 項）", path, catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haul_core::HaulError;

    #[test]
    fn test_load_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "products": [
                    {
                        "id": "MILK",
                        "name_es": "Leche",
                        "name_en": "Milk",
                        "icon": "milk.png",
                        "default_max_price_per_1000": 1500
                    },
                    {
                        "id": "WOOL",
                        "name_es": "Lana",
                        "name_en": "Wool",
                        "icon": "wool.png",
                        "default_max_price_per_1000": 800
                    }
                ]
            }"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.product_name("WOOL"), Some("Lana"));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_catalog(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, HaulError::Io(_)));
    }
}
