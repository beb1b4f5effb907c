//! 產品目錄模型

use crate::{HaulError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 目錄產品（內建或使用者自訂）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// 產品ID
    pub id: String,

    /// 西班牙文名稱
    #[serde(default)]
    pub name_es: String,

    /// 英文名稱
    #[serde(default)]
    pub name_en: String,

    /// 圖示檔名
    #[serde(default)]
    pub icon: String,

    /// 預設每 1000 L 最高售價（EUR）
    #[serde(default)]
    pub default_max_price_per_1000: Decimal,
}

/// 目錄 JSON 檔案格式：`{"products": [...]}`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<CatalogProduct>,
}

/// 產品目錄（依產品ID索引）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, CatalogProduct>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// 由產品清單建立目錄
    pub fn from_products(items: Vec<CatalogProduct>) -> Self {
        let products = items.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { products }
    }

    /// 解析目錄 JSON
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self::from_products(file.products))
    }

    /// 查詢產品
    pub fn get(&self, product_id: &str) -> Option<&CatalogProduct> {
        self.products.get(product_id)
    }

    /// 查詢產品，不存在時回報錯誤
    pub fn require(&self, product_id: &str) -> Result<&CatalogProduct> {
        self.get(product_id)
            .ok_or_else(|| HaulError::ProductNotFound(product_id.to_string()))
    }

    /// 產品顯示名稱（預設使用西班牙文名稱）
    pub fn product_name(&self, product_id: &str) -> Option<&str> {
        self.get(product_id).map(|p| p.name_es.as_str())
    }

    /// 加入產品（同ID覆蓋）
    pub fn insert(&mut self, product: CatalogProduct) {
        self.products.insert(product.id.clone(), product);
    }

    /// 目錄產品數
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
