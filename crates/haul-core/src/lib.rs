//! # Haul Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod farm;
pub mod plan;
pub mod product;
pub mod stock;

// Re-export 主要類型
pub use catalog::{Catalog, CatalogProduct};
pub use farm::{new_farm_id, FarmData, DEFAULT_FARM_NAME};
pub use plan::{PlanReason, TripPlan, TripPlanLine};
pub use product::Product;
pub use stock::StockEntry;

/// Haul 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum HaulError {
    #[error("讀寫狀態檔失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化失敗: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("狀態檔版本過新: 檔案版本 {found}，支援上限 {supported}")]
    StateVersionMismatch { found: u32, supported: u32 },

    #[error("找不到產品: {0}")]
    ProductNotFound(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HaulError>;
