//! # Haul
//!
//! 農場貨品送貨行程規劃引擎
//!
//! 給定各產品的庫存、最低保留量、單趟運載量與價格，以及一個
//! 目標營收，規劃出達標所需最少趟數、且在同趟數下保留最多庫存
//! 的銷售計劃。

// Re-export 主要類型
pub use haul_calc::{GreedySimulator, TripPlanner};
pub use haul_core::{
    new_farm_id, Catalog, CatalogProduct, FarmData, HaulError, PlanReason, Product, Result,
    StockEntry, TripPlan, TripPlanLine, DEFAULT_FARM_NAME,
};
pub use haul_store::{load_catalog, SavedState, StateStore, DATA_VERSION, STATE_FILE_NAME};
