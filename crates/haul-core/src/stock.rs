//! 庫存登記模型

use crate::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// 庫存項目（登記簿中的一項產品）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    /// 產品ID
    pub product_id: String,

    /// 庫存量（L）
    pub qty_l: Decimal,

    /// 每 1000 L 最高售價（EUR）
    pub max_price_per_1000: Decimal,

    /// 單趟可運載量上限（L）
    #[serde(default)]
    pub cap_per_trip_l: Decimal,

    /// 最低保留量（L）
    #[serde(default)]
    pub min_keep_l: Decimal,

    /// 是否參與優化
    #[serde(default = "default_enabled")]
    pub enabled_for_optimization: bool,
}

impl StockEntry {
    /// 創建新的庫存項目
    pub fn new(product_id: String, qty_l: Decimal, max_price_per_1000: Decimal) -> Self {
        Self {
            product_id,
            qty_l,
            max_price_per_1000,
            cap_per_trip_l: Decimal::ZERO,
            min_keep_l: Decimal::ZERO,
            enabled_for_optimization: true,
        }
    }

    /// 建構器模式：設置單趟運載量
    pub fn with_cap_per_trip(mut self, cap_per_trip_l: Decimal) -> Self {
        self.cap_per_trip_l = cap_per_trip_l;
        self
    }

    /// 建構器模式：設置最低保留量
    pub fn with_min_keep(mut self, min_keep_l: Decimal) -> Self {
        self.min_keep_l = min_keep_l;
        self
    }

    /// 建構器模式：設置是否參與優化
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled_for_optimization = enabled;
        self
    }

    /// 目前庫存總值（EUR）：數量 × 每公升價格
    pub fn stock_value_eur(&self) -> Decimal {
        self.qty_l * (self.max_price_per_1000 / Decimal::from(1000))
    }

    /// 轉換為優化輸入快照
    pub fn to_product(&self) -> Product {
        Product {
            product_id: self.product_id.clone(),
            stock_l: self.qty_l,
            min_keep_l: self.min_keep_l,
            cap_per_trip_l: self.cap_per_trip_l,
            price_per_1000: self.max_price_per_1000,
            enabled: self.enabled_for_optimization,
        }
    }
}
