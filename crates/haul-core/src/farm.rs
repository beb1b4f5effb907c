//! 農場資料模型

use crate::{CatalogProduct, Product, StockEntry, TripPlan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 預設農場名稱
pub const DEFAULT_FARM_NAME: &str = "Mi granja";

/// 創建新的農場ID（v4 UUID 前 10 個十六進位字元）
pub fn new_farm_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(10);
    id
}

/// 單一農場的完整狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmData {
    /// 農場名稱
    pub name: String,

    /// 庫存清單
    #[serde(default)]
    pub stock: Vec<StockEntry>,

    /// 最近一次計算的可行計劃
    #[serde(default)]
    pub last_plan: Option<TripPlan>,

    /// 使用者自訂產品
    #[serde(default)]
    pub user_products: Vec<CatalogProduct>,
}

impl FarmData {
    /// 創建新的空農場
    pub fn new(name: String) -> Self {
        Self {
            name,
            stock: Vec::new(),
            last_plan: None,
            user_products: Vec::new(),
        }
    }

    /// 查詢某產品的庫存項目
    pub fn find_stock(&self, product_id: &str) -> Option<&StockEntry> {
        self.stock.iter().find(|e| e.product_id == product_id)
    }

    /// 查詢某產品的庫存項目（可變）
    pub fn find_stock_mut(&mut self, product_id: &str) -> Option<&mut StockEntry> {
        self.stock.iter_mut().find(|e| e.product_id == product_id)
    }

    /// 全部庫存轉換為優化輸入
    pub fn opt_products(&self) -> Vec<Product> {
        self.stock.iter().map(StockEntry::to_product).collect()
    }

    /// 庫存總值（EUR）
    pub fn total_stock_value_eur(&self) -> Decimal {
        self.stock.iter().map(StockEntry::stock_value_eur).sum()
    }

    /// 套用行程計劃：逐行扣減庫存，扣到恰好為 0 的項目自動移除
    ///
    /// 不可行的計劃不做任何變動。回傳實際更動的庫存項目數。
    pub fn apply_plan(&mut self, plan: &TripPlan) -> usize {
        if !plan.feasible {
            return 0;
        }

        let mut touched = 0;
        let mut emptied: Vec<String> = Vec::new();
        for line in &plan.lines {
            let entry = match self.find_stock_mut(&line.product_id) {
                Some(entry) => entry,
                None => continue,
            };

            entry.qty_l -= line.sold_l;
            touched += 1;
            if entry.qty_l == Decimal::ZERO {
                emptied.push(line.product_id.clone());
            }
        }
        self.stock.retain(|e| !emptied.contains(&e.product_id));

        touched
    }
}
