//! 優化輸入產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 參與行程優化的產品快照
///
/// 每次優化呼叫的不可變輸入；`product_id` 在同一批輸入中必須唯一。
/// 數值皆須非負，負值輸入屬呼叫端前置條件違反。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub product_id: String,

    /// 目前庫存量（L）
    pub stock_l: Decimal,

    /// 必須保留不賣的最低量（L）
    pub min_keep_l: Decimal,

    /// 單趟可運載量上限（L）；0 表示無法運送
    pub cap_per_trip_l: Decimal,

    /// 每 1000 L 價格（EUR）
    pub price_per_1000: Decimal,

    /// 是否參與優化
    pub enabled: bool,
}

impl Product {
    /// 創建新的產品快照
    pub fn new(
        product_id: String,
        stock_l: Decimal,
        cap_per_trip_l: Decimal,
        price_per_1000: Decimal,
    ) -> Self {
        Self {
            product_id,
            stock_l,
            min_keep_l: Decimal::ZERO,
            cap_per_trip_l,
            price_per_1000,
            enabled: true,
        }
    }

    /// 建構器模式：設置最低保留量
    pub fn with_min_keep(mut self, min_keep_l: Decimal) -> Self {
        self.min_keep_l = min_keep_l;
        self
    }

    /// 建構器模式：設置是否參與優化
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// 可售量：庫存 - 最低保留量
    pub fn sellable_l(&self) -> Decimal {
        self.stock_l - self.min_keep_l
    }

    /// 每公升價格（EUR/L）
    pub fn price_per_l(&self) -> Decimal {
        self.price_per_1000 / Decimal::from(1000)
    }

    /// 檢查是否符合優化資格
    ///
    /// 需同時滿足：參與優化、單趟運載量 > 0、可售量 > 0。
    pub fn is_eligible(&self) -> bool {
        self.enabled && self.cap_per_trip_l > Decimal::ZERO && self.sellable_l() > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_create_product() {
        let product = Product::new(
            "MILK".to_string(),
            Decimal::from(100),
            Decimal::from(30),
            Decimal::from(1000),
        );

        assert_eq!(product.product_id, "MILK");
        assert_eq!(product.min_keep_l, Decimal::ZERO);
        assert_eq!(product.sellable_l(), Decimal::from(100));
        assert_eq!(product.price_per_l(), Decimal::from(1));
        assert!(product.is_eligible());
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new(
            "EGGS".to_string(),
            Decimal::from(100),
            Decimal::from(30),
            Decimal::from(500),
        )
        .with_min_keep(Decimal::from(40))
        .with_enabled(false);

        assert_eq!(product.min_keep_l, Decimal::from(40));
        assert_eq!(product.sellable_l(), Decimal::from(60));
        assert!(!product.enabled);
        assert!(!product.is_eligible());
    }

    #[rstest]
    #[case(Decimal::from(100), Decimal::ZERO, Decimal::ZERO, true, false)] // 無運載量
    #[case(Decimal::from(100), Decimal::from(100), Decimal::from(30), true, false)] // 可售量為 0
    #[case(Decimal::from(100), Decimal::from(120), Decimal::from(30), true, false)] // 保留量超過庫存
    #[case(Decimal::from(100), Decimal::ZERO, Decimal::from(30), false, false)] // 停用
    #[case(Decimal::from(100), Decimal::ZERO, Decimal::from(30), true, true)]
    fn test_eligibility(
        #[case] stock_l: Decimal,
        #[case] min_keep_l: Decimal,
        #[case] cap_per_trip_l: Decimal,
        #[case] enabled: bool,
        #[case] expected: bool,
    ) {
        let product = Product::new(
            "WOOL".to_string(),
            stock_l,
            cap_per_trip_l,
            Decimal::from(500),
        )
        .with_min_keep(min_keep_l)
        .with_enabled(enabled);

        assert_eq!(product.is_eligible(), expected);
    }

    #[test]
    fn test_price_per_l_is_exact() {
        // 250 EUR / 1000 L = 0.25 EUR/L，Decimal 下不產生浮點誤差
        let product = Product::new(
            "HONEY".to_string(),
            Decimal::from(10),
            Decimal::from(5),
            Decimal::from(250),
        );

        assert_eq!(product.price_per_l(), Decimal::new(25, 2));
    }
}
