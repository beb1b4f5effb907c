//! 規劃狀態推導

use haul_core::Product;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 趟次類型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripKind {
    /// 滿載趟：載滿單趟運載量
    Full,
    /// 尾趟：滿載趟耗盡後剩餘的殘量，每產品至多一趟
    Last,
}

/// 候選趟次：取用量與其營收
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripCandidate {
    /// 趟次類型
    pub kind: TripKind,

    /// 取用量（L）
    pub qty_l: Decimal,

    /// 營收（EUR）
    pub value_eur: Decimal,
}

/// 單一產品在規劃過程中的狀態
///
/// 由 `Product` 推導一次，之後只在取用趟次時變動。
#[derive(Debug, Clone, PartialEq)]
pub struct ProductState {
    /// 產品ID
    pub product_id: String,

    /// 原始庫存量（L）
    pub stock_l: Decimal,

    /// 單趟運載量（L）
    pub cap_l: Decimal,

    /// 每公升價格（EUR/L）
    pub price_per_l: Decimal,

    /// 可售量（L）
    pub sellable_l: Decimal,

    /// 尚未取用的滿載趟數
    pub remaining_full: u32,

    /// 尾趟殘量（L），0 <= rem < cap
    pub rem_l: Decimal,

    /// 尾趟是否已取用
    pub last_used: bool,

    /// 已賣出量（L）
    pub sold_l: Decimal,

    /// 已選滿載趟數
    pub chosen_full: u32,

    /// 是否已選尾趟
    pub chosen_last: bool,
}

impl ProductState {
    /// 由產品快照推導規劃狀態；不符資格時回傳 None
    pub fn from_product(product: &Product) -> Option<Self> {
        if !product.is_eligible() {
            return None;
        }

        let sellable_l = product.sellable_l();
        let cap_l = product.cap_per_trip_l;
        let remaining_full = (sellable_l / cap_l).floor().to_u32().unwrap_or(0);
        let rem_l = sellable_l - Decimal::from(remaining_full) * cap_l;

        Some(Self {
            product_id: product.product_id.clone(),
            stock_l: product.stock_l,
            cap_l,
            price_per_l: product.price_per_l(),
            sellable_l,
            remaining_full,
            rem_l,
            last_used: false,
            sold_l: Decimal::ZERO,
            chosen_full: 0,
            chosen_last: false,
        })
    }

    /// 目前可取用的下一個候選趟次
    ///
    /// 滿載趟未耗盡時只提供滿載趟；尾趟僅在滿載趟全數取用後
    /// （或原本就沒有滿載趟時）提供，且每產品至多一次。
    pub fn next_candidate(&self) -> Option<TripCandidate> {
        if self.remaining_full > 0 {
            return Some(TripCandidate {
                kind: TripKind::Full,
                qty_l: self.cap_l,
                value_eur: self.cap_l * self.price_per_l,
            });
        }

        if self.rem_l > Decimal::ZERO && !self.last_used {
            return Some(TripCandidate {
                kind: TripKind::Last,
                qty_l: self.rem_l,
                value_eur: self.rem_l * self.price_per_l,
            });
        }

        None
    }

    /// 取用一趟但不記入銷售：供貪婪模擬的草稿狀態使用
    pub fn consume(&mut self, kind: TripKind) {
        match kind {
            TripKind::Full => self.remaining_full -= 1,
            TripKind::Last => self.last_used = true,
        }
    }

    /// 正式取用一趟並記入銷售
    pub fn commit(&mut self, candidate: &TripCandidate) {
        self.consume(candidate.kind);
        self.sold_l += candidate.qty_l;
        match candidate.kind {
            TripKind::Full => self.chosen_full += 1,
            TripKind::Last => self.chosen_last = true,
        }
    }

    /// 取用某趟後該產品剩餘的庫存量
    pub fn remaining_stock_after(&self, qty_l: Decimal) -> Decimal {
        self.stock_l - self.sold_l - qty_l
    }
}

/// 推導全部符合資格產品的規劃狀態
///
/// 依產品ID排序，確保結果與輸入順序無關。
pub fn eligible_states(products: &[Product]) -> Vec<ProductState> {
    let mut states: Vec<ProductState> = products
        .iter()
        .filter_map(ProductState::from_product)
        .collect();
    states.sort_by(|a, b| a.product_id.cmp(&b.product_id));
    states
}
