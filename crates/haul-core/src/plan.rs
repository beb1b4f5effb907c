//! 行程計劃模型（優化結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 不可行原因代碼
///
/// 一般業務結果一律透過此代碼回報，不以錯誤拋出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanReason {
    /// 未選擇目標（目標 <= 0）
    NoTarget,
    /// 沒有符合資格的產品
    NoEligibleProducts,
    /// 即使不限趟數也無法達到目標
    QuotaUnreachable,
}

/// 行程計劃明細（單一產品）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlanLine {
    /// 產品ID
    pub product_id: String,

    /// 使用的滿載趟數
    pub full_trips: u32,

    /// 是否使用尾趟（殘量）
    pub last_partial_used: bool,

    /// 賣出總量（L）
    pub sold_l: Decimal,

    /// 該產品營收（EUR）
    pub revenue_eur: Decimal,
}

impl TripPlanLine {
    /// 該產品使用的總趟數（滿載趟 + 尾趟）
    pub fn total_trips(&self) -> u32 {
        self.full_trips + u32::from(self.last_partial_used)
    }
}

/// 行程計劃（優化結果）
///
/// 完整、自洽的快照：計劃本身不隱含任何對庫存的後續變動，
/// 套用與否是呼叫端的責任。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// 是否可行
    pub feasible: bool,

    /// 要求的目標營收（EUR，輸入回顯）
    pub target_eur: Decimal,

    /// 計劃實際產生的營收（EUR）
    pub total_revenue_eur: Decimal,

    /// 總趟數
    pub total_trips: u32,

    /// 各產品明細（只含實際使用的產品）
    pub lines: Vec<TripPlanLine>,

    /// 不可行原因（僅於不可行時存在）
    pub reason: Option<PlanReason>,
}

impl TripPlan {
    /// 創建可行的行程計劃
    pub fn feasible(
        target_eur: Decimal,
        total_revenue_eur: Decimal,
        total_trips: u32,
        lines: Vec<TripPlanLine>,
    ) -> Self {
        Self {
            feasible: true,
            target_eur,
            total_revenue_eur,
            total_trips,
            lines,
            reason: None,
        }
    }

    /// 創建不可行的行程計劃
    pub fn infeasible(target_eur: Decimal, reason: PlanReason) -> Self {
        Self {
            feasible: false,
            target_eur,
            total_revenue_eur: Decimal::ZERO,
            total_trips: 0,
            lines: Vec::new(),
            reason: Some(reason),
        }
    }

    /// 建構器模式：設置營收（回報不可行時的最大可得營收）
    pub fn with_total_revenue(mut self, total_revenue_eur: Decimal) -> Self {
        self.total_revenue_eur = total_revenue_eur;
        self
    }

    /// 距離目標尚缺的營收（達標時為 0）
    pub fn revenue_shortfall(&self) -> Decimal {
        if self.total_revenue_eur >= self.target_eur {
            Decimal::ZERO
        } else {
            self.target_eur - self.total_revenue_eur
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feasible_plan() {
        let lines = vec![TripPlanLine {
            product_id: "MILK".to_string(),
            full_trips: 2,
            last_partial_used: true,
            sold_l: Decimal::from(70),
            revenue_eur: Decimal::from(70),
        }];

        let plan = TripPlan::feasible(Decimal::from(50), Decimal::from(70), 3, lines);

        assert!(plan.feasible);
        assert_eq!(plan.total_trips, 3);
        assert_eq!(plan.lines[0].total_trips(), 3);
        assert_eq!(plan.reason, None);
        assert_eq!(plan.revenue_shortfall(), Decimal::ZERO);
    }

    #[test]
    fn test_infeasible_plan_with_max_revenue() {
        let plan = TripPlan::infeasible(Decimal::from(1000), PlanReason::QuotaUnreachable)
            .with_total_revenue(Decimal::from(100));

        assert!(!plan.feasible);
        assert_eq!(plan.total_trips, 0);
        assert_eq!(plan.reason, Some(PlanReason::QuotaUnreachable));
        assert_eq!(plan.total_revenue_eur, Decimal::from(100));
        assert_eq!(plan.revenue_shortfall(), Decimal::from(900));
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = TripPlan::feasible(
            Decimal::from(50),
            Decimal::from(60),
            2,
            vec![TripPlanLine {
                product_id: "MILK".to_string(),
                full_trips: 2,
                last_partial_used: false,
                sold_l: Decimal::from(60),
                revenue_eur: Decimal::from(60),
            }],
        );

        let json = serde_json::to_string(&plan).unwrap();
        let restored: TripPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_reason_codes_are_stable() {
        // 原因代碼是對外契約的一部分，序列化字串不可變動
        assert_eq!(
            serde_json::to_string(&PlanReason::NoTarget).unwrap(),
            "\"no_target\""
        );
        assert_eq!(
            serde_json::to_string(&PlanReason::NoEligibleProducts).unwrap(),
            "\"no_eligible_products\""
        );
        assert_eq!(
            serde_json::to_string(&PlanReason::QuotaUnreachable).unwrap(),
            "\"quota_unreachable\""
        );
    }
}
