//! 行程規劃器

use rust_decimal::Decimal;

use haul_core::{PlanReason, Product, TripPlan, TripPlanLine};

use crate::greedy::GreedySimulator;
use crate::state::{eligible_states, TripCandidate};

/// 行程規劃器
///
/// 偏好順序（字典序）：
/// 1) 最少趟數（先以貪婪下界求出 K）
/// 2) 計劃後全體剩餘庫存最多（可少賣就少賣）
/// 3) 前兩者同分時營收最高
/// 4) 產品ID作最終決勝，保證相同輸入產生唯一計劃
pub struct TripPlanner;

impl TripPlanner {
    /// 規劃達到目標營收的最少趟數行程
    ///
    /// 純函數：不改動呼叫端資料，相同輸入必得相同計劃，
    /// 且與輸入順序無關。一般業務結果（含各種不可行）一律以
    /// `TripPlan` 回報，不拋出錯誤。
    pub fn plan(products: &[Product], target_eur: Decimal) -> TripPlan {
        // Step 0: 無目標
        if target_eur <= Decimal::ZERO {
            return TripPlan::infeasible(target_eur, PlanReason::NoTarget);
        }

        // Step 0: 推導資格狀態
        let mut states = eligible_states(products);
        if states.is_empty() {
            return TripPlan::infeasible(target_eur, PlanReason::NoEligibleProducts);
        }

        tracing::info!(
            "開始行程規劃：符合資格產品 {} 項，目標營收 {} EUR",
            states.len(),
            target_eur
        );
        let start_time = std::time::Instant::now();

        // Step 1: 最少趟數 K（貪婪下界，同時是可行性檢查）
        let k = match GreedySimulator::min_trips_needed(&states, target_eur) {
            Some(k) => k,
            None => {
                // 不限趟數也到不了目標：回報最大可得營收
                let max_all = GreedySimulator::max_revenue(&states, None);
                tracing::info!("目標無法達成：最大可得營收 {} EUR", max_all);
                return TripPlan::infeasible(target_eur, PlanReason::QuotaUnreachable)
                    .with_total_revenue(max_all);
            }
        };
        tracing::debug!("最少趟數 K = {}", k);

        // Step 2: 建構恰好 K 趟，逐趟挑「留最多庫存」且仍可達標的候選
        let mut total = Decimal::ZERO;
        let mut trips_used = 0u32;
        for step in 1..=k {
            let trips_left_after = k - step;

            let mut best_key: Option<(Decimal, Decimal, String)> = None;
            let mut best_choice: Option<(usize, TripCandidate)> = None;

            for idx in 0..states.len() {
                let candidate = match states[idx].next_candidate() {
                    Some(candidate) => candidate,
                    None => continue,
                };

                let remaining_after = states[idx].remaining_stock_after(candidate.qty_l);

                // 試探性取用，在草稿上評估剩餘趟數還能拿到多少
                let mut probe = states.clone();
                probe[idx].consume(candidate.kind);
                let max_future = GreedySimulator::max_revenue(&probe, Some(trips_left_after));

                // 可行性檢查：取了這趟之後必須仍能在剩餘趟數內達標
                if total + candidate.value_eur + max_future < target_eur {
                    continue;
                }

                // 選擇鍵：剩餘庫存 > 營收 > 產品ID
                let key = (
                    remaining_after,
                    candidate.value_eur,
                    states[idx].product_id.clone(),
                );
                if best_key.as_ref().map_or(true, |best| key > *best) {
                    best_key = Some(key);
                    best_choice = Some((idx, candidate));
                }
            }

            let (idx, candidate) = match best_choice {
                Some(choice) => choice,
                // K 的貪婪下界保證每一步至少有一個候選通過檢查
                None => break,
            };

            states[idx].commit(&candidate);
            total += candidate.value_eur;
            trips_used += 1;
            tracing::debug!(
                "第 {} 趟：{} {:?} {} L，+{} EUR",
                step,
                states[idx].product_id,
                candidate.kind,
                candidate.qty_l,
                candidate.value_eur
            );
        }

        // Step 3: 組裝明細（僅含實際使用的產品），呈現排序：
        // 總趟數多者在前，其次賣出量多者，最後依產品ID
        let mut lines: Vec<TripPlanLine> = states
            .iter()
            .filter(|st| st.chosen_full > 0 || st.chosen_last)
            .map(|st| TripPlanLine {
                product_id: st.product_id.clone(),
                full_trips: st.chosen_full,
                last_partial_used: st.chosen_last,
                sold_l: st.sold_l,
                revenue_eur: st.sold_l * st.price_per_l,
            })
            .collect();
        lines.sort_by(|a, b| {
            b.total_trips()
                .cmp(&a.total_trips())
                .then_with(|| b.sold_l.cmp(&a.sold_l))
                .then_with(|| a.product_id.cmp(&b.product_id))
        });

        tracing::info!(
            "行程規劃完成：{} 趟，營收 {} EUR，耗時 {:?}",
            trips_used,
            total,
            start_time.elapsed()
        );

        TripPlan::feasible(target_eur, total, trips_used, lines)
    }
}
