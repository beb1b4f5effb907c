//! 貪婪營收模擬

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;

use crate::state::{ProductState, TripKind};

/// 堆中的候選趟次：營收高者先出，同額時產品ID小者先出
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapCandidate {
    value_eur: Decimal,
    product_id: String,
    idx: usize,
    kind: TripKind,
}

impl Ord for HeapCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_eur
            .cmp(&other.value_eur)
            .then_with(|| other.product_id.cmp(&self.product_id))
    }
}

impl PartialOrd for HeapCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 貪婪模擬器：反覆取當前營收最高的趟次
///
/// 每產品任一時刻只在堆中保留一個候選：滿載趟耗盡前是滿載趟，
/// 之後才是尾趟。取用後把該產品的下一個候選補回堆中。
pub struct GreedySimulator;

impl GreedySimulator {
    /// 在趟數預算內可得的最大營收
    ///
    /// `trip_budget` 為 None 時不限趟數（耗盡全部候選）。
    pub fn max_revenue(states: &[ProductState], trip_budget: Option<u32>) -> Decimal {
        let (total, _) = Self::simulate(states, trip_budget, None);
        total
    }

    /// 達到目標營收所需的最少趟數；無法達到時回傳 None
    ///
    /// 每趟的邊際營收只會持平或遞減（滿載趟定額，尾趟更低且排在
    /// 最後），因此「每趟取最高價值」對最少趟數是最優策略。
    pub fn min_trips_needed(states: &[ProductState], target_eur: Decimal) -> Option<u32> {
        if target_eur <= Decimal::ZERO {
            return Some(0);
        }

        let (total, trips) = Self::simulate(states, None, Some(target_eur));
        if total >= target_eur {
            Some(trips)
        } else {
            None
        }
    }

    /// 共用的貪婪迴圈
    ///
    /// 在深拷貝的草稿狀態上模擬，絕不改動呼叫端的狀態。
    /// 到達 `revenue_floor` 或耗盡 `trip_budget`（或候選）即停止。
    fn simulate(
        states: &[ProductState],
        trip_budget: Option<u32>,
        revenue_floor: Option<Decimal>,
    ) -> (Decimal, u32) {
        let mut scratch: Vec<ProductState> = states.to_vec();

        let mut heap: BinaryHeap<HeapCandidate> = BinaryHeap::new();
        for (idx, state) in scratch.iter().enumerate() {
            if let Some(candidate) = state.next_candidate() {
                heap.push(HeapCandidate {
                    value_eur: candidate.value_eur,
                    product_id: state.product_id.clone(),
                    idx,
                    kind: candidate.kind,
                });
            }
        }

        let mut total = Decimal::ZERO;
        let mut trips = 0u32;
        loop {
            if let Some(budget) = trip_budget {
                if trips >= budget {
                    break;
                }
            }
            if let Some(floor) = revenue_floor {
                if total >= floor {
                    break;
                }
            }

            let best = match heap.pop() {
                Some(best) => best,
                None => break,
            };

            total += best.value_eur;
            trips += 1;

            let state = &mut scratch[best.idx];
            state.consume(best.kind);

            // 該產品的下一個候選（若還有）補回堆中
            if let Some(candidate) = state.next_candidate() {
                heap.push(HeapCandidate {
                    value_eur: candidate.value_eur,
                    product_id: state.product_id.clone(),
                    idx: best.idx,
                    kind: candidate.kind,
                });
            }
        }

        (total, trips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::eligible_states;
    use haul_core::Product;

    fn states(specs: &[(&str, u32, u32, u32)]) -> Vec<ProductState> {
        let products: Vec<Product> = specs
            .iter()
            .map(|(id, stock, cap, price)| {
                Product::new(
                    id.to_string(),
                    Decimal::from(*stock),
                    Decimal::from(*cap),
                    Decimal::from(*price),
                )
            })
            .collect();
        eligible_states(&products)
    }

    #[test]
    fn test_min_trips_single_product() {
        // 3 滿載趟各 30 EUR；目標 50 EUR 需要 2 趟
        let st = states(&[("MILK", 100, 30, 1000)]);

        assert_eq!(GreedySimulator::min_trips_needed(&st, Decimal::from(50)), Some(2));
        assert_eq!(GreedySimulator::min_trips_needed(&st, Decimal::from(30)), Some(1));
        assert_eq!(GreedySimulator::min_trips_needed(&st, Decimal::from(100)), Some(4));
    }

    #[test]
    fn test_min_trips_unreachable() {
        let st = states(&[("MILK", 100, 30, 1000)]);

        assert_eq!(GreedySimulator::min_trips_needed(&st, Decimal::from(101)), None);
    }

    #[test]
    fn test_min_trips_zero_target() {
        let st = states(&[("MILK", 100, 30, 1000)]);

        assert_eq!(GreedySimulator::min_trips_needed(&st, Decimal::ZERO), Some(0));
    }

    #[test]
    fn test_max_revenue_respects_budget() {
        // 滿載趟 30 + 30 + 30，尾趟 10
        let st = states(&[("MILK", 100, 30, 1000)]);

        assert_eq!(GreedySimulator::max_revenue(&st, Some(0)), Decimal::ZERO);
        assert_eq!(GreedySimulator::max_revenue(&st, Some(2)), Decimal::from(60));
        assert_eq!(GreedySimulator::max_revenue(&st, Some(10)), Decimal::from(100));
        assert_eq!(GreedySimulator::max_revenue(&st, None), Decimal::from(100));
    }

    #[test]
    fn test_greedy_takes_highest_value_first() {
        // WOOL 單趟 50 EUR，MILK 單趟 30 EUR：預算 1 趟時取 WOOL
        let st = states(&[("MILK", 100, 30, 1000), ("WOOL", 100, 25, 2000)]);

        assert_eq!(GreedySimulator::max_revenue(&st, Some(1)), Decimal::from(50));
        assert_eq!(GreedySimulator::min_trips_needed(&st, Decimal::from(80)), Some(2));
    }

    #[test]
    fn test_last_trip_only_after_full_trips() {
        // 可售 40 L、單趟 30 L：第二趟必須是 10 L 尾趟
        let st = states(&[("MILK", 40, 30, 1000)]);

        assert_eq!(GreedySimulator::max_revenue(&st, Some(1)), Decimal::from(30));
        assert_eq!(GreedySimulator::max_revenue(&st, Some(2)), Decimal::from(40));
    }

    #[test]
    fn test_simulation_does_not_mutate_input() {
        let st = states(&[("MILK", 100, 30, 1000)]);
        let before = st.clone();

        let _ = GreedySimulator::max_revenue(&st, None);
        let _ = GreedySimulator::min_trips_needed(&st, Decimal::from(50));

        assert_eq!(st, before);
    }
}
