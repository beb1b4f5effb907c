//! 農場狀態持久化示例：規劃 → 套用 → 保存 → 重新載入

use std::collections::HashMap;

use haul_calc::TripPlanner;
use haul_core::{new_farm_id, FarmData, StockEntry};
use haul_store::StateStore;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 農場狀態持久化示例 ===\n");

    // 1. 建立農場與庫存
    let farm_id = new_farm_id();
    let mut farm = FarmData::new("Granja del valle".to_string());
    farm.stock.push(
        StockEntry::new("MILK".to_string(), Decimal::from(180), Decimal::from(1500))
            .with_cap_per_trip(Decimal::from(50)),
    );
    farm.stock.push(
        StockEntry::new("HONEY".to_string(), Decimal::from(30), Decimal::from(5000))
            .with_cap_per_trip(Decimal::from(20))
            .with_min_keep(Decimal::from(5)),
    );
    println!("農場「{}」庫存總值: {} EUR", farm.name, farm.total_stock_value_eur());

    // 2. 規劃目標 200 EUR
    let plan = TripPlanner::plan(&farm.opt_products(), Decimal::from(200));
    println!(
        "計劃：可行 = {}，{} 趟，營收 {} EUR",
        plan.feasible, plan.total_trips, plan.total_revenue_eur
    );

    // 3. 套用計劃
    let touched = farm.apply_plan(&plan);
    println!("套用後更動 {} 項庫存，剩餘總值: {} EUR", touched, farm.total_stock_value_eur());

    // 4. 保存至狀態檔
    let data_dir = std::env::temp_dir().join("haul-demo");
    let store = StateStore::new(&data_dir);
    let mut farms = HashMap::new();
    farms.insert(farm_id.clone(), farm);
    store.save(&farms, &farm_id)?;
    println!("狀態已保存: {:?}", store.path());

    // 5. 重新載入驗證
    let (loaded, current) = store.load()?;
    println!(
        "重新載入：農場 {} 座，目前農場「{}」",
        loaded.len(),
        loaded[&current].name
    );

    Ok(())
}
