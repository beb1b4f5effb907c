//! 簡單行程規劃示例

use haul_calc::TripPlanner;
use haul_core::Product;
use rust_decimal::Decimal;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== 簡單行程規劃示例 ===\n");

    // 三項產品：牛奶、羊毛、雞蛋
    let products = vec![
        Product::new(
            "MILK".to_string(),
            Decimal::from(260),
            Decimal::from(60),
            Decimal::from(1200),
        )
        .with_min_keep(Decimal::from(20)),
        Product::new(
            "WOOL".to_string(),
            Decimal::from(90),
            Decimal::from(45),
            Decimal::from(2400),
        ),
        Product::new(
            "EGGS".to_string(),
            Decimal::from(35),
            Decimal::from(50),
            Decimal::from(800),
        ),
    ];

    println!("庫存清單:");
    for product in &products {
        println!(
            "  - 產品: {}, 庫存: {} L, 保留: {} L, 單趟: {} L, 價格: {} EUR/1000L",
            product.product_id,
            product.stock_l,
            product.min_keep_l,
            product.cap_per_trip_l,
            product.price_per_1000
        );
    }

    let target = Decimal::from(400);
    println!("\n目標營收: {} EUR", target);

    let plan = TripPlanner::plan(&products, target);

    if !plan.feasible {
        println!(
            "\n無法達標（{:?}），最大可得營收: {} EUR",
            plan.reason, plan.total_revenue_eur
        );
        return;
    }

    println!(
        "\n計劃：共 {} 趟，營收 {} EUR",
        plan.total_trips, plan.total_revenue_eur
    );
    for line in &plan.lines {
        println!(
            "  - {}: 滿載趟 {} 趟{}，賣出 {} L，營收 {} EUR",
            line.product_id,
            line.full_trips,
            if line.last_partial_used {
                " + 尾趟"
            } else {
                ""
            },
            line.sold_l,
            line.revenue_eur
        );
    }
}
