//! # Chemplan Calculation Engine
//!
//! 庫存彙總、配方需求與採購規劃計算

pub mod calculator;
pub mod procurement;
pub mod requirement;
pub mod stock;

// Re-export 主要類型
pub use calculator::PlanCalculator;
pub use procurement::{ProcurementPlanner, PurchasePlan};
pub use requirement::{RecipeContribution, RequirementCalculator};
pub use stock::StockAggregator;

use chemplan_core::{ComparisonResult, RequirementEntry, StockEntry};
use serde::{Deserialize, Serialize};

/// 規劃計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    /// 可用庫存（kg）
    pub stock: Vec<StockEntry>,

    /// 各配方用量
    pub recipe_contributions: Vec<RecipeContribution>,

    /// 總需求（液體 L、粉末 kg）
    pub requirements: Vec<RequirementEntry>,

    /// 庫存與需求比較（kg）
    pub comparisons: Vec<ComparisonResult>,

    /// 採購清單
    pub purchase_plan: PurchasePlan,

    /// 計算耗時（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_time_ms: Option<u128>,
}

impl PlanResult {
    /// 是否所有化學品皆庫存充足
    pub fn is_fully_stocked(&self) -> bool {
        self.purchase_plan.is_empty()
    }

    /// 查詢某化學品的比較結果
    pub fn comparison(&self, chemical: &str) -> Option<&ComparisonResult> {
        self.comparisons.iter().find(|c| c.chemical_name == chemical)
    }
}
