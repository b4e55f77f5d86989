//! 規劃主計算器

use chemplan_core::{ChemicalRegistry, PlanRequest, Recipe};

use crate::procurement::ProcurementPlanner;
use crate::requirement::RequirementCalculator;
use crate::stock::StockAggregator;
use crate::PlanResult;

/// 規劃計算器
#[derive(Debug, Clone)]
pub struct PlanCalculator {
    /// 化學品目錄
    registry: ChemicalRegistry,

    /// 固定配方
    recipes: Vec<Recipe>,
}

impl PlanCalculator {
    /// 創建新的規劃計算器，並驗證配方與目錄一致
    pub fn new(registry: ChemicalRegistry, recipes: Vec<Recipe>) -> chemplan_core::Result<Self> {
        RequirementCalculator::validate_recipes(&registry, &recipes)?;
        Ok(Self { registry, recipes })
    }

    /// 標準目錄與標準配方
    pub fn standard() -> Self {
        Self {
            registry: ChemicalRegistry::standard(),
            recipes: Recipe::standard(),
        }
    }

    /// 主計算入口
    ///
    /// 庫存與配方輸入都先完整驗證；任一步驟失敗即整體失敗，不產生任何報表。
    pub fn calculate(&self, request: &PlanRequest) -> chemplan_core::Result<PlanResult> {
        tracing::info!(
            "開始規劃計算：庫存 {} 筆，批次 {} 筆",
            request.container_counts.len(),
            request.batch_volumes.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 庫存彙總
        tracing::debug!("Step 1: 庫存彙總");
        let stock = StockAggregator::compute_available_stock(&self.registry, &request.container_counts)?;

        // Step 2: 配方需求
        tracing::debug!("Step 2: 配方需求");
        let recipe_contributions =
            RequirementCalculator::compute_recipe_contributions(&self.recipes, &request.batch_volumes)?;
        for contribution in &recipe_contributions {
            tracing::debug!(
                "配方 {}: 批次 {} L, 項目 {} 筆",
                contribution.recipe_id,
                contribution.batch_volume,
                contribution.quantities.len()
            );
        }
        let requirements =
            RequirementCalculator::requirements_from_contributions(&self.registry, &recipe_contributions);

        // Step 3: 比較與採購
        tracing::debug!("Step 3: 比較與採購");
        let available = StockAggregator::available_mass_map(&stock);
        let required = RequirementCalculator::required_quantity_map(&requirements);
        let comparisons = ProcurementPlanner::compute_comparison(&self.registry, &available, &required);
        let purchase_plan = ProcurementPlanner::compute_purchase_plan(&self.registry, &comparisons)?;

        tracing::info!("規劃計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("需採購化學品數量: {}", purchase_plan.len());

        Ok(PlanResult {
            stock,
            recipe_contributions,
            requirements,
            comparisons,
            purchase_plan,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 獲取化學品目錄引用
    pub fn registry(&self) -> &ChemicalRegistry {
        &self.registry
    }

    /// 獲取配方引用
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl Default for PlanCalculator {
    fn default() -> Self {
        Self::standard()
    }
}
