//! 規劃結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chemical::{ChemicalCategory, ChemicalDefinition, PurchaseUnit, QuantityUnit};

/// 需求記錄（跨所有配方累計）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementEntry {
    /// 化學品名稱
    pub chemical_name: String,

    /// 需求數量（液體為 L，粉末為 kg）
    pub required_quantity: Decimal,

    /// 需求數量單位
    pub unit: QuantityUnit,
}

impl RequirementEntry {
    pub fn new(chemical_name: String, required_quantity: Decimal, unit: QuantityUnit) -> Self {
        Self {
            chemical_name,
            required_quantity,
            unit,
        }
    }
}

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// 盈餘（kg），剛好足夠時為 0
    Surplus(Decimal),
    /// 短缺（kg），恆為正數
    Deficit(Decimal),
}

/// 庫存與需求比較結果（統一以 kg 比較）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// 化學品名稱
    pub chemical_name: String,

    /// 類別
    pub category: ChemicalCategory,

    /// 可用質量（kg）
    pub available_mass_kg: Decimal,

    /// 需求質量（kg）
    pub required_mass_kg: Decimal,

    /// 短缺 = max(0, 需求 - 可用)
    pub deficit_kg: Decimal,

    /// 盈餘 = max(0, 可用 - 需求)
    pub surplus_kg: Decimal,
}

impl ComparisonResult {
    /// 比較可用質量與需求質量
    pub fn new(
        chemical: &ChemicalDefinition,
        available_mass_kg: Decimal,
        required_mass_kg: Decimal,
    ) -> Self {
        let difference = available_mass_kg - required_mass_kg;
        Self {
            chemical_name: chemical.name.clone(),
            category: chemical.category,
            available_mass_kg,
            required_mass_kg,
            deficit_kg: (-difference).max(Decimal::ZERO),
            surplus_kg: difference.max(Decimal::ZERO),
        }
    }

    pub fn has_deficit(&self) -> bool {
        self.deficit_kg > Decimal::ZERO
    }

    pub fn status(&self) -> StockStatus {
        if self.has_deficit() {
            StockStatus::Deficit(self.deficit_kg)
        } else {
            StockStatus::Surplus(self.surplus_kg)
        }
    }
}

/// 採購明細（僅短缺的化學品）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// 化學品名稱
    pub chemical_name: String,

    /// 類別
    pub category: ChemicalCategory,

    /// 短缺質量（kg）
    pub deficit_kg: Decimal,

    /// 需購買的整數單位（無條件進位）
    pub units_to_buy: u64,

    /// 採購單位
    pub purchase_unit: PurchaseUnit,
}

impl PurchaseLine {
    pub fn is_liquid(&self) -> bool {
        matches!(self.category, ChemicalCategory::Liquid { .. })
    }

    /// 單位顯示名稱（"buckets" / "bags"）
    pub fn unit_label(&self) -> &'static str {
        self.purchase_unit.plural_label()
    }
}
