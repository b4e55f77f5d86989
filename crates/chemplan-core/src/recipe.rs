//! 配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chemical::QuantityUnit;

/// 配方 1（蝕刻液）ID
pub const SOLUTION_1: &str = "solution-1";

/// 配方 2 ID
pub const SOLUTION_2: &str = "solution-2";

/// 配方項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntry {
    /// 化學品名稱
    pub chemical: String,

    /// 批次體積百分比
    pub factor: Decimal,

    /// 用量單位（液體為 L，粉末為 kg）
    pub unit: QuantityUnit,
}

impl RecipeEntry {
    pub fn new(chemical: impl Into<String>, factor: Decimal, unit: QuantityUnit) -> Self {
        Self {
            chemical: chemical.into(),
            factor,
            unit,
        }
    }

    /// 計算該項目於指定批次體積下的用量
    ///
    /// 用量 = 批次體積 × (factor / 100)，單位見 `unit`
    pub fn contribution(&self, batch_volume: Decimal) -> Decimal {
        batch_volume * (self.factor / Decimal::ONE_HUNDRED)
    }
}

/// 配方（固定，不可由使用者修改）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// 配方ID
    pub id: String,

    /// 顯示名稱
    pub name: String,

    /// 配方項目
    pub entries: Vec<RecipeEntry>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>, entries: Vec<RecipeEntry>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entries,
        }
    }

    /// 查詢配方中某化學品的項目
    pub fn entry(&self, chemical: &str) -> Option<&RecipeEntry> {
        self.entries.iter().find(|e| e.chemical == chemical)
    }

    /// 配方 1（蝕刻液）：四種酸各佔批次體積 10%，用量以公升計
    pub fn solution_1() -> Self {
        let ten = Decimal::from(10);
        Self::new(
            SOLUTION_1,
            "Solution 1 (Etching Recipe)",
            vec![
                RecipeEntry::new("phosphoric acid", ten, QuantityUnit::Liters),
                RecipeEntry::new("sulfuric acid", ten, QuantityUnit::Liters),
                RecipeEntry::new("nitric acid", ten, QuantityUnit::Liters),
                RecipeEntry::new("acetic acid", ten, QuantityUnit::Liters),
            ],
        )
    }

    /// 配方 2：液體以批次體積百分比計公升；SLS 粉末同樣以百分比計，但結果為公斤
    pub fn solution_2() -> Self {
        Self::new(
            SOLUTION_2,
            "Solution 2",
            vec![
                RecipeEntry::new("phosphoric acid", Decimal::from(4), QuantityUnit::Liters),
                RecipeEntry::new("nitric acid", Decimal::new(12, 1), QuantityUnit::Liters),
                // 1.0% → kg（每 100 L 批次 1 kg）
                RecipeEntry::new("SLS powder", Decimal::ONE, QuantityUnit::Kilograms),
            ],
        )
    }

    /// 標準配方組
    pub fn standard() -> Vec<Self> {
        vec![Self::solution_1(), Self::solution_2()]
    }
}
