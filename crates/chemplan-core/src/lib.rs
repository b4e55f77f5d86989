//! # Chemplan Core
//!
//! 化學品庫存規劃的核心資料模型與類型定義

pub mod chemical;
pub mod plan;
pub mod recipe;
pub mod registry;
pub mod request;
pub mod stock;

// Re-export 主要類型
pub use chemical::{ChemicalCategory, ChemicalDefinition, PurchaseUnit, QuantityUnit};
pub use plan::{ComparisonResult, PurchaseLine, RequirementEntry, StockStatus};
pub use recipe::{Recipe, RecipeEntry};
pub use registry::ChemicalRegistry;
pub use request::PlanRequest;
pub use stock::StockEntry;

use rust_decimal::Decimal;

/// 規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("無效的容器數量: {chemical} = {count}（不可為負數）")]
    InvalidCount { chemical: String, count: i64 },

    #[error("無效的批次體積: {recipe} = {volume} L（不可為負數）")]
    InvalidBatchVolume { recipe: String, volume: Decimal },

    #[error("找不到化學品: {0}")]
    UnknownChemical(String),

    #[error("找不到配方: {0}")]
    UnknownRecipe(String),

    #[error("無效的化學品定義: {0}")]
    InvalidRegistryEntry(String),

    #[error("無效的配方項目: {0}")]
    InvalidRecipeEntry(String),

    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
