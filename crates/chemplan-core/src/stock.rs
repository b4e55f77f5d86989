//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存記錄（每次執行由輸入建立，之後不再修改）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// 化學品名稱
    pub chemical_name: String,

    /// 現有容器（桶/袋）數量
    pub container_count: u64,

    /// 可用質量（kg）= 容器數量 × 每單位質量
    pub available_mass_kg: Decimal,
}

impl StockEntry {
    /// 創建新的庫存記錄
    pub fn new(chemical_name: String, container_count: u64, purchase_unit_mass: Decimal) -> Self {
        let available_mass_kg = Decimal::from(container_count) * purchase_unit_mass;
        Self {
            chemical_name,
            container_count,
            available_mass_kg,
        }
    }

    /// 是否無庫存
    pub fn is_empty(&self) -> bool {
        self.container_count == 0
    }
}
