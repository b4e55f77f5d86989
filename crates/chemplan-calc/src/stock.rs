//! 庫存彙總

use chemplan_core::{ChemicalRegistry, PlanError, StockEntry};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// 庫存彙總器：容器數量 → 可用質量
pub struct StockAggregator;

impl StockAggregator {
    /// 計算每個化學品的可用庫存
    ///
    /// 未提供數量的化學品視為 0。任何負數或未知名稱都會使整批輸入被拒絕。
    /// 結果依目錄順序排列。
    pub fn compute_available_stock(
        registry: &ChemicalRegistry,
        counts: &HashMap<String, i64>,
    ) -> chemplan_core::Result<Vec<StockEntry>> {
        let mut unknown: Vec<&String> = counts.keys().filter(|name| !registry.contains(name)).collect();
        unknown.sort();
        if let Some(name) = unknown.first() {
            return Err(PlanError::UnknownChemical((*name).clone()));
        }

        // 先完整驗證，再產生任何記錄
        for chemical in registry.list_chemicals() {
            if let Some(&count) = counts.get(&chemical.name) {
                if count < 0 {
                    return Err(PlanError::InvalidCount {
                        chemical: chemical.name.clone(),
                        count,
                    });
                }
            }
        }

        let entries = registry
            .list_chemicals()
            .iter()
            .map(|chemical| {
                let count = counts.get(&chemical.name).copied().unwrap_or(0).unsigned_abs();
                StockEntry::new(chemical.name.clone(), count, chemical.purchase_unit_mass)
            })
            .collect();

        Ok(entries)
    }

    /// 轉為 化學品名稱 → 可用質量（kg）的映射
    pub fn available_mass_map(entries: &[StockEntry]) -> HashMap<String, Decimal> {
        entries
            .iter()
            .map(|e| (e.chemical_name.clone(), e.available_mass_kg))
            .collect()
    }
}
