//! 化學品定義

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 化學品類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChemicalCategory {
    /// 液體（以密度 kg/L 將體積換算為質量）
    Liquid { density: Decimal },
    /// 粉末（需求直接以 kg 表示）
    Powder,
}

impl ChemicalCategory {
    /// 類別名稱
    pub fn label(&self) -> &'static str {
        match self {
            Self::Liquid { .. } => "Liquid",
            Self::Powder => "Powder",
        }
    }

    /// 需求數量的自然單位
    pub fn natural_unit(&self) -> QuantityUnit {
        match self {
            Self::Liquid { .. } => QuantityUnit::Liters,
            Self::Powder => QuantityUnit::Kilograms,
        }
    }
}

/// 採購單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseUnit {
    /// 桶（液體）
    Bucket,
    /// 袋（粉末）
    Bag,
}

impl PurchaseUnit {
    /// 複數顯示名稱
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Bucket => "buckets",
            Self::Bag => "bags",
        }
    }
}

/// 數量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUnit {
    /// 公升
    Liters,
    /// 公斤
    Kilograms,
}

impl QuantityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Liters => "L",
            Self::Kilograms => "KG",
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 化學品定義（啟動時固定，不可變）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalDefinition {
    /// 化學品名稱（唯一識別）
    pub name: String,

    /// 類別
    pub category: ChemicalCategory,

    /// 每個採購單位的質量（kg）
    pub purchase_unit_mass: Decimal,
}

impl ChemicalDefinition {
    /// 創建液體化學品（以桶採購）
    pub fn liquid(name: impl Into<String>, purchase_unit_mass: Decimal, density: Decimal) -> Self {
        Self {
            name: name.into(),
            category: ChemicalCategory::Liquid { density },
            purchase_unit_mass,
        }
    }

    /// 創建粉末化學品（以袋採購）
    pub fn powder(name: impl Into<String>, purchase_unit_mass: Decimal) -> Self {
        Self {
            name: name.into(),
            category: ChemicalCategory::Powder,
            purchase_unit_mass,
        }
    }

    /// 密度（僅液體）
    pub fn density(&self) -> Option<Decimal> {
        match self.category {
            ChemicalCategory::Liquid { density } => Some(density),
            ChemicalCategory::Powder => None,
        }
    }

    pub fn is_liquid(&self) -> bool {
        matches!(self.category, ChemicalCategory::Liquid { .. })
    }

    /// 採購單位
    pub fn purchase_unit(&self) -> PurchaseUnit {
        match self.category {
            ChemicalCategory::Liquid { .. } => PurchaseUnit::Bucket,
            ChemicalCategory::Powder => PurchaseUnit::Bag,
        }
    }

    /// 將需求數量（液體為 L，粉末為 kg）換算為質量（kg）
    pub fn required_mass(&self, required_quantity: Decimal) -> Decimal {
        match self.category {
            ChemicalCategory::Liquid { density } => required_quantity * density,
            ChemicalCategory::Powder => required_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquid_definition() {
        let nitric = ChemicalDefinition::liquid("nitric acid", Decimal::from(34), Decimal::new(141, 2));

        assert!(nitric.is_liquid());
        assert_eq!(nitric.density(), Some(Decimal::new(141, 2)));
        assert_eq!(nitric.purchase_unit(), PurchaseUnit::Bucket);
        assert_eq!(nitric.category.natural_unit(), QuantityUnit::Liters);

        // 10.60 L * 1.41 kg/L = 14.946 kg
        assert_eq!(nitric.required_mass(Decimal::new(1060, 2)), Decimal::new(14946, 3));
    }

    #[test]
    fn test_powder_definition() {
        let sls = ChemicalDefinition::powder("SLS powder", Decimal::from(20));

        assert!(!sls.is_liquid());
        assert_eq!(sls.density(), None);
        assert_eq!(sls.purchase_unit().plural_label(), "bags");
        assert_eq!(sls.category.natural_unit(), QuantityUnit::Kilograms);

        // 粉末需求已是 kg，不做換算
        assert_eq!(sls.required_mass(Decimal::new(5, 1)), Decimal::new(5, 1));
    }

    #[test]
    fn test_unit_symbols() {
        assert_eq!(QuantityUnit::Liters.to_string(), "L");
        assert_eq!(QuantityUnit::Kilograms.to_string(), "KG");
        assert_eq!(PurchaseUnit::Bucket.plural_label(), "buckets");
    }
}
