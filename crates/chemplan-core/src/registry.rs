//! 化學品目錄

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::chemical::{ChemicalCategory, ChemicalDefinition};
use crate::{PlanError, Result};

/// 化學品目錄（建立後唯讀）
///
/// 迭代順序即宣告順序，下游報表依此順序輸出。
#[derive(Debug, Clone)]
pub struct ChemicalRegistry {
    chemicals: Vec<ChemicalDefinition>,
}

impl ChemicalRegistry {
    /// 創建新的目錄，並驗證每個化學品的物理常數
    pub fn new(chemicals: Vec<ChemicalDefinition>) -> Result<Self> {
        Self::validate(&chemicals)?;
        Ok(Self { chemicals })
    }

    fn validate(chemicals: &[ChemicalDefinition]) -> Result<()> {
        let mut seen = HashSet::new();

        for chemical in chemicals {
            if !seen.insert(chemical.name.as_str()) {
                return Err(PlanError::InvalidRegistryEntry(format!(
                    "重複的化學品名稱: {}",
                    chemical.name
                )));
            }

            if chemical.purchase_unit_mass <= Decimal::ZERO {
                return Err(PlanError::InvalidRegistryEntry(format!(
                    "{} 的採購單位質量必須為正數，實際為 {}",
                    chemical.name, chemical.purchase_unit_mass
                )));
            }

            if let ChemicalCategory::Liquid { density } = chemical.category {
                if density <= Decimal::ZERO {
                    return Err(PlanError::InvalidRegistryEntry(format!(
                        "{} 的密度必須為正數，實際為 {}",
                        chemical.name, density
                    )));
                }
            }
        }

        Ok(())
    }

    /// 標準目錄：四種酸液（桶）與 SLS 粉末（袋）
    pub fn standard() -> Self {
        Self {
            chemicals: vec![
                ChemicalDefinition::liquid("phosphoric acid", Decimal::from(35), Decimal::new(1685, 3)),
                ChemicalDefinition::liquid("sulfuric acid", Decimal::from(46), Decimal::new(184, 2)),
                ChemicalDefinition::liquid("nitric acid", Decimal::from(34), Decimal::new(141, 2)),
                ChemicalDefinition::liquid("acetic acid", Decimal::from(30), Decimal::new(105, 2)),
                ChemicalDefinition::powder("SLS powder", Decimal::from(20)),
            ],
        }
    }

    /// 列出所有化學品（宣告順序）
    pub fn list_chemicals(&self) -> &[ChemicalDefinition] {
        &self.chemicals
    }

    /// 查詢化學品
    pub fn get(&self, name: &str) -> Result<&ChemicalDefinition> {
        self.chemicals
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| PlanError::UnknownChemical(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chemicals.iter().any(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.chemicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chemicals.is_empty()
    }
}

impl Default for ChemicalRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
