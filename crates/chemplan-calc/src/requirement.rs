//! 配方需求計算

use chemplan_core::{ChemicalRegistry, PlanError, Recipe, RequirementEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單一配方的用量（獨立、不可變）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeContribution {
    /// 配方ID
    pub recipe_id: String,

    /// 配方名稱
    pub recipe_name: String,

    /// 批次總體積（L）
    pub batch_volume: Decimal,

    /// 各化學品用量（配方項目順序）
    pub quantities: Vec<RequirementEntry>,
}

impl RecipeContribution {
    /// 轉為 化學品名稱 → 用量 的映射
    pub fn as_map(&self) -> HashMap<String, Decimal> {
        self.quantities
            .iter()
            .map(|q| (q.chemical_name.clone(), q.required_quantity))
            .collect()
    }
}

/// 需求計算器
pub struct RequirementCalculator;

impl RequirementCalculator {
    /// 驗證配方與目錄一致
    ///
    /// 每個項目必須引用已登錄的化學品，factor 不可為負，
    /// 且用量單位須與化學品類別相符（液體 L、粉末 kg）。
    pub fn validate_recipes(registry: &ChemicalRegistry, recipes: &[Recipe]) -> chemplan_core::Result<()> {
        for recipe in recipes {
            for entry in &recipe.entries {
                let chemical = registry.get(&entry.chemical)?;

                if entry.factor < Decimal::ZERO {
                    return Err(PlanError::InvalidRecipeEntry(format!(
                        "{} / {}: factor 不可為負數 ({})",
                        recipe.id, entry.chemical, entry.factor
                    )));
                }

                let expected = chemical.category.natural_unit();
                if entry.unit != expected {
                    return Err(PlanError::InvalidRecipeEntry(format!(
                        "{} / {}: 單位應為 {}，實際為 {}",
                        recipe.id, entry.chemical, expected, entry.unit
                    )));
                }
            }
        }
        Ok(())
    }

    /// 計算單一配方在指定批次體積下的用量
    pub fn recipe_contribution(recipe: &Recipe, batch_volume: Decimal) -> RecipeContribution {
        let quantities = recipe
            .entries
            .iter()
            .map(|entry| {
                RequirementEntry::new(
                    entry.chemical.clone(),
                    entry.contribution(batch_volume),
                    entry.unit,
                )
            })
            .collect();

        RecipeContribution {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            batch_volume,
            quantities,
        }
    }

    /// 計算所有配方的用量
    ///
    /// 任何負數批次體積或未知配方都會使整個計算被拒絕；未提供體積的配方視為 0。
    pub fn compute_recipe_contributions(
        recipes: &[Recipe],
        batch_volumes: &HashMap<String, Decimal>,
    ) -> chemplan_core::Result<Vec<RecipeContribution>> {
        let mut unknown: Vec<&String> = batch_volumes
            .keys()
            .filter(|id| !recipes.iter().any(|r| &r.id == *id))
            .collect();
        unknown.sort();
        if let Some(id) = unknown.first() {
            return Err(PlanError::UnknownRecipe((*id).clone()));
        }

        for recipe in recipes {
            if let Some(&volume) = batch_volumes.get(&recipe.id) {
                if volume < Decimal::ZERO {
                    return Err(PlanError::InvalidBatchVolume {
                        recipe: recipe.id.clone(),
                        volume,
                    });
                }
            }
        }

        Ok(recipes
            .iter()
            .map(|recipe| {
                let volume = batch_volumes.get(&recipe.id).copied().unwrap_or(Decimal::ZERO);
                Self::recipe_contribution(recipe, volume)
            })
            .collect())
    }

    /// 合併各配方用量（相加）
    pub fn merge_contributions(contributions: &[RecipeContribution]) -> HashMap<String, Decimal> {
        contributions
            .iter()
            .map(RecipeContribution::as_map)
            .fold(HashMap::new(), |mut total, contribution| {
                for (chemical, quantity) in contribution {
                    *total.entry(chemical).or_insert(Decimal::ZERO) += quantity;
                }
                total
            })
    }

    /// 依目錄順序產生需求記錄；未被任何配方引用的化學品為 0
    pub fn requirements_from_contributions(
        registry: &ChemicalRegistry,
        contributions: &[RecipeContribution],
    ) -> Vec<RequirementEntry> {
        let totals = Self::merge_contributions(contributions);

        registry
            .list_chemicals()
            .iter()
            .map(|chemical| {
                RequirementEntry::new(
                    chemical.name.clone(),
                    totals.get(&chemical.name).copied().unwrap_or(Decimal::ZERO),
                    chemical.category.natural_unit(),
                )
            })
            .collect()
    }

    /// 計算每個化學品的總需求（液體 L、粉末 kg）
    pub fn compute_requirements(
        registry: &ChemicalRegistry,
        recipes: &[Recipe],
        batch_volumes: &HashMap<String, Decimal>,
    ) -> chemplan_core::Result<Vec<RequirementEntry>> {
        let contributions = Self::compute_recipe_contributions(recipes, batch_volumes)?;
        Ok(Self::requirements_from_contributions(registry, &contributions))
    }

    /// 轉為 化學品名稱 → 需求數量 的映射
    pub fn required_quantity_map(entries: &[RequirementEntry]) -> HashMap<String, Decimal> {
        entries
            .iter()
            .map(|e| (e.chemical_name.clone(), e.required_quantity))
            .collect()
    }
}
