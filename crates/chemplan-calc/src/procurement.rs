//! 採購規劃

use chemplan_core::{ChemicalRegistry, ComparisonResult, PlanError, PurchaseLine};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 採購清單（目錄順序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchasePlan {
    pub lines: Vec<PurchaseLine>,
}

impl PurchasePlan {
    /// 是否無需採購
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PurchaseLine> {
        self.lines.iter()
    }

    /// 液體採購明細（以桶計）
    pub fn liquids(&self) -> impl Iterator<Item = &PurchaseLine> {
        self.lines.iter().filter(|l| l.is_liquid())
    }

    /// 粉末採購明細（以袋計）
    pub fn powders(&self) -> impl Iterator<Item = &PurchaseLine> {
        self.lines.iter().filter(|l| !l.is_liquid())
    }

    /// 查詢某化學品的採購明細
    pub fn line(&self, chemical: &str) -> Option<&PurchaseLine> {
        self.lines.iter().find(|l| l.chemical_name == chemical)
    }
}

/// 採購規劃器
pub struct ProcurementPlanner;

impl ProcurementPlanner {
    /// 比較可用質量與需求質量
    ///
    /// 液體需求（L）以各自的密度換算為 kg，粉末需求已是 kg。
    /// 每個目錄化學品產生一筆結果，缺少的數值視為 0。
    pub fn compute_comparison(
        registry: &ChemicalRegistry,
        available: &HashMap<String, Decimal>,
        required: &HashMap<String, Decimal>,
    ) -> Vec<ComparisonResult> {
        registry
            .list_chemicals()
            .iter()
            .map(|chemical| {
                let available_mass = available.get(&chemical.name).copied().unwrap_or(Decimal::ZERO);
                let required_quantity = required.get(&chemical.name).copied().unwrap_or(Decimal::ZERO);
                let required_mass = chemical.required_mass(required_quantity);

                tracing::debug!(
                    "比較 {}: 可用 {} kg, 需求 {} kg",
                    chemical.name,
                    available_mass,
                    required_mass
                );

                ComparisonResult::new(chemical, available_mass, required_mass)
            })
            .collect()
    }

    /// 產生採購清單
    ///
    /// 僅包含短缺大於 0 的化學品；採購單位數 = ceil(短缺 / 每單位質量)，
    /// 不足一單位也以一單位計。
    pub fn compute_purchase_plan(
        registry: &ChemicalRegistry,
        comparisons: &[ComparisonResult],
    ) -> chemplan_core::Result<PurchasePlan> {
        let mut lines = Vec::new();

        for comparison in comparisons.iter().filter(|c| c.has_deficit()) {
            let chemical = registry.get(&comparison.chemical_name)?;
            let units_to_buy = Self::units_to_buy(comparison.deficit_kg, chemical.purchase_unit_mass)?;

            lines.push(PurchaseLine {
                chemical_name: chemical.name.clone(),
                category: chemical.category,
                deficit_kg: comparison.deficit_kg,
                units_to_buy,
                purchase_unit: chemical.purchase_unit(),
            });
        }

        Ok(PurchasePlan { lines })
    }

    /// 計算需購買的整數單位（無條件進位）
    pub fn units_to_buy(deficit_kg: Decimal, purchase_unit_mass: Decimal) -> chemplan_core::Result<u64> {
        if deficit_kg <= Decimal::ZERO {
            return Ok(0);
        }

        (deficit_kg / purchase_unit_mass).ceil().to_u64().ok_or_else(|| {
            PlanError::CalculationError(format!(
                "採購單位數超出範圍: {} / {}",
                deficit_kg, purchase_unit_mass
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn map(pairs: &[(&str, Decimal)]) -> HashMap<String, Decimal> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_liquid_converted_with_own_density() {
        let registry = ChemicalRegistry::standard();
        let required = map(&[("nitric acid", Decimal::new(1060, 2))]);

        let result = ProcurementPlanner::compute_comparison(&registry, &HashMap::new(), &required);

        // 10.60 L * 1.41 kg/L = 14.946 kg
        let nitric = result.iter().find(|c| c.chemical_name == "nitric acid").unwrap();
        assert_eq!(nitric.required_mass_kg, Decimal::new(14946, 3));
        assert_eq!(nitric.deficit_kg, Decimal::new(14946, 3));
    }

    #[test]
    fn test_powder_not_converted() {
        let registry = ChemicalRegistry::standard();
        let available = map(&[("SLS powder", Decimal::from(20))]);
        let required = map(&[("SLS powder", Decimal::new(5, 1))]);

        let result = ProcurementPlanner::compute_comparison(&registry, &available, &required);

        let sls = result.iter().find(|c| c.chemical_name == "SLS powder").unwrap();
        assert_eq!(sls.required_mass_kg, Decimal::new(5, 1));
        assert_eq!(sls.surplus_kg, Decimal::new(195, 1));
        assert_eq!(sls.deficit_kg, Decimal::ZERO);
    }

    #[test]
    fn test_comparison_follows_registry_order() {
        let registry = ChemicalRegistry::standard();

        let result = ProcurementPlanner::compute_comparison(&registry, &HashMap::new(), &HashMap::new());

        assert_eq!(result.len(), registry.len());
        for (comparison, chemical) in result.iter().zip(registry.list_chemicals()) {
            assert_eq!(comparison.chemical_name, chemical.name);
        }
    }

    #[test]
    fn test_purchase_plan_only_deficits() {
        let registry = ChemicalRegistry::standard();
        let available = map(&[
            ("phosphoric acid", Decimal::ZERO),
            ("sulfuric acid", Decimal::from(46)),
        ]);
        let required = map(&[
            ("phosphoric acid", Decimal::from(10)),
            ("sulfuric acid", Decimal::from(10)),
            ("SLS powder", Decimal::from(45)),
        ]);

        let comparisons = ProcurementPlanner::compute_comparison(&registry, &available, &required);
        let plan = ProcurementPlanner::compute_purchase_plan(&registry, &comparisons).unwrap();

        // 磷酸 16.85 kg → 1 桶；硫酸 18.4 kg < 46 kg 不需購買；SLS 45 kg → 3 袋
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.lines[0].chemical_name, "phosphoric acid");
        assert_eq!(plan.lines[0].units_to_buy, 1);
        assert_eq!(plan.lines[0].unit_label(), "buckets");
        assert_eq!(plan.lines[1].chemical_name, "SLS powder");
        assert_eq!(plan.lines[1].units_to_buy, 3);
        assert_eq!(plan.lines[1].unit_label(), "bags");
        assert!(plan.line("sulfuric acid").is_none());

        assert_eq!(plan.liquids().count(), 1);
        assert_eq!(plan.powders().count(), 1);
    }

    #[test]
    fn test_empty_purchase_plan() {
        let registry = ChemicalRegistry::standard();

        let comparisons = ProcurementPlanner::compute_comparison(&registry, &HashMap::new(), &HashMap::new());
        let plan = ProcurementPlanner::compute_purchase_plan(&registry, &comparisons).unwrap();

        assert!(plan.is_empty());
    }

    #[rstest]
    #[case(Decimal::new(1, 2), Decimal::from(35), 1)]
    #[case(Decimal::new(1685, 2), Decimal::from(35), 1)]
    #[case(Decimal::from(35), Decimal::from(35), 1)]
    #[case(Decimal::new(3501, 2), Decimal::from(35), 2)]
    #[case(Decimal::from(70), Decimal::from(35), 2)]
    #[case(Decimal::from(45), Decimal::from(20), 3)]
    #[case(Decimal::ZERO, Decimal::from(20), 0)]
    fn test_units_to_buy_rounds_up(#[case] deficit: Decimal, #[case] unit_mass: Decimal, #[case] expected: u64) {
        assert_eq!(ProcurementPlanner::units_to_buy(deficit, unit_mass).unwrap(), expected);
    }

    proptest! {
        #[test]
        fn prop_deficit_and_surplus_are_exclusive(
            available_cents in 0i64..10_000_000,
            required_cents in 0i64..10_000_000,
        ) {
            let registry = ChemicalRegistry::standard();
            let chemical = &registry.list_chemicals()[0];
            let available = Decimal::new(available_cents, 2);
            let required = Decimal::new(required_cents, 2);

            let result = ComparisonResult::new(chemical, available, required);

            prop_assert!(result.deficit_kg == Decimal::ZERO || result.surplus_kg == Decimal::ZERO);
            prop_assert!(result.deficit_kg >= Decimal::ZERO && result.surplus_kg >= Decimal::ZERO);
            prop_assert_eq!(result.deficit_kg - result.surplus_kg, required - available);
        }

        #[test]
        fn prop_positive_deficit_buys_at_least_one_unit(deficit_milli in 1i64..100_000_000) {
            let registry = ChemicalRegistry::standard();
            for chemical in registry.list_chemicals() {
                let deficit = Decimal::new(deficit_milli, 3);
                let units = ProcurementPlanner::units_to_buy(deficit, chemical.purchase_unit_mass).unwrap();
                let bought = Decimal::from(units) * chemical.purchase_unit_mass;

                prop_assert!(units >= 1);
                // 買到的質量足以覆蓋短缺，且少買一單位就不夠
                prop_assert!(bought >= deficit);
                prop_assert!(bought - chemical.purchase_unit_mass < deficit);
            }
        }
    }
}
