//! 規劃請求（單次執行的輸入）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::{PlanError, Result};

/// 規劃請求
///
/// 數值在此不做符號驗證，由各計算器在邊界處驗證，
/// 以便回報 `InvalidCount` / `InvalidBatchVolume`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// 化學品名稱 → 現有容器（桶/袋）數量；未列出者視為 0
    #[serde(default)]
    pub container_counts: HashMap<String, i64>,

    /// 配方ID → 批次總體積（L）；未列出者視為 0
    #[serde(default)]
    pub batch_volumes: HashMap<String, Decimal>,
}

impl PlanRequest {
    /// 創建空的請求
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 解析請求
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlanError::InvalidInput(e.to_string()))
    }

    /// 建構器模式：設置容器數量
    pub fn with_count(mut self, chemical: impl Into<String>, count: i64) -> Self {
        self.container_counts.insert(chemical.into(), count);
        self
    }

    /// 建構器模式：設置批次體積
    pub fn with_batch_volume(mut self, recipe_id: impl Into<String>, volume: Decimal) -> Self {
        self.batch_volumes.insert(recipe_id.into(), volume);
        self
    }

    /// 解析 `名稱=數量` 形式的庫存輸入（名稱可含空白）
    pub fn parse_count_assignment(input: &str) -> Result<(String, i64)> {
        let (name, value) = split_assignment(input)?;
        let count = value
            .parse::<i64>()
            .map_err(|e| PlanError::InvalidInput(format!("{}: {}", input, e)))?;
        Ok((name, count))
    }

    /// 解析 `配方ID=公升` 形式的批次輸入
    pub fn parse_volume_assignment(input: &str) -> Result<(String, Decimal)> {
        let (recipe, value) = split_assignment(input)?;
        let volume = Decimal::from_str(value)
            .map_err(|e| PlanError::InvalidInput(format!("{}: {}", input, e)))?;
        Ok((recipe, volume))
    }
}

fn split_assignment(input: &str) -> Result<(String, &str)> {
    let (name, value) = input
        .rsplit_once('=')
        .ok_or_else(|| PlanError::InvalidInput(format!("缺少 '=': {}", input)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PlanError::InvalidInput(format!("缺少名稱: {}", input)));
    }

    Ok((name.to_string(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = PlanRequest::new()
            .with_count("sulfuric acid", 3)
            .with_batch_volume("solution-1", Decimal::from(100));

        assert_eq!(request.container_counts.get("sulfuric acid"), Some(&3));
        assert_eq!(request.batch_volumes.get("solution-1"), Some(&Decimal::from(100)));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "container_counts": { "phosphoric acid": 2, "SLS powder": 1 },
            "batch_volumes": { "solution-1": "100", "solution-2": "50.5" }
        }"#;

        let request = PlanRequest::from_json(json).unwrap();

        assert_eq!(request.container_counts.len(), 2);
        assert_eq!(request.container_counts.get("SLS powder"), Some(&1));
        assert_eq!(request.batch_volumes.get("solution-2"), Some(&Decimal::new(505, 1)));
    }

    #[test]
    fn test_request_from_json_missing_sections() {
        let request = PlanRequest::from_json("{}").unwrap();

        assert!(request.container_counts.is_empty());
        assert!(request.batch_volumes.is_empty());
    }

    #[test]
    fn test_request_from_invalid_json() {
        assert!(matches!(
            PlanRequest::from_json("{ not json"),
            Err(PlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_count_assignment() {
        let (name, count) = PlanRequest::parse_count_assignment("phosphoric acid=4").unwrap();
        assert_eq!(name, "phosphoric acid");
        assert_eq!(count, 4);

        // 負數在此允許，由庫存彙總器拒絕
        let (_, count) = PlanRequest::parse_count_assignment("nitric acid=-1").unwrap();
        assert_eq!(count, -1);

        assert!(PlanRequest::parse_count_assignment("nitric acid").is_err());
        assert!(PlanRequest::parse_count_assignment("=3").is_err());
        assert!(PlanRequest::parse_count_assignment("nitric acid=two").is_err());
    }

    #[test]
    fn test_parse_volume_assignment() {
        let (recipe, volume) = PlanRequest::parse_volume_assignment("solution-2 = 12.5").unwrap();
        assert_eq!(recipe, "solution-2");
        assert_eq!(volume, Decimal::new(125, 1));

        assert!(PlanRequest::parse_volume_assignment("solution-2=abc").is_err());
    }
}
