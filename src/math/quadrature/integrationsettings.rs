use serde::{
    Deserialize,
    Serialize
};

/// 積分執行設定。
///
/// 預設值保留原始行為：不限制加細次數（`max_refinements = None`）。
/// `validate` 只影響經由設定檔建立的 rule 與 `integrate_with_settings`，
/// `QuadratureRule::integrate` 永遠不做檢查。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    validate: bool,
    max_refinements: Option<u32>
}

impl IntegrationSettings {
    pub fn new(validate: bool, max_refinements: Option<u32>) -> IntegrationSettings {
        IntegrationSettings { validate, max_refinements }
    }

    pub fn validate(&self) -> bool {
        self.validate
    }

    pub fn max_refinements(&self) -> Option<u32> {
        self.max_refinements
    }

    pub fn with_max_refinements(mut self, max_refinements: u32) -> IntegrationSettings {
        self.max_refinements = Some(max_refinements);
        self
    }
}

impl Default for IntegrationSettings {
    fn default() -> IntegrationSettings {
        IntegrationSettings {
            validate: true,
            max_refinements: None
        }
    }
}
