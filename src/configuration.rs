use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::integrand::Integrand;
use crate::math::quadrature::integrationreport::IntegrationReport;
use crate::math::quadrature::integrationsettings::IntegrationSettings;
use crate::math::quadrature::quadraturerule::QuadratureRule;
use crate::math::quadrature::quadraturerulemanager::QuadratureRuleManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    settings: IntegrationSettings,
    #[serde(default)]
    rules: Vec<serde_json::Value>
}

/// 設定檔格式：
///
/// ```json
/// {
///     "settings": { "validate": true, "max_refinements": 40 },
///     "rules": [
///         { "name": "unit_simpson", "method": "Simpson", "a": 0.0, "b": 1.0, "eps": 1e-10 }
///     ]
/// }
/// ```
pub struct Configuration {
    settings_cell: RefCell<IntegrationSettings>,
    quadrature_rule_manager: Manager<QuadratureRule, IntegrationSettings>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration::with_settings(IntegrationSettings::default())
    }

    pub fn with_settings(settings: IntegrationSettings) -> Configuration {
        Configuration {
            settings_cell: RefCell::new(settings),
            quadrature_rule_manager: QuadratureRuleManager::new()
        }
    }

    pub fn settings(&self) -> IntegrationSettings {
        *self.settings_cell.borrow()
    }

    pub fn quadrature_rule_manager(&self) -> &Manager<QuadratureRule, IntegrationSettings> {
        &self.quadrature_rule_manager
    }

    pub fn rule(&self, name: &str) -> Result<QuadratureRule, ManagerError> {
        self.quadrature_rule_manager.get(name)
    }

    /// 以設定中的 rule 與執行設定計算積分。
    pub fn integrate<F: Integrand>(&self, name: &str, f: F) -> Result<IntegrationReport, ManagerError> {
        let rule = self.rule(name)?;
        Ok(rule.integrate_with_settings(f, &self.settings())?)
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json_text: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json_text)?;
        self.load(json_prop)
    }

    // rule 依新的 settings 檢查，全部建好後才一併寫入；失敗時原狀態不變
    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let staged = QuadratureRuleManager::new();
        staged.insert_obj_from_json_vec(&json_prop.rules, &json_prop.settings)?;
        *self.settings_cell.borrow_mut() = json_prop.settings;
        self.quadrature_rule_manager.merge(staged);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::quadrature::quadratureerror::QuadratureError;

    #[test]
    fn test_from_json_str() {
        let config = Configuration::new();
        config.from_json_str(r#"{
            "settings": {"max_refinements": 30},
            "rules": [
                {"name": "unit_simpson", "method": "Simpson", "a": 0.0, "b": 1.0, "eps": 1e-10},
                {"name": "pi_trapecy", "method": "Trapecy", "a": 0.0, "b": 3.141592653589793, "eps": 1e-8}
            ]
        }"#).unwrap();

        assert_eq!(config.settings().max_refinements(), Some(30));
        assert_eq!(config.quadrature_rule_manager().len(), 2);

        let report = config.integrate("unit_simpson", |x: f64| x * x).unwrap();
        assert_abs_diff_eq!(report.value(), 1.0 / 3.0, epsilon = 1e-12);
        let report = config.integrate("pi_trapecy", f64::sin).unwrap();
        assert_abs_diff_eq!(report.value(), 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_missing_rule() {
        let config = Configuration::default();
        assert!(matches!(
            config.integrate("absent", |x: f64| x),
            Err(ManagerError::NameNotFoundError(_))
        ));
    }

    #[test]
    fn test_limit_error_surfaces() {
        let config = Configuration::new();
        config.from_json_str(r#"{
            "settings": {"max_refinements": 2},
            "rules": [{"name": "slow", "method": "SquareRight", "a": 0.0, "b": 1.0, "eps": 1e-12}]
        }"#).unwrap();
        assert!(matches!(
            config.integrate("slow", |x: f64| x),
            Err(ManagerError::RuleError(QuadratureError::RefinementLimitExceeded { limit: 2, .. }))
        ));
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let config = Configuration::new();
        config.from_json_str(r#"{
            "settings": {"max_refinements": 30},
            "rules": [{"name": "unit_simpson", "method": "Simpson", "a": 0.0, "b": 1.0, "eps": 1e-10}]
        }"#).unwrap();

        let result = config.from_json_str(r#"{
            "settings": {"validate": true, "max_refinements": 3},
            "rules": [
                {"name": "good_bull", "method": "Bull", "a": 0.0, "b": 1.0, "eps": 1e-8},
                {"name": "bad_trapecy", "method": "Trapecy", "a": 0.0, "b": 1.0, "eps": 0.0}
            ]
        }"#);
        assert!(matches!(result, Err(ManagerError::RuleError(QuadratureError::NonPositiveTolerance(_)))));

        assert_eq!(config.settings().max_refinements(), Some(30));
        assert_eq!(config.quadrature_rule_manager().names(), vec!["unit_simpson"]);
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let config = Configuration::new();
        let result = config.from_json_str(r#"{"rules": [{"name": "bad", "method": "Bull", "a": 0.0, "b": 1.0, "eps": -1.0}]}"#);
        assert!(matches!(result, Err(ManagerError::RuleError(QuadratureError::NonPositiveTolerance(_)))));
    }
}
