use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use super::integrationsettings::IntegrationSettings;
use super::quadraturemethod::QuadratureMethod;
use super::quadraturerule::QuadratureRule;


#[derive(Deserialize)]
struct QuadratureRuleJsonProp {
    method: QuadratureMethod,
    a: f64,
    b: f64,
    eps: f64
}


fn get_quadrature_rule_from_json(json_value: serde_json::Value,
                                 settings: &IntegrationSettings) -> Result<QuadratureRule, ManagerError> {
    let json_prop: QuadratureRuleJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let rule = if settings.validate() {
        QuadratureRule::try_new(json_prop.method, json_prop.a, json_prop.b, json_prop.eps)?
    } else {
        QuadratureRule::new(json_prop.method, json_prop.a, json_prop.b, json_prop.eps)
    };
    Ok(rule)
}


pub struct QuadratureRuleManager;


impl QuadratureRuleManager {
    pub fn new() -> Manager<QuadratureRule, IntegrationSettings> {
        Manager::new(get_quadrature_rule_from_json)
    }
}
