use super::quadraturemethod::QuadratureMethod;

/// 一次積分的完整紀錄。
///
/// `estimates` 依序為起始估計與每次加細後的估計，最後一項即 `value`。
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationReport {
    method: QuadratureMethod,
    value: f64,
    refinements: u32,
    subdivisions: u64,
    evaluations: u64,
    estimates: Vec<f64>
}

impl IntegrationReport {
    pub fn new(method: QuadratureMethod,
               value: f64,
               refinements: u32,
               subdivisions: u64,
               evaluations: u64,
               estimates: Vec<f64>) -> IntegrationReport {
        IntegrationReport {
            method,
            value,
            refinements,
            subdivisions,
            evaluations,
            estimates
        }
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// 步長減半的次數（不含起始估計）。
    pub fn refinements(&self) -> u32 {
        self.refinements
    }

    /// 最終的分割數 n。
    pub fn subdivisions(&self) -> u64 {
        self.subdivisions
    }

    /// 被積函數的總呼叫次數。
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }
}
