use std::cell::Cell;

use tracing::{
    debug,
    trace,
    warn
};

use crate::math::integrand::Integrand;
use super::integrationreport::IntegrationReport;
use super::integrationsettings::IntegrationSettings;
use super::quadratureerror::QuadratureError;
use super::quadraturemethod::QuadratureMethod;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureRule
// ─────────────────────────────────────────────────────────────────────────────
//
// 收斂迴圈（所有方法共用）：
//
//   n = n0, h = (b - a) / n, S = base(n0)
//   loop:
//       S_prev = S
//       h /= 2, n *= 2
//       S = composite(n)          // 全部節點重新求值，不重用前次結果
//   while |S - S_prev| > eps
//
// 至少會做一次加細。收斂判斷只用絕對差；差值為 NaN 時比較為 false，迴圈結束，
// 非有限值直接反映在結果上。

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureRule {
    method: QuadratureMethod,
    a: f64,
    b: f64,
    eps: f64
}

struct Refinement {
    value: f64,
    refinements: u32,
    subdivisions: u64,
    delta: f64,
    converged: bool
}

impl QuadratureRule {
    /// 原樣保存參數，不做任何檢查。
    pub fn new(method: QuadratureMethod, a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule { method, a, b, eps }
    }

    /// 建構並檢查：界限須為有限值，eps 須為正的有限值。
    pub fn try_new(method: QuadratureMethod, a: f64, b: f64, eps: f64) -> Result<QuadratureRule, QuadratureError> {
        let rule = QuadratureRule::new(method, a, b, eps);
        rule.validate()?;
        Ok(rule)
    }

    pub fn square_left(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::SquareLeft, a, b, eps)
    }

    pub fn square_center(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::SquareCenter, a, b, eps)
    }

    pub fn square_right(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::SquareRight, a, b, eps)
    }

    pub fn trapecy(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::Trapecy, a, b, eps)
    }

    pub fn simpson(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::Simpson, a, b, eps)
    }

    pub fn bull(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::Bull, a, b, eps)
    }

    pub fn three_eights(a: f64, b: f64, eps: f64) -> QuadratureRule {
        QuadratureRule::new(QuadratureMethod::ThreeEights, a, b, eps)
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn name(&self) -> &'static str {
        self.method.display_name()
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn validate(&self) -> Result<(), QuadratureError> {
        if !self.a.is_finite() || !self.b.is_finite() {
            return Err(QuadratureError::NonFiniteBound { a: self.a, b: self.b });
        }
        if !(self.eps > 0.0) || !self.eps.is_finite() {
            return Err(QuadratureError::NonPositiveTolerance(self.eps));
        }
        Ok(())
    }

    /// 反覆加細直到相鄰兩次估計之差不超過 eps。
    ///
    /// 不檢查參數、不限制次數：eps <= 0 或病態被積函數可能使迴圈不終止。
    /// 需要保護時改用 [`QuadratureRule::integrate_with_settings`]。
    pub fn integrate<F: Integrand>(&self, f: F) -> f64 {
        self.refine(&f, None, |_| {}).value
    }

    /// 與 `integrate` 相同的計算，另外記錄每次估計與函數呼叫次數。
    pub fn integrate_with_report<F: Integrand>(&self, f: F) -> IntegrationReport {
        let (refinement, evaluations, estimates) = self.refine_counted(&f, None);
        self.report(refinement, evaluations, estimates)
    }

    /// 依設定檢查參數並限制加細次數。
    ///
    /// 上限 `max_refinements` 計算的是步長減半的次數；無論上限為何，
    /// 至少會執行一次加細。
    pub fn integrate_with_settings<F: Integrand>(&self,
                                                 f: F,
                                                 settings: &IntegrationSettings) -> Result<IntegrationReport, QuadratureError> {
        if settings.validate() {
            self.validate()?;
        }
        let limit = settings.max_refinements();
        let (refinement, evaluations, estimates) = self.refine_counted(&f, limit);
        if !refinement.converged {
            let limit = limit.unwrap_or(refinement.refinements);
            warn!(method = %self.method, limit, estimate = refinement.value, delta = refinement.delta,
                  "refinement limit reached before convergence");
            return Err(QuadratureError::RefinementLimitExceeded {
                method: self.method,
                limit,
                last_estimate: refinement.value,
                last_delta: refinement.delta
            });
        }
        Ok(self.report(refinement, evaluations, estimates))
    }

    fn report(&self, refinement: Refinement, evaluations: u64, estimates: Vec<f64>) -> IntegrationReport {
        IntegrationReport::new(
            self.method,
            refinement.value,
            refinement.refinements,
            refinement.subdivisions,
            evaluations,
            estimates
        )
    }

    fn refine_counted<F: Integrand>(&self, f: &F, limit: Option<u32>) -> (Refinement, u64, Vec<f64>) {
        let evaluations = Cell::new(0u64);
        let counted = |x: f64| {
            evaluations.set(evaluations.get() + 1);
            f.value(x)
        };
        let mut estimates = Vec::new();
        let refinement = self.refine(&counted, limit, |estimate| estimates.push(estimate));
        (refinement, evaluations.get(), estimates)
    }

    fn refine<F: Integrand>(&self,
                            f: &F,
                            limit: Option<u32>,
                            mut on_estimate: impl FnMut(f64)) -> Refinement {
        let (a, b) = (self.a, self.b);
        let mut n = self.method.base_subdivisions();
        let mut h = (b - a) / n as f64;
        let mut sum = self.method.base_estimate(f, a, b, h);
        on_estimate(sum);

        let mut refinements = 0u32;
        loop {
            let previous = sum;
            h /= 2.0;
            n *= 2;
            sum = self.method.composite_estimate(f, a, b, h, n);
            refinements += 1;
            on_estimate(sum);

            let delta = (sum - previous).abs();
            trace!(method = %self.method, n, h, estimate = sum, delta, "refinement pass");

            let converged = !(delta > self.eps);
            if converged || limit.is_some_and(|limit| refinements >= limit) {
                if converged {
                    debug!(method = %self.method, refinements, subdivisions = n, value = sum, "converged");
                }
                return Refinement {
                    value: sum,
                    refinements,
                    subdivisions: n,
                    delta,
                    converged
                };
            }
        }
    }
}
