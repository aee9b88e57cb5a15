use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::integrand::Integrand;
use super::quadratureerror::QuadratureError;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureMethod
// ─────────────────────────────────────────────────────────────────────────────
//
// 七種等距節點積分法，共用同一個「步長減半」收斂迴圈（見 quadraturerule.rs），
// 各自只提供：
//   1. 初始分割數 n0
//   2. n0 時的起始公式（base formula）
//   3. 一般分割數 n 時的複合公式（composite formula）
//
// 節點：x_i = a + i·h，h = (b - a) / n。
// a > b 時 h 為負，公式對 h 線性，因此結果自動變號。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuadratureMethod {
    SquareLeft,
    SquareCenter,
    SquareRight,
    Trapecy,
    Simpson,
    Bull,
    ThreeEights
}

impl QuadratureMethod {
    /// 依選單順序（1..=7）排列的全部方法。
    pub const ALL: [QuadratureMethod; 7] = [
        QuadratureMethod::SquareLeft,
        QuadratureMethod::SquareCenter,
        QuadratureMethod::SquareRight,
        QuadratureMethod::Trapecy,
        QuadratureMethod::Simpson,
        QuadratureMethod::Bull,
        QuadratureMethod::ThreeEights
    ];

    /// 以選單編號（從 1 起算）取得方法。
    pub fn from_index(index: u32) -> Result<QuadratureMethod, QuadratureError> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
            .ok_or(QuadratureError::UnknownMethodIndex(index))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuadratureMethod::SquareLeft => "Square left",
            QuadratureMethod::SquareCenter => "Square center",
            QuadratureMethod::SquareRight => "Square right",
            QuadratureMethod::Trapecy => "Trapecy",
            QuadratureMethod::Simpson => "Simpson",
            QuadratureMethod::Bull => "Bull",
            QuadratureMethod::ThreeEights => "Three eights (3/8)"
        }
    }

    /// 起始分割數 n0；複合公式要求 n 為 n0 的倍數。
    pub fn base_subdivisions(&self) -> u64 {
        match self {
            QuadratureMethod::Bull => 4,
            QuadratureMethod::ThreeEights => 3,
            _ => 2
        }
    }

    /// n = n0 時的起始估計，h = (b - a) / n0。
    pub fn base_estimate<F: Integrand>(&self, f: &F, a: f64, b: f64, h: f64) -> f64 {
        match self {
            QuadratureMethod::SquareLeft => {
                (f.value(a) + f.value(a + h)) * h
            },
            QuadratureMethod::SquareCenter => {
                (f.value(a + 0.5 * h) + f.value(a + 1.5 * h)) * h
            },
            QuadratureMethod::SquareRight => {
                (f.value(a + h) + f.value(a + 2.0 * h)) * h
            },
            QuadratureMethod::Trapecy => {
                (f.value(a) / 2.0 + f.value(a + h) + f.value(b) / 2.0) * h
            },
            QuadratureMethod::Simpson => {
                (f.value(a) + 4.0 * f.value(a + h) + f.value(b)) * h / 3.0
            },
            QuadratureMethod::Bull => {
                let ends = 7.0 * (f.value(a) + f.value(b));
                let odd = 32.0 * (f.value(a + h) + f.value(a + 3.0 * h));
                let middle = 12.0 * f.value(a + 2.0 * h);
                (ends + odd + middle) * 2.0 * h / 45.0
            },
            QuadratureMethod::ThreeEights => {
                (f.value(a) + 3.0 * f.value(a + h) + 3.0 * f.value(a + 2.0 * h) + f.value(b)) * h * 3.0 / 8.0
            }
        }
    }

    /// 分割數 n、步長 h 時的複合公式，每次皆重新計算所有節點。
    pub fn composite_estimate<F: Integrand>(&self, f: &F, a: f64, b: f64, h: f64, n: u64) -> f64 {
        let node = |i: u64| f.value(a + i as f64 * h);
        match self {
            QuadratureMethod::SquareLeft => {
                (0..n).map(node).sum::<f64>() * h
            },
            QuadratureMethod::SquareCenter => {
                (0..n).map(|i| f.value(a + (i as f64 + 0.5) * h)).sum::<f64>() * h
            },
            QuadratureMethod::SquareRight => {
                (1..=n).map(node).sum::<f64>() * h
            },
            QuadratureMethod::Trapecy => {
                let mut sum = (f.value(a) + f.value(b)) / 2.0;
                for i in 1..n {
                    sum += node(i);
                }
                sum * h
            },
            QuadratureMethod::Simpson => {
                let mut sum = f.value(a) + f.value(b);
                for i in 1..=n / 2 {
                    sum += 4.0 * node(2 * i - 1);
                }
                for i in 1..n / 2 {
                    sum += 2.0 * node(2 * i);
                }
                sum * (h / 3.0)
            },
            QuadratureMethod::Bull => {
                let mut sum = 7.0 * (f.value(a) + f.value(b));
                for i in 1..n / 4 {
                    sum += 14.0 * node(4 * i);
                }
                for i in 1..=n / 2 {
                    sum += 32.0 * node(2 * i - 1);
                }
                for i in 1..=n / 4 {
                    sum += 12.0 * node(4 * i - 2);
                }
                sum * (2.0 * h / 45.0)
            },
            QuadratureMethod::ThreeEights => {
                let mut sum = f.value(a) + f.value(b);
                for i in 1..n {
                    let weight = if i % 3 == 0 { 2.0 } else { 3.0 };
                    sum += weight * node(i);
                }
                sum * (3.0 / 8.0 * h)
            }
        }
    }
}

impl Display for QuadratureMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
