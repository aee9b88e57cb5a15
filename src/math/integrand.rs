/// 被積函數：實數到實數的映射。
///
/// 所有 `Fn(f64) -> f64` 自動實作此 trait，因此閉包、函數指標皆可直接傳入。
pub trait Integrand {
    fn value(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
