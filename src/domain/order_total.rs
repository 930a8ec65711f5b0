#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotal(f64);

impl OrderTotal {
    pub fn parse(total: &str) -> Result<OrderTotal, String>{
        match total.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Self(value)),
            _ => Err(format!("{} is not a valid order total", total))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
