use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_STOCK_LENGTH: u32 = 2700;
pub const DEFAULT_STOCK_QUANTITY: u32 = 8;

/// Accepts a JSON number as `u32` as long as it is integral (`500` or `500.0`).
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementGroup {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub length: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub quantity: u32,
}

impl RequirementGroup {
    pub fn new(length: u32, quantity: u32) -> Self {
        Self { length, quantity }
    }

    pub fn total_length(&self) -> u64 {
        self.length as u64 * self.quantity as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockGroup {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub length: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub quantity: u32,
}

impl StockGroup {
    pub fn new(length: u32, quantity: u32) -> Self {
        Self { length, quantity }
    }

    pub fn total_length(&self) -> u64 {
        self.length as u64 * self.quantity as u64
    }
}

impl Default for StockGroup {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK_LENGTH, DEFAULT_STOCK_QUANTITY)
    }
}

impl std::fmt::Display for StockGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}mm", self.quantity, self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bin {
    pub id: usize,
    // index into the stock groups
    pub group: usize,
    pub capacity: u32,
    pub remaining: u32,
    pub cuts: Vec<u32>,
}

impl Bin {
    pub fn new(id: usize, group: usize, capacity: u32) -> Self {
        Self {
            id,
            group,
            capacity,
            remaining: capacity,
            cuts: Vec::new(),
        }
    }

    pub fn fits(&self, piece: u32) -> bool {
        self.remaining >= piece
    }

    /// Assigns `piece` to this bin, or returns `false` and leaves the bin untouched if it has no room.
    pub fn cut(&mut self, piece: u32) -> bool {
        if !self.fits(piece) {
            return false;
        }
        self.cuts.push(piece);
        self.remaining -= piece;
        true
    }

    pub fn used(&self) -> u32 {
        self.capacity - self.remaining
    }

    pub fn usage_percent(&self) -> u32 {
        percent(self.used() as u64, self.capacity as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuttingPlan {
    pub bins: Vec<Bin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub bins: usize,
    pub total_capacity: u64,
    pub total_used: u64,
    pub total_waste: u64,
    pub efficiency_percent: u32,
}

impl CuttingPlan {
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn total_capacity(&self) -> u64 {
        self.bins.iter().map(|b| b.capacity as u64).sum()
    }

    pub fn total_used(&self) -> u64 {
        self.bins.iter().map(|b| b.used() as u64).sum()
    }

    pub fn total_waste(&self) -> u64 {
        self.bins.iter().map(|b| b.remaining as u64).sum()
    }

    pub fn summary(&self) -> PlanSummary {
        let total_capacity = self.total_capacity();
        let total_used = self.total_used();
        PlanSummary {
            bins: self.bin_count(),
            total_capacity,
            total_used,
            total_waste: self.total_waste(),
            efficiency_percent: percent(total_used, total_capacity),
        }
    }
}

fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_cut_tracks_remaining() {
        let mut bin = Bin::new(0, 0, 100);
        assert!(bin.fits(100));
        assert!(bin.cut(60));
        assert_eq!(bin.remaining, 40);
        assert_eq!(bin.used(), 60);
        assert_eq!(bin.usage_percent(), 60);
        assert!(!bin.fits(41));
        assert!(bin.fits(40));
    }

    #[test]
    fn test_bin_refuses_oversized_cut() {
        let mut bin = Bin::new(0, 0, 100);
        assert!(bin.cut(70));
        assert!(!bin.cut(31));
        assert_eq!(bin.remaining, 30);
        assert_eq!(bin.cuts, vec![70]);
        assert!(bin.remaining <= bin.capacity);
    }

    #[test]
    fn test_summary_rounds_efficiency() {
        let mut a = Bin::new(0, 0, 3);
        assert!(a.cut(2));
        let plan = CuttingPlan { bins: vec![a] };
        let summary = plan.summary();
        assert_eq!(summary.total_used, 2);
        assert_eq!(summary.total_waste, 1);
        assert_eq!(summary.efficiency_percent, 67);
    }

    #[test]
    fn test_empty_plan_summary() {
        let plan = CuttingPlan { bins: vec![] };
        assert_eq!(plan.summary().efficiency_percent, 0);
        assert_eq!(plan.summary().total_capacity, 0);
    }

    #[test]
    fn test_deserialize_integral_floats() {
        let g: RequirementGroup =
            serde_json::from_str(r#"{"length": 500.0, "quantity": 2}"#).unwrap();
        assert_eq!(g, RequirementGroup::new(500, 2));

        let err = serde_json::from_str::<RequirementGroup>(r#"{"length": 1.5, "quantity": 2}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<StockGroup>(r#"{"length": -3, "quantity": 2}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_default_stock() {
        let stock = StockGroup::default();
        assert_eq!(stock.total_length(), 21600);
        assert_eq!(stock.to_string(), "8 x 2700mm");
    }
}
