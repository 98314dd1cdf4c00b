use crate::types::{Bin, RequirementGroup, StockGroup};

/// Flattens requirement groups into individual piece lengths, longest first.
pub fn expand_demand(groups: &[RequirementGroup]) -> Vec<u32> {
    let mut pieces = Vec::with_capacity(groups.iter().map(|g| g.quantity as usize).sum());
    for g in groups {
        for _ in 0..g.quantity {
            pieces.push(g.length);
        }
    }
    // Longest first, so big pieces claim space before it fragments
    pieces.sort_unstable_by(|a, b| b.cmp(a));
    pieces
}

pub fn expand_stock(groups: &[StockGroup]) -> Vec<Bin> {
    let mut bins = Vec::new();
    for (gi, g) in groups.iter().enumerate() {
        for _ in 0..g.quantity {
            bins.push(Bin::new(bins.len(), gi, g.length));
        }
    }
    bins
}
