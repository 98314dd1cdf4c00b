use crate::error::PackingFailure;
use crate::expand::{expand_demand, expand_stock};
use crate::types::{CuttingPlan, RequirementGroup, StockGroup};

pub struct Solver {
    stock: Vec<StockGroup>,
    demands: Vec<RequirementGroup>,
}

impl Solver {
    pub fn new(stock: Vec<StockGroup>, demands: Vec<RequirementGroup>) -> Self {
        Self { stock, demands }
    }

    pub fn solve(&self) -> Result<CuttingPlan, PackingFailure> {
        // Settle the totals from the groups so nothing is expanded for a hopeless request
        let total_demand: u64 = self.demands.iter().map(|d| d.total_length()).sum();
        let total_capacity = stock_capacity(&self.stock);
        if total_demand > total_capacity {
            tracing::debug!(total_demand, total_capacity, "demand exceeds stock capacity");
            return Err(PackingFailure::CapacityExceeded {
                total_demand,
                total_capacity,
            });
        }

        let pieces = expand_demand(&self.demands);
        pack(&pieces, &self.stock)
    }
}

fn stock_capacity(stock: &[StockGroup]) -> u64 {
    stock.iter().map(|s| s.total_length()).sum()
}

/// First-Fit Decreasing: `demand` longest first, each piece into the first bin with room.
pub fn pack(demand: &[u32], stock: &[StockGroup]) -> Result<CuttingPlan, PackingFailure> {
    let total_demand: u64 = demand.iter().map(|&p| p as u64).sum();
    let total_capacity = stock_capacity(stock);
    if total_demand > total_capacity {
        tracing::debug!(total_demand, total_capacity, "demand exceeds stock capacity");
        return Err(PackingFailure::CapacityExceeded {
            total_demand,
            total_capacity,
        });
    }

    let mut bins = expand_stock(stock);
    let mut unplaced = Vec::new();
    for &piece in demand {
        match bins.iter_mut().find(|b| b.fits(piece)) {
            Some(bin) => {
                let placed = bin.cut(piece);
                debug_assert!(placed);
                tracing::debug!(piece, bin = bin.id, remaining = bin.remaining, "placed piece");
            }
            None => {
                // Keep going so the failure lists every piece without a home
                tracing::debug!(piece, "no bin has room for piece");
                unplaced.push(piece);
            }
        }
    }

    if !unplaced.is_empty() {
        tracing::debug!(count = unplaced.len(), "pieces could not be placed");
        return Err(PackingFailure::PlacementFailed { unplaced });
    }

    let plan = CuttingPlan { bins };
    tracing::info!(
        bins = plan.bin_count(),
        pieces = demand.len(),
        waste = plan.total_waste(),
        "cutting plan complete"
    );
    Ok(plan)
}
