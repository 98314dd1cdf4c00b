use serde::Serialize;
use thiserror::Error;

/// Why a set of required pieces cannot be cut from the given stock.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PackingFailure {
    /// Total demand is larger than all stock put together.
    #[error(
        "Impossible: Total length needed ({total_demand}mm) exceeds capacity ({total_capacity}mm)"
    )]
    CapacityExceeded {
        total_demand: u64,
        total_capacity: u64,
    },

    /// Enough stock in aggregate, but these pieces found no bin with room left.
    #[error(
        "Impossible: Cannot fit beams of lengths: {}mm into available space",
        join_lengths(.unplaced)
    )]
    PlacementFailed { unplaced: Vec<u32> },
}

fn join_lengths(lengths: &[u32]) -> String {
    lengths
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejected user input, raised before anything reaches the packer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid group '{0}', expected LENGTH:QTY")]
    Malformed(String),

    #[error("invalid {field} in '{input}'")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be greater than zero in '{input}'")]
    NotPositive { field: &'static str, input: String },

    #[error("quantity in '{input}' is larger than {max}")]
    QuantityTooLarge { input: String, max: u32 },

    #[error("too many {kind} pieces ({total}), at most {max} are supported")]
    TooMany {
        kind: &'static str,
        total: u64,
        max: u64,
    },

    #[error("at least one {0} group is required")]
    Empty(&'static str),
}
