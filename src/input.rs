//! Turns user-supplied groups into validated requirement and stock lists.
//!
//! Everything here runs before the packer: the packer itself assumes every length and
//! quantity is a positive integer.

use crate::error::InputError;
use crate::types::{RequirementGroup, StockGroup};

/// Largest quantity accepted for a single group.
pub const MAX_QUANTITY: u32 = 10_000;
/// Largest number of pieces (or stock beams) accepted across all groups of one list.
pub const MAX_TOTAL_QUANTITY: u64 = 100_000;

/// Parses `LENGTH:QTY`, e.g. `850:12`.
pub fn parse_group(s: &str) -> Result<(u32, u32), InputError> {
    let (length, qty) = s
        .split_once(':')
        .ok_or_else(|| InputError::Malformed(s.to_string()))?;
    if qty.contains(':') {
        return Err(InputError::Malformed(s.to_string()));
    }
    let length = parse_positive(length.trim(), "length", s)?;
    let qty = parse_positive(qty.trim(), "quantity", s)?;
    check_group(length, qty)?;
    Ok((length, qty))
}

fn parse_positive(value: &str, field: &'static str, input: &str) -> Result<u32, InputError> {
    let n = value.parse::<u32>().map_err(|_| InputError::NotANumber {
        field,
        input: input.to_string(),
    })?;
    if n == 0 {
        return Err(InputError::NotPositive {
            field,
            input: input.to_string(),
        });
    }
    Ok(n)
}

pub fn parse_requirements<S: AsRef<str>>(items: &[S]) -> Result<Vec<RequirementGroup>, InputError> {
    if items.is_empty() {
        return Err(InputError::Empty("cut"));
    }
    let groups = items
        .iter()
        .map(|s| parse_group(s.as_ref()).map(|(l, q)| RequirementGroup::new(l, q)))
        .collect::<Result<Vec<_>, _>>()?;
    check_total(groups.iter().map(|g| g.quantity), "cut")?;
    Ok(groups)
}

pub fn parse_stock<S: AsRef<str>>(items: &[S]) -> Result<Vec<StockGroup>, InputError> {
    if items.is_empty() {
        return Err(InputError::Empty("stock"));
    }
    let groups = items
        .iter()
        .map(|s| parse_group(s.as_ref()).map(|(l, q)| StockGroup::new(l, q)))
        .collect::<Result<Vec<_>, _>>()?;
    check_total(groups.iter().map(|g| g.quantity), "stock")?;
    Ok(groups)
}

/// Checks groups that arrived already structured (e.g. as JSON).
pub fn validate_requirements(groups: &[RequirementGroup]) -> Result<(), InputError> {
    if groups.is_empty() {
        return Err(InputError::Empty("cut"));
    }
    for g in groups {
        check_group(g.length, g.quantity)?;
    }
    check_total(groups.iter().map(|g| g.quantity), "cut")
}

pub fn validate_stock(groups: &[StockGroup]) -> Result<(), InputError> {
    if groups.is_empty() {
        return Err(InputError::Empty("stock"));
    }
    for g in groups {
        check_group(g.length, g.quantity)?;
    }
    check_total(groups.iter().map(|g| g.quantity), "stock")
}

fn check_group(length: u32, quantity: u32) -> Result<(), InputError> {
    let input = format!("{length}:{quantity}");
    if length == 0 {
        return Err(InputError::NotPositive {
            field: "length",
            input,
        });
    }
    if quantity == 0 {
        return Err(InputError::NotPositive {
            field: "quantity",
            input,
        });
    }
    if quantity > MAX_QUANTITY {
        return Err(InputError::QuantityTooLarge {
            input,
            max: MAX_QUANTITY,
        });
    }
    Ok(())
}

fn check_total(quantities: impl Iterator<Item = u32>, kind: &'static str) -> Result<(), InputError> {
    let total: u64 = quantities.map(u64::from).sum();
    if total > MAX_TOTAL_QUANTITY {
        return Err(InputError::TooMany {
            kind,
            total,
            max: MAX_TOTAL_QUANTITY,
        });
    }
    Ok(())
}
