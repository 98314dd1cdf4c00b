use crate::types::{Bin, CuttingPlan, PlanSummary};

const MAX_WIDTH: f64 = 80.0;

/// Draws a bin as a bar where each segment is proportional to its share of the capacity.
///
/// Cuts are `|850mm    `, leftover stock is filled with `.`.
pub fn render_bin(bin: &Bin) -> String {
    if bin.capacity == 0 {
        return String::new();
    }
    let scale = MAX_WIDTH / bin.capacity as f64;

    let mut bar = String::new();
    for &cut in &bin.cuts {
        let width = ((cut as f64 * scale).round() as usize).max(1);
        bar.push_str(&segment(width, &format!("{cut}mm"), ' '));
    }
    if bin.remaining > 0 {
        let width = ((bin.remaining as f64 * scale).round() as usize).max(1);
        bar.push_str(&segment(width, &format!("{}mm", bin.remaining), '.'));
    }
    bar.push('|');
    bar
}

fn segment(width: usize, label: &str, fill: char) -> String {
    let mut out = String::with_capacity(width);
    out.push('|');
    let label_len = label.chars().count();
    // Leave at least one fill char after the label so neighbours stay readable
    let body = if label_len + 2 <= width { label } else { "" };
    out.push_str(body);
    for _ in (1 + body.chars().count())..width {
        out.push(fill);
    }
    out
}

pub fn render_plan(plan: &CuttingPlan) -> String {
    let mut result = String::new();
    for bin in &plan.bins {
        result.push_str(&format!("Beam {} ({}mm):\n", bin.id + 1, bin.capacity));
        result.push_str(&format!("  {}\n", render_bin(bin)));
        result.push_str(&format!(
            "  Used: {}mm ({}%)  Waste: {}mm\n",
            bin.used(),
            bin.usage_percent(),
            bin.remaining
        ));
    }
    result
}

pub fn render_summary(summary: &PlanSummary) -> String {
    format!(
        "Summary: {} beam{}, {}mm used, {}mm waste, {}% efficiency\n",
        summary.bins,
        if summary.bins == 1 { "" } else { "s" },
        summary.total_used,
        summary.total_waste,
        summary.efficiency_percent,
    )
}
