use crate::models::InventoryItem;
use crate::view::aggregates::TopItem;
use std::fmt::Write;

const HEADERS: [&str; 4] = ["Name", "Description", "Quantity", "Price"];
const BAR_WIDTH: usize = 40;

pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Renders the item list as a plain-text table.
pub fn render_table(items: &[InventoryItem]) -> String {
    let rows: Vec<[String; 4]> = items
        .iter()
        .map(|item| {
            [
                item.name.clone(),
                item.description.clone(),
                item.quantity.to_string(),
                format_money(item.price),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    if rows.is_empty() {
        out.push_str("(no items)\n");
    }

    out
}

// Text columns are left aligned, numeric ones right aligned.
fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = format!(
        "{:<w0$} | {:<w1$} | {:>w2$} | {:>w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Renders the total value and a bar chart of the top items.
pub fn render_analytics(total_value: f64, top_items: &[TopItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Inventory Value: {}", format_money(total_value));
    let _ = writeln!(out, "Top {} Items by Value:", top_items.len());

    let name_width = top_items
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = top_items
        .iter()
        .map(|t| t.value)
        .fold(0.0_f64, f64::max);

    for top in top_items {
        let bar = bar_length(top.value, max_value);
        let _ = writeln!(
            out,
            "  {:<nw$}  {:<bw$}  {}",
            top.name,
            "#".repeat(bar),
            format_money(top.value),
            nw = name_width,
            bw = BAR_WIDTH,
        );
    }

    out
}

fn bar_length(value: f64, max_value: f64) -> usize {
    if value <= 0.0 || max_value <= 0.0 {
        return 0;
    }

    ((value / max_value) * BAR_WIDTH as f64).round() as usize
}
