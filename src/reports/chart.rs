//! Breakdown chart rendering
//!
//! Renders the category breakdown as an SVG bar chart at a fixed output
//! path, overwriting any previous chart. One bar per category in breakdown
//! order, bar height proportional to the category total.

use std::path::{Path, PathBuf};

use svg::node::element::{Line, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 700.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 90.0;
const BAR_FILL: &str = "skyblue";

/// Render the breakdown as a bar chart, returning the path written
///
/// Returns `Ok(None)` without creating a file when the breakdown is empty;
/// an empty chart is "nothing to show", not a failure.
pub fn render_breakdown_chart(
    breakdown: &[(String, Money)],
    currency_symbol: &str,
    output: &Path,
) -> OutlayResult<Option<PathBuf>> {
    if breakdown.is_empty() {
        return Ok(None);
    }

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| OutlayError::Export(format!("Failed to create report directory: {}", e)))?;
    }

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let max_cents = breakdown
        .iter()
        .map(|(_, total)| total.cents())
        .max()
        .unwrap_or(1)
        .max(1);

    let slot = plot_width / breakdown.len() as f64;
    let bar_width = slot * 0.7;

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("font-family", "sans-serif");

    document = document.add(
        text("Expense Breakdown by Category", WIDTH / 2.0, MARGIN_TOP / 2.0)
            .set("text-anchor", "middle")
            .set("font-size", 22),
    );

    // Axes
    document = document
        .add(axis_line(
            MARGIN_LEFT,
            MARGIN_TOP,
            MARGIN_LEFT,
            MARGIN_TOP + plot_height,
        ))
        .add(axis_line(
            MARGIN_LEFT,
            MARGIN_TOP + plot_height,
            MARGIN_LEFT + plot_width,
            MARGIN_TOP + plot_height,
        ));

    // Y-axis label carries the active currency symbol
    document = document.add(
        text(
            &format!("Total Amount ({})", currency_symbol),
            20.0,
            MARGIN_TOP + plot_height / 2.0,
        )
        .set("text-anchor", "middle")
        .set("font-size", 14)
        .set(
            "transform",
            format!(
                "rotate(-90 {} {})",
                20.0,
                MARGIN_TOP + plot_height / 2.0
            ),
        ),
    );

    for (i, (category, total)) in breakdown.iter().enumerate() {
        let bar_height = total.cents() as f64 / max_cents as f64 * plot_height;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = MARGIN_TOP + plot_height - bar_height;
        let center = x + bar_width / 2.0;

        document = document.add(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", bar_width)
                .set("height", bar_height)
                .set("fill", BAR_FILL),
        );

        // Value above the bar, category name below the axis
        document = document
            .add(
                text(&total.format_with_symbol(currency_symbol), center, y - 8.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 13),
            )
            .add(
                text(category, center, MARGIN_TOP + plot_height + 25.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 14),
            );
    }

    svg::save(output, &document)
        .map_err(|e| OutlayError::Export(format!("Failed to write chart: {}", e)))?;

    Ok(Some(output.to_path_buf()))
}

fn text(content: &str, x: f64, y: f64) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .add(TextNode::new(content))
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", "black")
        .set("stroke-width", 2.0)
}
