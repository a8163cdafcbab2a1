//! Dashboard chart spec builders.
//!
//! Pure functions binding backend aggregates to the dashboard's chart
//! widgets. Each builder takes an explicit [`Theme`] resolved once at the
//! call site and returns the widget's configuration object.

use kb_domain::{Theme, TimelinePoint};
use serde_json::{json, Value};

/// Segment colors per platform, in the palette the dashboard ships.
const PLATFORM_COLORS: [(&str, &str); 5] = [
    ("web", "#3B82F6"),
    ("pdf", "#EF4444"),
    ("youtube", "#F43F5E"),
    ("reddit", "#F97316"),
    ("twitter", "#0EA5E9"),
];

/// Neutral segment color for platforms the palette does not know.
const FALLBACK_COLOR: &str = "#6B7280";

/// Line series color (and its 10%-alpha fill).
const SERIES_COLOR: &str = "#3B82F6";
const SERIES_FILL: &str = "rgba(59, 130, 246, 0.1)";

fn platform_color(platform: &str) -> &'static str {
    PLATFORM_COLORS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

fn text_color(theme: Theme) -> &'static str {
    if theme.is_dark() { "#9CA3AF" } else { "#6B7280" }
}

fn grid_color(theme: Theme) -> &'static str {
    if theme.is_dark() { "#374151" } else { "#E5E7EB" }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Doughnut chart of documents per platform.
///
/// Segments follow the input order. Returns `None` on an empty dataset.
pub fn platform_chart(platforms: &[(String, u64)], theme: Theme) -> Option<Value> {
    if platforms.is_empty() {
        return None;
    }

    let labels: Vec<String> = platforms.iter().map(|(name, _)| capitalize(name)).collect();
    let values: Vec<u64> = platforms.iter().map(|(_, count)| *count).collect();
    let colors: Vec<&str> = platforms
        .iter()
        .map(|(name, _)| platform_color(name))
        .collect();

    Some(json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": colors,
                "borderWidth": 0,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "color": text_color(theme), "padding": 16 },
                },
            },
        },
    }))
}

/// Line chart of documents ingested over time.
///
/// Renders even on empty data (an empty axis is a valid dashboard state).
pub fn timeline_chart(timeline: &[TimelinePoint], theme: Theme) -> Value {
    let labels: Vec<&str> = timeline.iter().map(|t| t.date.as_str()).collect();
    let values: Vec<u64> = timeline.iter().map(|t| t.count).collect();

    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Documents",
                "data": values,
                "borderColor": SERIES_COLOR,
                "backgroundColor": SERIES_FILL,
                "fill": true,
                "tension": 0.3,
                "pointRadius": 4,
                "pointBackgroundColor": SERIES_COLOR,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "ticks": { "color": text_color(theme), "stepSize": 1 },
                    "grid": { "color": grid_color(theme) },
                },
                "x": {
                    "ticks": { "color": text_color(theme) },
                    "grid": { "color": grid_color(theme) },
                },
            },
            "plugins": {
                "legend": { "display": false },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
    }

    #[test]
    fn doughnut_keeps_insertion_order_and_palette() {
        let chart = platform_chart(&counts(&[("web", 5), ("pdf", 2)]), Theme::Light).unwrap();
        let dataset = &chart["data"]["datasets"][0];
        assert_eq!(dataset["data"][0], 5);
        assert_eq!(dataset["data"][1], 2);
        assert_eq!(dataset["backgroundColor"][0], "#3B82F6");
        assert_eq!(dataset["backgroundColor"][1], "#EF4444");
        assert_eq!(chart["data"]["labels"][0], "Web");
        assert_eq!(chart["data"]["labels"][1], "Pdf");
    }

    #[test]
    fn unknown_platform_gets_the_fallback_color() {
        let chart = platform_chart(&counts(&[("gopher", 1)]), Theme::Light).unwrap();
        assert_eq!(
            chart["data"]["datasets"][0]["backgroundColor"][0],
            "#6B7280"
        );
    }

    #[test]
    fn empty_platforms_render_nothing() {
        assert!(platform_chart(&[], Theme::Light).is_none());
    }

    #[test]
    fn legend_text_color_follows_theme() {
        let light = platform_chart(&counts(&[("web", 1)]), Theme::Light).unwrap();
        let dark = platform_chart(&counts(&[("web", 1)]), Theme::Dark).unwrap();
        assert_eq!(
            light["options"]["plugins"]["legend"]["labels"]["color"],
            "#6B7280"
        );
        assert_eq!(
            dark["options"]["plugins"]["legend"]["labels"]["color"],
            "#9CA3AF"
        );
    }

    #[test]
    fn timeline_renders_even_when_empty() {
        let chart = timeline_chart(&[], Theme::Light);
        assert_eq!(chart["type"], "line");
        assert_eq!(chart["data"]["labels"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn timeline_axis_starts_at_zero_with_integer_steps() {
        let timeline = vec![
            TimelinePoint { date: "2026-08-01".to_string(), count: 3 },
            TimelinePoint { date: "2026-08-02".to_string(), count: 5 },
        ];
        let chart = timeline_chart(&timeline, Theme::Dark);
        let y = &chart["options"]["scales"]["y"];
        assert_eq!(y["beginAtZero"], true);
        assert_eq!(y["ticks"]["stepSize"], 1);
        assert_eq!(y["grid"]["color"], "#374151");
        assert_eq!(chart["data"]["datasets"][0]["data"][1], 5);
    }
}
