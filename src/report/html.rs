//! Static HTML page with the report tables and Chart.js charts.

use serde_json::{Value, json};
use std::fmt::Write as _;

use crate::report::EdaReport;
use crate::report::format::{opt_fixed, thousands};
use crate::report::sections::{Section, TableView};
use crate::report::views::{GroupStats, RankedAnime};

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js";

const STYLE: &str = r"
* { box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    margin: 0;
    padding: 24px;
    background: #f5f5f7;
    color: #222;
}
header { margin-bottom: 24px; }
h1 { margin: 0 0 4px; }
.meta { color: #666; font-size: 14px; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; margin-bottom: 24px; }
.card { background: #fff; border-radius: 8px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.card .label { color: #666; font-size: 13px; }
.card .value { font-size: 24px; font-weight: 600; }
section { background: #fff; border-radius: 8px; padding: 16px 20px; margin-bottom: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
section h2 { margin-top: 0; font-size: 18px; }
.chart-container { position: relative; height: 320px; margin-bottom: 16px; }
table { border-collapse: collapse; width: 100%; margin-bottom: 12px; font-size: 14px; }
caption { text-align: left; font-weight: 600; padding: 8px 0; }
th, td { text-align: left; padding: 6px 10px; border-bottom: 1px solid #eee; }
th { background: #fafafa; }
td.hl { font-weight: 600; color: #1565c0; }
footer { color: #888; font-size: 12px; text-align: center; margin-top: 24px; }
";

const BAR_COLOR: &str = "rgba(25, 118, 210, 0.7)";
const POINT_COLOR: &str = "rgba(76, 175, 80, 0.5)";
const LINE_COLOR: &str = "rgba(239, 83, 80, 1)";

fn esc(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// JSON inside a `<script>` element must not close it early.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn bar_chart(labels: Vec<String>, values: Vec<Value>, label: &str, horizontal: bool) -> Value {
    let index_axis = if horizontal { "y" } else { "x" };
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": label,
                "data": values,
                "backgroundColor": BAR_COLOR,
            }]
        },
        "options": {
            "indexAxis": index_axis,
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } }
        }
    })
}

fn group_chart(groups: &[GroupStats]) -> Value {
    bar_chart(
        groups.iter().map(|g| g.key.clone()).collect(),
        groups.iter().map(|g| json!(g.count)).collect(),
        "Count",
        false,
    )
}

fn ranked_chart(
    ranked: &[RankedAnime],
    label: &str,
    value: impl Fn(&RankedAnime) -> Value,
) -> Value {
    bar_chart(
        ranked.iter().map(|r| r.name.clone()).collect(),
        ranked.iter().map(value).collect(),
        label,
        true,
    )
}

fn scatter_chart(report: &EdaReport) -> Value {
    let corr = &report.correlation;
    let points: Vec<Value> = corr
        .scatter
        .iter()
        .map(|p| json!({ "x": p.x, "y": p.y, "name": p.label }))
        .collect();

    let mut datasets = vec![json!({
        "type": "scatter",
        "label": "Anime",
        "data": points,
        "backgroundColor": POINT_COLOR,
    })];

    if let Some(fit) = corr.fit {
        let xs = corr.scatter.iter().map(|p| p.x);
        let lo = xs.clone().fold(f64::INFINITY, f64::min);
        let hi = xs.fold(f64::NEG_INFINITY, f64::max);
        if lo.is_finite() && hi.is_finite() {
            let line: Vec<Value> = [lo, hi]
                .iter()
                .map(|x| json!({ "x": x, "y": 10f64.powf(fit.predict(*x)) }))
                .collect();
            datasets.push(json!({
                "type": "line",
                "label": "OLS fit",
                "data": line,
                "borderColor": LINE_COLOR,
                "pointRadius": 0,
                "fill": false,
            }));
        }
    }

    json!({
        "type": "scatter",
        "data": { "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": { "title": { "display": true, "text": "Rating" } },
                "y": {
                    "type": "logarithmic",
                    "title": { "display": true, "text": "Members (log scale)" }
                }
            }
        }
    })
}

/// Chart shown above the tables of a section, keyed by section id.
fn chart_for(report: &EdaReport, section_id: &str) -> Option<Value> {
    let chart = match section_id {
        "types" => group_chart(&report.by_type),
        "genres" => group_chart(&report.by_genre),
        "top-rated" => ranked_chart(&report.top_rated, "Rating", |r| json!(r.rating)),
        "top-popular" => ranked_chart(&report.top_popular, "Members", |r| json!(r.members)),
        "longest" => ranked_chart(&report.longest, "Episodes", |r| json!(r.episodes)),
        "histogram" => bar_chart(
            report.rating_histogram.iter().map(|h| h.label.clone()).collect(),
            report.rating_histogram.iter().map(|h| json!(h.count)).collect(),
            "Anime",
            false,
        ),
        "correlation" => scatter_chart(report),
        _ => return None,
    };
    Some(chart)
}

fn write_table(html: &mut String, table: &TableView) {
    html.push_str("<table>\n");
    if let Some(caption) = &table.caption {
        let _ = writeln!(html, "<caption>{}</caption>", esc(caption));
    }

    html.push_str("<thead><tr>");
    for header in &table.headers {
        let _ = write!(html, "<th>{}</th>", esc(header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    if table.rows.is_empty() {
        let _ = writeln!(
            html,
            "<tr><td colspan=\"{}\">No rows</td></tr>",
            table.headers.len()
        );
    }
    for row in &table.rows {
        html.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            if table.highlight == Some(i) {
                let _ = write!(html, "<td class=\"hl\">{}</td>", esc(cell));
            } else {
                let _ = write!(html, "<td>{}</td>", esc(cell));
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

fn write_section(html: &mut String, section: &Section, chart: Option<&str>) {
    let _ = writeln!(html, "<section id=\"{}\">", section.id);
    let _ = writeln!(html, "<h2>{}</h2>", esc(&section.title));
    if let Some(canvas) = chart {
        let _ = writeln!(
            html,
            "<div class=\"chart-container\"><canvas id=\"{canvas}\"></canvas></div>"
        );
    }
    for table in &section.tables {
        write_table(html, table);
    }
    html.push_str("</section>\n");
}

fn card(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        html,
        "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        esc(label),
        esc(value)
    );
}

#[must_use]
pub fn render_html(report: &EdaReport) -> String {
    let mut html = String::with_capacity(64 * 1024);
    let mut charts: Vec<(String, Value)> = Vec::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("<title>Anime EDA Report</title>\n");
    let _ = writeln!(html, "<script src=\"{CHART_JS}\"></script>");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(
        html,
        "<header><h1>Anime EDA Report</h1><div class=\"meta\">Source: {} &middot; Generated: {}</div></header>",
        esc(&report.source),
        esc(&report.generated_at)
    );

    html.push_str("<div class=\"cards\">\n");
    card(
        &mut html,
        "Anime",
        &thousands(i64::try_from(report.total_rows).unwrap_or(i64::MAX)),
    );
    card(&mut html, "Mean rating", &opt_fixed(report.stats.rating.mean, 3));
    card(&mut html, "Genres shown", &report.by_genre.len().to_string());
    card(&mut html, "Pearson r", &opt_fixed(report.correlation.pearson, 4));
    html.push_str("</div>\n");

    for section in report.sections() {
        let canvas = chart_for(report, section.id).map(|chart| {
            let id = format!("chart-{}", section.id);
            charts.push((id.clone(), chart));
            id
        });
        write_section(&mut html, &section, canvas.as_deref());
    }

    let _ = writeln!(html, "<footer>Generated by anime-eda</footer>");

    // full report for scripting against the page
    let data = serde_json::to_value(report).unwrap_or_default();
    let _ = writeln!(
        html,
        "<script type=\"application/json\" id=\"report-data\">{}</script>",
        script_json(&data)
    );

    html.push_str("<script>\n");
    for (id, chart) in &charts {
        let _ = writeln!(
            html,
            "new Chart(document.getElementById('{id}'), {});",
            script_json(chart)
        );
    }
    html.push_str("</script>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_json_escapes_closing_tag() {
        let value = json!({ "name": "</script><b>" });
        let out = script_json(&value);
        assert!(!out.contains("</script>"));
        assert!(out.contains("<\\/script>"));
    }

    #[test]
    fn test_table_cells_are_escaped() {
        let table = TableView {
            caption: None,
            headers: vec!["Name"],
            rows: vec![vec!["Tom & Jerry <3".to_string()]],
            highlight: Some(0),
        };
        let mut html = String::new();
        write_table(&mut html, &table);
        assert!(html.contains("<td class=\"hl\">Tom &amp; Jerry &lt;3</td>"));
    }

    #[test]
    fn test_bar_chart_shape() {
        let chart = bar_chart(vec!["TV".to_string()], vec![json!(3)], "Count", true);
        assert_eq!(chart["type"], "bar");
        assert_eq!(chart["options"]["indexAxis"], "y");
        assert_eq!(chart["data"]["datasets"][0]["data"][0], 3);
    }
}
