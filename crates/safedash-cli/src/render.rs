//! Text and JSON rendering of a dashboard snapshot

use safedash_core::{DashboardSnapshot, KpiSummary, MonthlyTrend, PivotCell, RiskPivot};
use safedash_model::IncidentRecord;
use unicode_width::UnicodeWidthStr;

const BAR: &str = "█";

/// Terminal columns per pivot cell
const PIVOT_CELL: usize = 10;

/// Terminal columns for the pivot's row-label column
const PIVOT_LABEL: usize = 10;

/// Render the full dashboard as terminal text
pub(crate) fn render_text(snapshot: &DashboardSnapshot<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {}년 안전 사고 분석 대시보드 ===\n",
        snapshot.criteria.selected_year
    ));
    let factories: Vec<&str> = snapshot
        .criteria
        .selected_factories
        .iter()
        .map(|f| f.label())
        .collect();
    out.push_str(&format!("공장: {}\n\n", display_list(&factories)));

    out.push_str(&render_kpis(&snapshot.kpis));
    out.push('\n');
    out.push_str(&render_trend(&snapshot.trend));
    out.push('\n');
    out.push_str(&render_pivot(&snapshot.pivot));
    out.push('\n');
    out.push_str(&render_records(&snapshot.records));

    out
}

/// Render the snapshot as pretty JSON
pub(crate) fn render_json(snapshot: &DashboardSnapshot<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

pub(crate) fn render_kpis(kpis: &KpiSummary) -> String {
    let mean = kpis
        .mean_risk
        .map_or_else(|| "정의되지 않음 (데이터 없음)".to_string(), |m| format!("{m:.1}점"));
    let top = kpis.top_type.map_or("-", |t| t.label());

    format!(
        "총 발생 건수: {}건\n평균 위험도: {}\n최다 발생 유형: {}\n",
        kpis.count, mean, top
    )
}

pub(crate) fn render_trend(trend: &MonthlyTrend) -> String {
    let mut out = String::from("--- 월별 사고 발생 추이 ---\n");
    if trend.is_empty() {
        out.push_str("데이터 없음\n");
        return out;
    }

    for point in trend.dense() {
        out.push_str(&format!(
            "{:>2}월 | {} {}\n",
            point.month,
            BAR.repeat(point.count),
            point.count
        ));
    }
    out
}

pub(crate) fn render_pivot(pivot: &RiskPivot) -> String {
    let mut out = String::from("--- 사고 유형별 위험도 분포 ---\n");
    let rows = pivot.rows();
    let columns = pivot.columns();
    if rows.is_empty() {
        out.push_str("데이터 없음\n");
        return out;
    }

    out.push_str(&pad_right("", PIVOT_LABEL));
    for factory in &columns {
        out.push_str(&pad_left(factory.label(), PIVOT_CELL));
    }
    out.push('\n');

    for kind in rows {
        out.push_str(&pad_right(kind.label(), PIVOT_LABEL));
        for &factory in &columns {
            let cell = match pivot.get(kind, factory) {
                PivotCell::Mean(mean) => format!("{mean:.1}"),
                PivotCell::NoData => "-".to_string(),
            };
            out.push_str(&pad_left(&cell, PIVOT_CELL));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn render_records(records: &[&IncidentRecord]) -> String {
    let mut out = String::from("--- 상세 데이터 로그 ---\n");
    if records.is_empty() {
        out.push_str("데이터 없음\n");
        return out;
    }

    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        pad_right("날짜", 10),
        pad_right("공장", 6),
        pad_right("유형", 8),
        pad_left("위험도", 6)
    ));
    for record in records {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            record.date(),
            pad_right(record.factory().label(), 6),
            pad_right(record.incident_type().label(), 8),
            pad_left(&record.risk_score().to_string(), 6)
        ));
    }
    out
}

/// Left-align `text` in `width` terminal columns
///
/// `format!` pads by `char` count, which misaligns double-width Hangul.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Right-align `text` in `width` terminal columns
fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(fill))
}

fn display_list(items: &[&str]) -> String {
    if items.is_empty() {
        "(선택 없음)".to_string()
    } else {
        items.join(", ")
    }
}
