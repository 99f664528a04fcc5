// File: crates/duet-core/tests/common/mod.rs
// Purpose: Shared fixtures: the 34-row network/CPU baseline and a dual-axis chart built from it.
#![allow(dead_code)]

use duet_core::{Axis, Chart, ChartConfig, ChartOptions, Series};

/// (x, events, percentage); one absent pair at index 32.
pub const BASELINE: [(i64, Option<f64>, Option<f64>); 34] = [
    (1600984800000, Some(58020.0), Some(45.0)),
    (1600985700000, Some(102402.0), Some(52.0)),
    (1600986600000, Some(104920.0), Some(48.0)),
    (1600987500000, Some(94031.0), Some(55.0)),
    (1600988400000, Some(125021.0), Some(62.0)),
    (1600989300000, Some(159219.0), Some(58.0)),
    (1600990200000, Some(193082.0), Some(71.0)),
    (1600991100000, Some(162592.0), Some(65.0)),
    (1600992000000, Some(274021.0), Some(78.0)),
    (1600992900000, Some(264286.0), Some(82.0)),
    (1600993800000, Some(289210.0), Some(75.0)),
    (1600994700000, Some(256362.0), Some(68.0)),
    (1600995600000, Some(257306.0), Some(72.0)),
    (1600996500000, Some(186776.0), Some(58.0)),
    (1600997400000, Some(294020.0), Some(85.0)),
    (1600998300000, Some(385975.0), Some(92.0)),
    (1600999200000, Some(486039.0), Some(88.0)),
    (1601000100000, Some(490447.0), Some(95.0)),
    (1601001000000, Some(361845.0), Some(78.0)),
    (1601001900000, Some(339058.0), Some(72.0)),
    (1601002800000, Some(298028.0), Some(65.0)),
    (1601003400000, Some(255555.0), Some(58.0)),
    (1601003700000, Some(231902.0), Some(52.0)),
    (1601004600000, Some(224558.0), Some(48.0)),
    (1601005500000, Some(253901.0), Some(55.0)),
    (1601006400000, Some(102839.0), Some(42.0)),
    (1601007300000, Some(234943.0), Some(62.0)),
    (1601008200000, Some(204405.0), Some(58.0)),
    (1601009100000, Some(190391.0), Some(52.0)),
    (1601010000000, Some(183570.0), Some(48.0)),
    (1601010900000, Some(162592.0), Some(45.0)),
    (1601011800000, Some(148910.0), Some(38.0)),
    (1601012700000, None, None),
    (1601013600000, Some(293910.0), Some(72.0)),
];

pub const GAP_INDEX: usize = 32;

pub fn derived_series() -> Vec<Series> {
    let pick = |f: fn(&(i64, Option<f64>, Option<f64>)) -> Option<f64>| -> Vec<(i64, Option<f64>)> {
        BASELINE.iter().map(|row| (row.0, f(row))).collect()
    };
    vec![
        Series::from_pairs("Network Traffic", "events", pick(|r| r.1)),
        Series::from_pairs("Request Count", "events", pick(|r| r.1.map(|v| v * 0.8))),
        Series::from_pairs("CPU Usage", "percentage", pick(|r| r.2)),
        Series::from_pairs("Memory Usage", "percentage", pick(|r| r.2.map(|v| v * 0.9))),
    ]
}

pub fn dual_axes() -> Vec<Axis> {
    vec![
        Axis::x("time", "Time (UTC)"),
        Axis::y("events", "Events"),
        Axis::y("percentage", "Percentage (%)").opposite(),
    ]
}

pub fn dual_axis_chart_with(options: ChartOptions) -> Chart {
    Chart::new(ChartConfig { series: derived_series(), axes: dual_axes(), options }).expect("valid config")
}

pub fn dual_axis_chart() -> Chart {
    let mut options = ChartOptions::default();
    options.accessibility_label = "Dual axis line chart".to_owned();
    dual_axis_chart_with(options)
}

/// Min/max over present values, computed independently of the engine.
pub fn extent(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    values.into_iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
