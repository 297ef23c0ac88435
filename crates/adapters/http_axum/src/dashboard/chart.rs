//! Inline SVG line chart of the rolling buffer.
//!
//! Two series share one y axis: temperature in red and humidity in blue.
//! Points are spread evenly across the x axis and labelled with the
//! wall-clock label of each sample.

use climadash_domain::history::Sample;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const LEFT: f64 = 50.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 40.0;
const BOTTOM: f64 = 70.0;
const Y_TICKS: u32 = 5;

pub const TEMPERATURE_SERIES: &str = "Temperature (°C)";
pub const HUMIDITY_SERIES: &str = "Humidity (%)";
pub const X_AXIS_TITLE: &str = "Time (s)";
const TEMPERATURE_COLOR: &str = "red";
const HUMIDITY_COLOR: &str = "blue";

/// Vertical range covering both series with some headroom.
fn value_range(samples: &[Sample]) -> (f64, f64) {
    let values = samples
        .iter()
        .flat_map(|sample| [sample.temperature, sample.humidity]);
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 100.0);
    }
    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad, max + pad)
}

fn position(index: usize) -> f64 {
    u32::try_from(index).map_or(f64::MAX, f64::from)
}

struct Plot {
    min: f64,
    max: f64,
    count: usize,
}

impl Plot {
    fn x(&self, index: usize) -> f64 {
        let width = WIDTH - LEFT - RIGHT;
        if self.count <= 1 {
            return LEFT;
        }
        LEFT + width * position(index) / position(self.count - 1)
    }

    fn y(&self, value: f64) -> f64 {
        let height = HEIGHT - TOP - BOTTOM;
        TOP + height * (self.max - value) / (self.max - self.min)
    }

    fn polyline(&self, values: impl Iterator<Item = f64>, color: &str) -> String {
        let points = values
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", self.x(i), self.y(v)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            r#"<polyline class="series" fill="none" stroke="{color}" stroke-width="2" points="{points}"/>"#
        )
    }
}

/// Render the chart as a standalone `<svg>` element.
#[must_use]
pub fn render(samples: &[Sample]) -> String {
    let (min, max) = value_range(samples);
    let plot = Plot {
        min,
        max,
        count: samples.len(),
    };
    let axis_bottom = HEIGHT - BOTTOM;
    let axis_right = WIDTH - RIGHT;

    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="{TEMPERATURE_SERIES} and {HUMIDITY_SERIES} over time">"#
    );
    svg.push_str(&format!(
        r#"<rect x="{LEFT}" y="{TOP}" width="12" height="4" fill="{TEMPERATURE_COLOR}" transform="translate(0,-22)"/><text x="{}" y="{}" font-size="12">{TEMPERATURE_SERIES}</text>"#,
        LEFT + 16.0,
        TOP - 14.0,
    ));
    svg.push_str(&format!(
        r#"<rect x="{}" y="{TOP}" width="12" height="4" fill="{HUMIDITY_COLOR}" transform="translate(0,-22)"/><text x="{}" y="{}" font-size="12">{HUMIDITY_SERIES}</text>"#,
        LEFT + 160.0,
        LEFT + 176.0,
        TOP - 14.0,
    ));
    svg.push_str(&format!(
        r##"<line x1="{LEFT}" y1="{TOP}" x2="{LEFT}" y2="{axis_bottom}" stroke="#444"/><line x1="{LEFT}" y1="{axis_bottom}" x2="{axis_right}" y2="{axis_bottom}" stroke="#444"/>"##
    ));

    for tick in 0..=Y_TICKS {
        let value = min + (max - min) * f64::from(tick) / f64::from(Y_TICKS);
        let y = plot.y(value);
        svg.push_str(&format!(
            r##"<line x1="{LEFT}" y1="{y:.1}" x2="{axis_right}" y2="{y:.1}" stroke="#ddd"/><text x="{}" y="{:.1}" font-size="10" text-anchor="end">{value:.1}</text>"##,
            LEFT - 4.0,
            y + 3.0,
        ));
    }

    for (i, sample) in samples.iter().enumerate() {
        let x = plot.x(i);
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{}" font-size="9" text-anchor="end" transform="rotate(-45 {x:.1} {})">{}</text>"#,
            axis_bottom + 12.0,
            axis_bottom + 12.0,
            sample.label,
        ));
    }

    if !samples.is_empty() {
        svg.push_str(&plot.polyline(
            samples.iter().map(|s| s.temperature),
            TEMPERATURE_COLOR,
        ));
        svg.push_str(&plot.polyline(samples.iter().map(|s| s.humidity), HUMIDITY_COLOR));
    }

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="12" text-anchor="middle">{X_AXIS_TITLE}</text>"#,
        LEFT + (WIDTH - LEFT - RIGHT) / 2.0,
        HEIGHT - 6.0,
    ));
    svg.push_str("</svg>");
    svg
}
