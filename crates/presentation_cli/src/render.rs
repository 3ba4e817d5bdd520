//! Text rendering for prediction reports and simulation batches

use std::fmt::Write as _;

use application::PredictionReport;
use domain::{Condition, SimulatedSample, SimulationBatch};

/// Width of the probability bar in characters
const BAR_WIDTH: usize = 40;

/// A `#` bar proportional to `percent` within [`BAR_WIDTH`]
fn probability_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    "#".repeat(filled)
}

/// Render a prediction report as a multi-line block
#[must_use]
pub fn render_report(report: &PredictionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", report.glyph.symbol(), report.headline);
    if report.condition != "Unknown" {
        let _ = writeln!(out, "Condition: {}", report.condition);
    }
    if !report.probabilities.is_empty() {
        let _ = writeln!(out);
        let width = report
            .probabilities
            .iter()
            .map(|row| row.label.len())
            .max()
            .unwrap_or(0);
        for row in &report.probabilities {
            let _ = writeln!(
                out,
                "  {:<width$}  {:>3}% {}",
                row.label,
                row.percent,
                probability_bar(row.percent),
            );
        }
    }
    out
}

/// Render a simulation batch as an aligned table
#[must_use]
pub fn render_batch(batch: &SimulationBatch) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:>8}  {:>8}  {:>10}  {:>8}  {}",
        "#", "Temp °C", "Prcp mm", "Wspd km/h", "Pres hPa", "Condition"
    );
    for (index, sample) in batch.simulations.iter().enumerate() {
        let condition = Condition::from_prediction(&sample.outcome.prediction);
        let _ = writeln!(
            out,
            "{:>3}  {:>8.1}  {:>8.1}  {:>10.1}  {:>8.1}  {}",
            index,
            sample.features.temp,
            sample.features.prcp,
            sample.features.wspd,
            sample.features.pres,
            condition.label(),
        );
    }
    out
}

/// Render one scenario in detail, features first, then the report block
#[must_use]
pub fn render_sample(index: usize, sample: &SimulatedSample) -> String {
    let f = &sample.features;
    let mut out = String::new();
    let _ = writeln!(out, "Scenario {index}");
    let _ = writeln!(out, "  Temperature:   {:.1} °C", f.temp);
    let _ = writeln!(out, "  Dew point:     {:.1} °C", f.dwpt);
    let _ = writeln!(out, "  Humidity:      {:.1} %", f.rhum);
    let _ = writeln!(out, "  Precipitation: {:.1} mm", f.prcp);
    let _ = writeln!(out, "  Snowfall:      {:.1} mm", f.snow);
    let _ = writeln!(out, "  Wind:          {:.1} km/h at {:.0}°", f.wspd, f.wdir);
    let _ = writeln!(out, "  Gusts:         {:.1} km/h", f.wpgt);
    let _ = writeln!(out, "  Pressure:      {:.1} hPa", f.pres);
    let _ = writeln!(out, "  Clock:         hour {}, day {}", f.hour, f.day_of_week);
    let _ = writeln!(out);
    out.push_str(&render_report(&PredictionReport::from_outcome(
        &sample.outcome,
    )));
    out
}

/// Render the condition code table
#[must_use]
pub fn render_conditions() -> String {
    let mut out = String::new();
    for code in 0..Condition::CODE_COUNT {
        let _ = writeln!(out, "{code:>3}  {}", Condition::from_code(code).label());
    }
    out
}
