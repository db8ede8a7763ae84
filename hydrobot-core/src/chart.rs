//! Two-panel progress chart: water per day on top, calories per day
//! below. Each panel carries a title, its unit on the y axis, dates on
//! the x axis and a legend that includes the dashed goal line. Drawn
//! with plotters into an RGB buffer and encoded as PNG with `image`.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::sync::OnceLock;

use chrono::{Days, NaiveDate};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{register_font, FontStyle};

use hydrobot_common::models::UserRecord;
use crate::Error;
use crate::utils::time::days_between;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 800;

pub const GOAL: RGBColor = RGBColor(220, 30, 30);
pub const WATER: RGBColor = RGBColor(30, 90, 220);
pub const CALORIES: RGBColor = RGBColor(30, 150, 60);

const FONT_FAMILY: &str = "sans-serif";
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const FILL_ALPHA: f64 = 0.3;
const LINE_WIDTH: u32 = 3;
const GOAL_WIDTH: u32 = 2;
const MARKER_RADIUS: i32 = 6;
const MAX_DATE_LABELS: usize = 12;

struct Panel<'a> {
    title: &'a str,
    unit: &'a str,
    series_label: &'a str,
    series: &'a BTreeMap<NaiveDate, f64>,
    goal: f64,
    color: RGBColor,
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Registers the bundled font with plotters once per process.
fn ensure_font() -> Result<(), Error> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok());
    if ok {
        Ok(())
    } else {
        Err(Error::Render("could not load the chart font".into()))
    }
}

/// First and last day present in either history.
fn date_span(
    water: &BTreeMap<NaiveDate, f64>,
    calories: &BTreeMap<NaiveDate, f64>,
) -> Option<(NaiveDate, NaiveDate)> {
    let first = water.keys().next().into_iter().chain(calories.keys().next()).min()?;
    let last = water.keys().next_back().into_iter().chain(calories.keys().next_back()).max()?;
    Some((*first, *last))
}

/// Fails with `Error::Render` if both histories are empty.
pub fn render_progress_chart(record: &UserRecord) -> Result<Vec<u8>, Error> {
    ensure_font()?;

    let progress = &record.progress;
    let (first, last) = date_span(&progress.water_history, &progress.calories_history)
        .ok_or_else(|| Error::Render("no history to plot".into()))?;

    let panels = [
        Panel {
            title: "Water intake",
            unit: "ml",
            series_label: "Water drunk",
            series: &progress.water_history,
            goal: record.profile.water_goal,
            color: WATER,
        },
        Panel {
            title: "Calorie intake",
            unit: "kcal",
            series_label: "Calories eaten",
            series: &progress.calories_history,
            goal: record.profile.calorie_goal,
            color: CALORIES,
        },
    ];

    let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        for (area, panel) in root.split_evenly((2, 1)).iter().zip(&panels) {
            draw_panel(area, panel, first, last)?;
        }
        root.present().map_err(render_err)?;
    }

    let img = RgbImage::from_raw(WIDTH, HEIGHT, buf)
        .ok_or_else(|| Error::Render("chart buffer has the wrong size".into()))?;
    let mut bytes: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Render(format!("PNG encoding failed: {e}")))?;
    Ok(bytes)
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: &Panel<'_>,
    first: NaiveDate,
    last: NaiveDate,
) -> Result<(), Error> {
    let span = days_between(first, last) as i32;
    let max_value = panel.series.values().copied().fold(panel.goal, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, (FONT_FAMILY, 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(-1..span + 1, 0f64..y_max)
        .map_err(render_err)?;

    // x is a day offset from `first`; the padding days stay unlabeled
    let date_label = |offset: &i32| -> String {
        if !(0..=span).contains(offset) {
            return String::new();
        }
        first
            .checked_add_days(Days::new(*offset as u64))
            .map(|d| d.format("%d.%m").to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_labels(((span + 3) as usize).min(MAX_DATE_LABELS))
        .x_label_formatter(&date_label)
        .x_desc("Date")
        .y_desc(panel.unit)
        .label_style((FONT_FAMILY, 16))
        .axis_desc_style((FONT_FAMILY, 18))
        .draw()
        .map_err(render_err)?;

    let points: Vec<(i32, f64)> = panel
        .series
        .iter()
        .map(|(day, value)| (days_between(first, *day) as i32, *value))
        .collect();

    if !points.is_empty() {
        let color = panel.color;
        chart
            .draw_series(
                AreaSeries::new(points.iter().copied(), 0.0, color.mix(FILL_ALPHA))
                    .border_style(color.stroke_width(LINE_WIDTH)),
            )
            .map_err(render_err)?
            .label(panel.series_label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, MARKER_RADIUS, color.filled())))
            .map_err(render_err)?;
    }

    chart
        .draw_series(DashedLineSeries::new(
            vec![(-1, panel.goal), (span + 1, panel.goal)],
            12,
            8,
            GOAL.stroke_width(GOAL_WIDTH),
        ))
        .map_err(render_err)?
        .label(format!("Goal ({:.0} {})", panel.goal, panel.unit))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GOAL.stroke_width(GOAL_WIDTH)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT_FAMILY, 16))
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}
