use std::ops::ControlFlow;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::{debug, info};

use crate::config::SundialConfig;
use crate::error::{Result, SundialError};
use crate::projection::{self, Projection};
use crate::types::{
    on_the_hour, AngleSample, Classification, HourKey, SampleTable, SeasonBucket, SkipCounts,
    TimeColumn,
};

/// `day_end` itself is admitted only at the full hour.
pub fn in_day_window(time: NaiveTime, day_start: u32, day_end: u32) -> bool {
    let hour = time.hour();
    hour >= day_start && (hour < day_end || (hour == day_end && on_the_hour(time)))
}

/// A reading of exactly 0 marks a missing value in the source tables.
pub fn parse_reading(raw: &str) -> std::result::Result<f64, ReadingSkip> {
    let value: f64 = raw.trim().parse().map_err(|_| ReadingSkip::Unparseable)?;
    if value == 0.0 {
        return Err(ReadingSkip::Zero);
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingSkip {
    Unparseable,
    Zero,
}

pub fn parse_row_date(cell: &str) -> Result<NaiveDate> {
    NaiveDate::parse_and_remainder(cell.trim(), "%Y-%m-%d")
        .map(|(date, _tag)| date)
        .map_err(|_| SundialError::InvalidDate(cell.to_string()))
}

/// Strict comparisons: a date on either solstice falls in no bucket.
pub fn season_bucket(date: NaiveDate, summer: NaiveDate, winter: NaiveDate) -> Option<SeasonBucket> {
    if date < summer {
        Some(SeasonBucket::EarlyHalf)
    } else if date > summer && date < winter {
        Some(SeasonBucket::WinterHalf)
    } else if date > winter {
        Some(SeasonBucket::LateHalf)
    } else {
        None
    }
}

fn window_columns(table: &SampleTable, config: &SundialConfig) -> Vec<(usize, TimeColumn)> {
    table
        .time_columns
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, col)| in_day_window(col.time_of_day, config.day_start, config.day_end))
        .collect()
}

fn scan<F>(
    table: &SampleTable,
    config: &SundialConfig,
    skipped: &mut SkipCounts,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(&mut SkipCounts, AngleSample, Projection) -> ControlFlow<()>,
{
    let columns = window_columns(table, config);
    let outside = table.time_columns.len() - columns.len();
    let origin = config.origin();
    let box_params = config.box_params();

    for row in &table.rows {
        skipped.out_of_window += outside;
        let mut row_date: Option<NaiveDate> = None;
        for &(idx, col) in &columns {
            let Some(reading) = row.readings.get(idx) else {
                skipped.unparseable += 1;
                continue;
            };
            let angles = parse_reading(&reading.azimuth)
                .and_then(|az| parse_reading(&reading.elevation).map(|el| (az, el)));
            let (azimuth_deg, elevation_deg) = match angles {
                Ok(pair) => pair,
                Err(ReadingSkip::Unparseable) => {
                    skipped.unparseable += 1;
                    continue;
                }
                Err(ReadingSkip::Zero) => {
                    skipped.zero_reading += 1;
                    continue;
                }
            };

            let projection = projection::project_detailed(
                config.length,
                elevation_deg,
                azimuth_deg,
                origin,
                box_params,
            );
            if !projection::within_bounds(projection.point, origin, config.bounding_box) {
                skipped.out_of_bounds += 1;
                continue;
            }

            let date = match row_date {
                Some(date) => date,
                None => {
                    let date = parse_row_date(&row.date)?;
                    row_date = Some(date);
                    date
                }
            };
            let sample = AngleSample {
                date,
                time_of_day: col.time_of_day,
                azimuth_deg,
                elevation_deg,
            };
            if visit(&mut *skipped, sample, projection).is_break() {
                return Ok(());
            }
        }
    }
    Ok(())
}

pub fn resolve_reference_year(table: &SampleTable, config: &SundialConfig) -> Result<Option<i32>> {
    let mut year = None;
    let mut scratch = SkipCounts::default();
    scan(table, config, &mut scratch, |_, sample, _| {
        year = Some(sample.date.year());
        ControlFlow::Break(())
    })?;
    Ok(year)
}

pub fn classify(table: &SampleTable, config: &SundialConfig) -> Result<Classification> {
    let reference_year = match config.reference_year {
        Some(year) => Some(year),
        None => resolve_reference_year(table, config)?,
    };
    let mut out = Classification {
        reference_year,
        ..Classification::default()
    };
    let Some(year) = reference_year else {
        info!("no usable samples in {} rows", table.rows.len());
        return Ok(out);
    };
    let summer = config.solstice_summer.in_year(year)?;
    let winter = config.solstice_winter.in_year(year)?;
    debug!(year, %summer, %winter, "classifying samples");

    let mut accepted = 0usize;
    let mut skipped = SkipCounts::default();
    scan(table, config, &mut skipped, |skipped, sample, projection| {
        if sample.date.year() != year {
            skipped.other_year += 1;
            return ControlFlow::Continue(());
        }

        match season_bucket(sample.date, summer, winter) {
            Some(bucket) => out
                .hour_curves
                .entry(HourKey::new(bucket, sample.time_of_day))
                .or_default()
                .push(projection.point),
            None => skipped.on_solstice += 1,
        }
        accepted += 1;

        // Wall points cannot be chained into a continuous month curve.
        if sample.date.day() == 1 && projection.on_flat_face() {
            let month = sample.date.month();
            let markers = out.month_markers.entry(month).or_default();
            let first_for_month = markers.is_empty();
            markers.push(projection.point);
            if first_for_month || on_the_hour(sample.time_of_day) {
                out.month_dots.entry(month).or_default().push(projection.point);
            }
        }
        ControlFlow::Continue(())
    })?;
    out.skipped = skipped;

    debug!(
        total = skipped.total(),
        unparseable = skipped.unparseable,
        zero = skipped.zero_reading,
        out_of_bounds = skipped.out_of_bounds,
        other_year = skipped.other_year,
        on_solstice = skipped.on_solstice,
        out_of_window = skipped.out_of_window,
        "skipped samples"
    );
    info!(
        "classified {} samples into {} hour curves and {} month markers (reference year {})",
        accepted,
        out.hour_curves.len(),
        out.month_markers.len(),
        year
    );
    Ok(out)
}
