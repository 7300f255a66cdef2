use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use tracing::{debug, info, warn};

use crate::error::{Result, SundialError};
use crate::types::{RawReading, RawRow, SampleTable, TimeColumn};

const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleKind {
    Azimuth,
    Elevation,
}

pub fn parse_time_header(header: &str) -> Option<(AngleKind, NaiveTime)> {
    let (kind, time) = header.trim().split_once(' ')?;
    let kind = match kind {
        "A" => AngleKind::Azimuth,
        "E" => AngleKind::Elevation,
        _ => return None,
    };
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S").ok()?;
    Some((kind, time))
}

pub fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    DELIMITER_CANDIDATES
        .iter()
        .copied()
        .map(|d| (d, header.bytes().filter(|&b| b == d).count()))
        .filter(|&(_, count)| count > 0)
        .max_by_key(|&(_, count)| count)
        .map(|(d, _)| d)
        .unwrap_or(b',')
}

fn time_columns(headers: &csv::StringRecord) -> Vec<TimeColumn> {
    let mut azimuths: BTreeMap<NaiveTime, usize> = BTreeMap::new();
    let mut elevations: BTreeMap<NaiveTime, usize> = BTreeMap::new();
    for (idx, header) in headers.iter().enumerate().skip(1) {
        let Some((kind, time)) = parse_time_header(header) else {
            debug!("ignoring column '{}'", header);
            continue;
        };
        let columns = match kind {
            AngleKind::Azimuth => &mut azimuths,
            AngleKind::Elevation => &mut elevations,
        };
        // Last column wins for a repeated header.
        if let Some(previous) = columns.insert(time, idx) {
            warn!(
                "duplicate {:?} column for {}: using column {} over {}",
                kind, time, idx, previous
            );
        }
    }
    azimuths
        .into_iter()
        .filter_map(|(time_of_day, azimuth_index)| {
            let Some(&elevation_index) = elevations.get(&time_of_day) else {
                warn!("azimuth column for {} has no elevation column", time_of_day);
                return None;
            };
            Some(TimeColumn {
                time_of_day,
                azimuth_index,
                elevation_index,
            })
        })
        .collect()
}

pub fn parse_sample_table(text: &str) -> Result<SampleTable> {
    let delimiter = sniff_delimiter(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let label = match headers.get(0) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => return Err(SundialError::MissingDateColumn),
    };
    let time_columns = time_columns(&headers);
    if time_columns.is_empty() {
        return Err(SundialError::NoTimeColumns);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
        rows.push(RawRow {
            date: cell(0),
            readings: time_columns
                .iter()
                .map(|col| RawReading {
                    azimuth: cell(col.azimuth_index),
                    elevation: cell(col.elevation_index),
                })
                .collect(),
        });
    }

    debug!(
        delimiter = %char::from(delimiter).escape_default(),
        "read {} rows with {} time columns",
        rows.len(),
        time_columns.len()
    );
    Ok(SampleTable {
        label,
        time_columns,
        rows,
    })
}

pub fn read_sample_table(path: &Path) -> Result<SampleTable> {
    let text = fs::read_to_string(path).map_err(|source| SundialError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_sample_table(&text)?;
    info!("loaded {} ({} rows)", path.display(), table.rows.len());
    Ok(table)
}
