use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(f64, f64)> for PlanePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeasonBucket {
    EarlyHalf,
    WinterHalf,
    LateHalf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourKey {
    pub bucket: SeasonBucket,
    pub time_of_day: NaiveTime,
}

impl HourKey {
    pub fn new(bucket: SeasonBucket, time_of_day: NaiveTime) -> Self {
        Self {
            bucket,
            time_of_day,
        }
    }

    pub fn on_the_hour(&self) -> bool {
        on_the_hour(self.time_of_day)
    }
}

pub fn on_the_hour(time: NaiveTime) -> bool {
    time.minute() == 0 && time.second() == 0
}

pub type HourCurves = BTreeMap<HourKey, Vec<PlanePoint>>;
pub type MonthMarkers = BTreeMap<u32, Vec<PlanePoint>>;
pub type MonthDots = BTreeMap<u32, Vec<PlanePoint>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub unparseable: usize,
    pub zero_reading: usize,
    pub out_of_bounds: usize,
    pub other_year: usize,
    pub on_solstice: usize,
    pub out_of_window: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.unparseable
            + self.zero_reading
            + self.out_of_bounds
            + self.other_year
            + self.on_solstice
            + self.out_of_window
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    pub reference_year: Option<i32>,
    pub hour_curves: HourCurves,
    pub month_markers: MonthMarkers,
    pub month_dots: MonthDots,
    pub skipped: SkipCounts,
}

impl Classification {
    pub fn curve(&self, bucket: SeasonBucket, time_of_day: NaiveTime) -> Option<&[PlanePoint]> {
        self.hour_curves
            .get(&HourKey::new(bucket, time_of_day))
            .map(Vec::as_slice)
    }

    pub fn bucket_times(&self, bucket: SeasonBucket) -> impl Iterator<Item = NaiveTime> + '_ {
        self.hour_curves
            .keys()
            .filter(move |k| k.bucket == bucket)
            .map(|k| k.time_of_day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeColumn {
    pub time_of_day: NaiveTime,
    pub azimuth_index: usize,
    pub elevation_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReading {
    pub azimuth: String,
    pub elevation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub readings: Vec<RawReading>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    pub label: String,
    pub time_columns: Vec<TimeColumn>,
    pub rows: Vec<RawRow>,
}
