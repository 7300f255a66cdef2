use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SundialError};
use crate::types::PlanePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SundialType {
    Both,
    SummerToWinterOnly,
    WinterToSummerOnly,
}

impl Default for SundialType {
    fn default() -> Self {
        SundialType::Both
    }
}

impl SundialType {
    pub fn shows_summer_side(&self) -> bool {
        *self != SundialType::SummerToWinterOnly
    }

    pub fn shows_winter_side(&self) -> bool {
        *self != SundialType::WinterToSummerOnly
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn in_year(&self, year: i32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or(SundialError::InvalidSolstice {
            year,
            month: self.month,
            day: self.day,
        })
    }
}

impl FromStr for MonthDay {
    type Err = SundialError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SundialError::InvalidMonthDay(s.to_string());
        let (m, d) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        let day: u32 = d.parse().map_err(|_| invalid())?;
        // 2000 is a leap year, so 02-29 passes here
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(invalid());
        }
        Ok(Self { month, day })
    }
}

impl TryFrom<String> for MonthDay {
    type Error = SundialError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SundialConfig {
    pub length: f64,
    pub box_mode: bool,
    pub day_start: u32,
    pub day_end: u32,
    pub sundial_type: SundialType,
    pub solstice_summer: MonthDay,
    pub solstice_winter: MonthDay,
    pub offset_x: f64,
    pub offset_y: f64,
    pub bounding_box: f64,
    pub reference_year: Option<i32>,
    pub guides: bool,
}

impl Default for SundialConfig {
    fn default() -> Self {
        Self {
            length: 27.0,
            box_mode: false,
            day_start: 6,
            day_end: 18,
            sundial_type: SundialType::Both,
            solstice_summer: MonthDay::new(6, 21),
            solstice_winter: MonthDay::new(12, 21),
            offset_x: 150.0,
            offset_y: 150.0,
            bounding_box: 130.0,
            reference_year: None,
            guides: true,
        }
    }
}

impl SundialConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: SundialConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SundialError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.length > 0.0) {
            return Err(SundialError::InvalidConfig(format!(
                "length must be > 0 (got {})",
                self.length
            )));
        }
        if !(self.bounding_box > 0.0) {
            return Err(SundialError::InvalidConfig(format!(
                "bounding_box must be > 0 (got {})",
                self.bounding_box
            )));
        }
        if self.day_start > self.day_end || self.day_end > 23 {
            return Err(SundialError::InvalidConfig(format!(
                "day window {}..{} must satisfy day_start <= day_end <= 23",
                self.day_start, self.day_end
            )));
        }
        if self.solstice_summer >= self.solstice_winter {
            return Err(SundialError::InvalidConfig(format!(
                "summer solstice {} must precede winter solstice {}",
                self.solstice_summer, self.solstice_winter
            )));
        }
        Ok(())
    }

    pub fn origin(&self) -> PlanePoint {
        PlanePoint::new(self.offset_x, self.offset_y)
    }

    pub fn box_params(&self) -> Option<BoxParams> {
        self.box_mode.then(|| BoxParams {
            bounding_half_size: self.bounding_box,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxParams {
    pub bounding_half_size: f64,
}

impl BoxParams {
    pub fn flat_size(&self, length: f64) -> f64 {
        self.bounding_half_size - length
    }
}
