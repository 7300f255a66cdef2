pub mod assembler;
pub mod classifier;
pub mod config;
pub mod dial;
pub mod error;
pub mod guides;
pub mod input;
pub mod projection;
pub mod sink;
pub mod svg_sink;
pub mod types;

pub use assembler::{assemble, is_winter_side_month, month_name};

pub use classifier::{
    classify, in_day_window, parse_reading, parse_row_date, resolve_reference_year, season_bucket,
    ReadingSkip,
};

pub use config::{BoxParams, MonthDay, SundialConfig, SundialType};

pub use dial::{layout_dial, DialLayout};

pub use error::{Result, SundialError};

pub use guides::layout_guides;

pub use input::{parse_sample_table, parse_time_header, read_sample_table, sniff_delimiter, AngleKind};

pub use projection::{
    deg_to_rad, project, project_detailed, project_flat, within_bounds, BoxWall, Projection,
};

pub use sink::{
    render, Color, DrawingRequest, DrawingSink, PointMarker, Polyline, RecordingSink, TextAnchor,
    TextLabel,
};

pub use svg_sink::SvgSink;

pub use types::{
    on_the_hour, AngleSample, Classification, HourCurves, HourKey, MonthDots, MonthMarkers,
    PlanePoint, RawReading, RawRow, SampleTable, SeasonBucket, SkipCounts, TimeColumn,
};
