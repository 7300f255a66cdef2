use std::collections::BTreeSet;

use chrono::{Month, NaiveTime};
use tracing::debug;

use crate::config::{SundialConfig, SundialType};
use crate::sink::{Color, DrawingRequest, PointMarker, Polyline, TextAnchor, TextLabel};
use crate::types::{on_the_hour, Classification, PlanePoint, SeasonBucket};

const LABEL_OFFSET: f64 = 3.0;

pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("Month {}", month))
}

pub fn is_winter_side_month(month: u32, config: &SundialConfig) -> bool {
    config.solstice_summer.month < month && month <= config.solstice_winter.month
}

fn hour_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn endpoint_label_position(point: PlanePoint, origin: PlanePoint) -> PlanePoint {
    let dy = if point.y < origin.y {
        -2.0 * LABEL_OFFSET
    } else {
        -LABEL_OFFSET
    };
    point.offset(-LABEL_OFFSET, dy)
}

struct Assembly<'a> {
    config: &'a SundialConfig,
    origin: PlanePoint,
    requests: Vec<DrawingRequest>,
}

impl<'a> Assembly<'a> {
    fn line(&mut self, polyline: Polyline) {
        self.requests.push(DrawingRequest::Polyline(polyline));
    }

    fn decorate_endpoints(&mut self, time: NaiveTime, first: PlanePoint, last: PlanePoint, color: Color) {
        for point in [first, last] {
            self.requests.push(DrawingRequest::Label(TextLabel::new(
                endpoint_label_position(point, self.origin),
                hour_label(time),
                TextAnchor::End,
            )));
            self.requests.push(DrawingRequest::Marker(PointMarker {
                position: point,
                color,
                filled: false,
            }));
        }
    }

    fn months(&mut self, classified: &Classification) {
        for (&month, points) in &classified.month_markers {
            let Some(&first) = points.first() else {
                continue;
            };
            let (color, anchor, offset) = if is_winter_side_month(month, self.config) {
                if !self.config.sundial_type.shows_winter_side() {
                    continue;
                }
                (Color::BLACK, TextAnchor::End, -LABEL_OFFSET)
            } else {
                if !self.config.sundial_type.shows_summer_side() {
                    continue;
                }
                (Color::RED, TextAnchor::Start, LABEL_OFFSET)
            };

            self.line(Polyline::new(points.clone(), color).labeled(format!("Month {}", month)));
            self.requests.push(DrawingRequest::Label(TextLabel::new(
                first.offset(offset, 0.0),
                month_name(month),
                anchor,
            )));
            let dots = classified.month_dots.get(&month).map(Vec::as_slice).unwrap_or(&[]);
            for &dot in dots {
                self.requests.push(DrawingRequest::Marker(PointMarker {
                    position: dot,
                    color,
                    filled: true,
                }));
            }
        }
    }

    fn summer_hours(&mut self, classified: &Classification) {
        let times: BTreeSet<NaiveTime> = classified
            .bucket_times(SeasonBucket::EarlyHalf)
            .chain(classified.bucket_times(SeasonBucket::LateHalf))
            .collect();

        for time in times {
            let early = classified
                .curve(SeasonBucket::EarlyHalf, time)
                .filter(|c| !c.is_empty());
            let late = classified
                .curve(SeasonBucket::LateHalf, time)
                .filter(|c| !c.is_empty());
            let full_hour = on_the_hour(time);
            let color = if full_hour { Color::RED } else { Color::LIGHT_RED };
            let name = time.to_string();

            if let Some(points) = early {
                self.line(Polyline::new(points.to_vec(), color).labeled(name.clone()));
            }
            if let Some(points) = late {
                self.line(Polyline::new(points.to_vec(), color).labeled(name.clone()));
            }
            if let (Some(early), Some(late)) = (early, late) {
                self.line(Polyline::new(vec![late[late.len() - 1], early[0]], color).labeled(name));
            }

            if full_hour {
                let start = late.or(early).map(|c| c[0]);
                let end = early.or(late).map(|c| c[c.len() - 1]);
                if let (Some(start), Some(end)) = (start, end) {
                    self.decorate_endpoints(time, start, end, color);
                }
            }
        }
    }

    fn winter_hours(&mut self, classified: &Classification) {
        // Both halves on one sheet share the labels drawn by the summer side.
        let labeled = self.config.sundial_type != SundialType::Both;
        for time in classified.bucket_times(SeasonBucket::WinterHalf) {
            let Some(points) = classified.curve(SeasonBucket::WinterHalf, time) else {
                continue;
            };
            let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
                continue;
            };
            let full_hour = on_the_hour(time);
            let color = if full_hour { Color::BLACK } else { Color::LIGHT_GREY };
            self.line(Polyline::new(points.to_vec(), color).labeled(time.to_string()));
            if labeled && full_hour {
                self.decorate_endpoints(time, first, last, color);
            }
        }
    }
}

pub fn assemble(classified: &Classification, config: &SundialConfig) -> Vec<DrawingRequest> {
    let mut assembly = Assembly {
        config,
        origin: config.origin(),
        requests: Vec::new(),
    };
    assembly.months(classified);
    if config.sundial_type.shows_summer_side() {
        assembly.summer_hours(classified);
    }
    if config.sundial_type.shows_winter_side() {
        assembly.winter_hours(classified);
    }
    debug!("assembled {} drawing requests", assembly.requests.len());
    assembly.requests
}
