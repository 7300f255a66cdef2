use chrono::NaiveTime;

use sundial_layout::assembler::*;
use sundial_layout::config::{SundialConfig, SundialType};
use sundial_layout::sink::*;
use sundial_layout::types::*;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn p(x: f64, y: f64) -> PlanePoint {
    PlanePoint::new(x, y)
}

fn config(sundial_type: SundialType) -> SundialConfig {
    SundialConfig {
        sundial_type,
        ..SundialConfig::default()
    }
}

fn record(classified: &Classification, config: &SundialConfig) -> RecordingSink {
    let mut sink = RecordingSink::default();
    render(&assemble(classified, config), &mut sink);
    sink
}

fn with_curves(curves: &[(SeasonBucket, NaiveTime, Vec<PlanePoint>)]) -> Classification {
    let mut c = Classification::default();
    for (bucket, time, points) in curves {
        c.hour_curves.insert(HourKey::new(*bucket, *time), points.clone());
    }
    c
}

// ── Months ──

#[test]
fn test_month_name() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(13), "Month 13");
}

#[test]
fn test_winter_side_months() {
    let cfg = SundialConfig::default();
    let winter: Vec<u32> = (1..=12).filter(|&m| is_winter_side_month(m, &cfg)).collect();
    assert_eq!(winter, vec![7, 8, 9, 10, 11, 12]);
}

#[test]
fn test_month_curves_sides() {
    let mut c = Classification::default();
    c.month_markers.insert(3, vec![p(100.0, 120.0), p(110.0, 125.0)]);
    c.month_dots.insert(3, vec![p(100.0, 120.0)]);
    c.month_markers.insert(8, vec![p(90.0, 140.0)]);
    c.month_dots.insert(8, vec![p(90.0, 140.0)]);

    let sink = record(&c, &SundialConfig::default());
    let lines: Vec<&Polyline> = sink.polylines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].color, Color::RED);
    assert_eq!(lines[0].points.len(), 2);
    assert_eq!(lines[0].label.as_deref(), Some("Month 3"));
    assert_eq!(lines[1].color, Color::BLACK);

    let labels: Vec<&TextLabel> = sink.labels().collect();
    assert_eq!(labels[0].text, "March");
    assert_eq!(labels[0].anchor, TextAnchor::Start);
    assert_eq!(labels[0].position, p(103.0, 120.0));
    assert_eq!(labels[1].text, "August");
    assert_eq!(labels[1].anchor, TextAnchor::End);
    assert_eq!(labels[1].position, p(87.0, 140.0));

    let markers: Vec<&PointMarker> = sink.markers().collect();
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.filled));
}

#[test]
fn test_month_side_suppressed_by_type() {
    let mut c = Classification::default();
    c.month_markers.insert(3, vec![p(100.0, 120.0)]);
    c.month_markers.insert(8, vec![p(90.0, 140.0)]);

    let summer_only = record(&c, &config(SundialType::WinterToSummerOnly));
    let texts: Vec<&str> = summer_only.labels().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["March"]);

    let winter_only = record(&c, &config(SundialType::SummerToWinterOnly));
    let texts: Vec<&str> = winter_only.labels().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["August"]);
}

// ── Early / late halves ──

#[test]
fn test_year_wrap_connector() {
    let early = vec![p(120.0, 160.0), p(118.0, 170.0)];
    let late = vec![p(125.0, 155.0), p(122.0, 158.0)];
    let c = with_curves(&[
        (SeasonBucket::EarlyHalf, t(12, 0), early.clone()),
        (SeasonBucket::LateHalf, t(12, 0), late.clone()),
    ]);
    let sink = record(&c, &SundialConfig::default());

    let lines: Vec<&Polyline> = sink.polylines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].points, early);
    assert_eq!(lines[1].points, late);
    assert_eq!(lines[2].points, vec![late[1], early[0]]);
    assert!(lines.iter().all(|l| l.color == Color::RED && !l.dashed));

    // endpoints of the combined curve: start of late half, end of early half
    let markers: Vec<PlanePoint> = sink.markers().map(|m| m.position).collect();
    assert_eq!(markers, vec![late[0], early[1]]);
    assert!(sink.markers().all(|m| !m.filled));

    let labels: Vec<&TextLabel> = sink.labels().collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.iter().all(|l| l.text == "12:00" && l.anchor == TextAnchor::End));
    assert_eq!(labels[0].position, p(122.0, 152.0));
}

#[test]
fn test_endpoint_label_raised_above_origin() {
    let c = with_curves(&[(
        SeasonBucket::EarlyHalf,
        t(9, 0),
        vec![p(200.0, 100.0), p(190.0, 160.0)],
    )]);
    let sink = record(&c, &SundialConfig::default());
    let labels: Vec<&TextLabel> = sink.labels().collect();
    assert_eq!(labels[0].position, p(197.0, 94.0));
    assert_eq!(labels[1].position, p(187.0, 157.0));
}

#[test]
fn test_single_half_has_no_connector() {
    let c = with_curves(&[(SeasonBucket::LateHalf, t(15, 0), vec![p(180.0, 150.0)])]);
    let sink = record(&c, &SundialConfig::default());
    assert_eq!(sink.polylines().count(), 1);
    assert_eq!(sink.labels().count(), 2);
}

#[test]
fn test_sub_hour_curves_undecorated() {
    let c = with_curves(&[
        (SeasonBucket::EarlyHalf, t(12, 30), vec![p(130.0, 150.0), p(131.0, 160.0)]),
        (SeasonBucket::LateHalf, t(12, 30), vec![p(132.0, 145.0)]),
        (SeasonBucket::WinterHalf, t(12, 30), vec![p(133.0, 145.0)]),
    ]);
    let sink = record(&c, &config(SundialType::WinterToSummerOnly));
    assert_eq!(sink.polylines().count(), 3);
    assert!(sink.polylines().all(|l| l.color == Color::LIGHT_RED));
    assert_eq!(sink.labels().count(), 0);
    assert_eq!(sink.markers().count(), 0);
}

// ── Winter half ──

#[test]
fn test_winter_half_unlabeled_when_both() {
    let c = with_curves(&[(
        SeasonBucket::WinterHalf,
        t(10, 0),
        vec![p(100.0, 170.0), p(105.0, 180.0)],
    )]);
    let sink = record(&c, &config(SundialType::Both));
    let lines: Vec<&Polyline> = sink.polylines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].color, Color::BLACK);
    assert_eq!(sink.labels().count(), 0);
    assert_eq!(sink.markers().count(), 0);
}

#[test]
fn test_winter_half_labeled_when_alone() {
    let c = with_curves(&[
        (SeasonBucket::WinterHalf, t(10, 0), vec![p(100.0, 170.0), p(105.0, 180.0)]),
        (SeasonBucket::WinterHalf, t(10, 15), vec![p(101.0, 170.0)]),
        (SeasonBucket::EarlyHalf, t(10, 0), vec![p(100.0, 190.0)]),
    ]);
    let sink = record(&c, &config(SundialType::SummerToWinterOnly));
    let lines: Vec<&Polyline> = sink.polylines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].color, Color::LIGHT_GREY);
    let texts: Vec<&str> = sink.labels().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["10:00", "10:00"]);
    assert_eq!(sink.markers().count(), 2);
}

#[test]
fn test_winter_half_hidden_for_winter_to_summer() {
    let c = with_curves(&[(SeasonBucket::WinterHalf, t(10, 0), vec![p(100.0, 170.0)])]);
    assert!(assemble(&c, &config(SundialType::WinterToSummerOnly)).is_empty());
}

// ── Ordering ──

#[test]
fn test_empty_classification() {
    assert!(assemble(&Classification::default(), &SundialConfig::default()).is_empty());
}

#[test]
fn test_months_before_summer_hours_before_winter_hours() {
    let mut c = with_curves(&[
        (SeasonBucket::WinterHalf, t(8, 0), vec![p(1.0, 1.0)]),
        (SeasonBucket::EarlyHalf, t(8, 0), vec![p(2.0, 2.0)]),
    ]);
    c.month_markers.insert(2, vec![p(3.0, 3.0)]);
    let requests = assemble(&c, &config(SundialType::Both));
    let firsts: Vec<PlanePoint> = requests
        .iter()
        .filter_map(|r| match r {
            DrawingRequest::Polyline(l) => Some(l.points[0]),
            _ => None,
        })
        .collect();
    assert_eq!(firsts, vec![p(3.0, 3.0), p(2.0, 2.0), p(1.0, 1.0)]);
}
