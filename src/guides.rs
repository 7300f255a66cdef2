use std::f64::consts::PI;

use crate::config::SundialConfig;
use crate::sink::{Color, DrawingRequest, Polyline, TextAnchor, TextLabel};
use crate::types::PlanePoint;

fn line(points: &[(f64, f64)], color: Color) -> Polyline {
    Polyline::new(points.iter().map(|&p| PlanePoint::from(p)).collect(), color)
}

fn text(x: f64, y: f64, content: &str, anchor: TextAnchor) -> DrawingRequest {
    DrawingRequest::Label(TextLabel::new(PlanePoint::new(x, y), content, anchor))
}

pub fn layout_guides(config: &SundialConfig, table_label: &str) -> Vec<DrawingRequest> {
    let x = config.offset_x;
    let y = config.offset_y;
    let l = config.length;
    let color = Color::BLACK;

    // gnomon triangle: legs of length l at 45°, tabs folded at 15°
    let d = l * (PI / 4.0).sin();
    let y_15 = l * (PI / 12.0).sin();
    let x_15 = l * (PI / 12.0).cos();
    let hgt = (3.0 * d * d).sqrt();

    let mut out = vec![
        DrawingRequest::Polyline(line(&[(x, y), (x, y + l)], Color::GREY).labeled("Reference length")),
        text(x + 1.0, y + l, "Stick height reference", TextAnchor::Start),
        text(x + 1.0, y + l + 5.0, table_label, TextAnchor::Start),
        DrawingRequest::Polyline(line(&[(x + d, y + d), (x, y)], color).labeled("Places of triangle 1")),
        DrawingRequest::Polyline(
            line(&[(x, y), (x + d, y - d)], color)
                .labeled("Places of triangle 2")
                .dashed(),
        ),
        DrawingRequest::Polyline(line(&[(x + d, y + d), (x + d, y - d), (x + d + hgt, y)], color)),
        DrawingRequest::Polyline(line(&[(x + d + hgt, y), (x + d, y + d)], color).dashed()),
        DrawingRequest::Polyline(
            line(
                &[(x + d, y - d), (x + d + x_15, y - d - y_15), (x + d + hgt, y)],
                color,
            )
            .dashed(),
        ),
    ];

    let note_x = x + d + x_15 - 3.0;
    let note_y = y - d - y_15;
    out.push(text(note_x, note_y - 7.0, "Cut on dashed lines,", TextAnchor::End));
    out.push(text(note_x, note_y - 4.0, "Bend on solid lines,", TextAnchor::End));
    out.push(text(note_x, note_y - 1.0, "tape to numbers", TextAnchor::End));
    out.push(text(x + d / 2.0, y - d / 2.0 + 3.0, "1", TextAnchor::Start));
    out.push(text(x + d + x_15 / 2.0, y - d - y_15 / 2.0 + 3.0, "1", TextAnchor::Start));
    out.push(text(x + d / 2.0, y - d / 2.0 - 2.0, "2", TextAnchor::End));
    out.push(text(
        x + d + x_15 + y_15 / 2.0 - 1.0,
        y - d - y_15 + x_15 / 2.0,
        "2",
        TextAnchor::End,
    ));

    if config.box_mode {
        let b = config.bounding_box;
        let flat = b - l;
        let right = x + d + x_15 + y_15;
        out.push(DrawingRequest::Polyline(line(
            &[(right, y - flat), (x - flat, y - flat), (x - flat, y + flat), (right, y + flat)],
            color,
        )));
        out.push(DrawingRequest::Polyline(line(&[(x - flat, y - flat), (x - b, y - flat)], color).dashed()));
        out.push(text(x - b, y - flat + 5.0, "3", TextAnchor::Start));
        out.push(DrawingRequest::Polyline(line(&[(x - flat, y + flat), (x - b, y + flat)], color).dashed()));
        out.push(text(x - b, y + flat - 2.0, "4", TextAnchor::Start));
        out.push(DrawingRequest::Polyline(line(&[(x - flat, y - flat), (x - flat, y - b)], color).dashed()));
        out.push(text(x - flat + 2.0, y - b + 3.0, "3", TextAnchor::Start));
        out.push(DrawingRequest::Polyline(line(&[(x - flat, y + flat), (x - flat, y + b)], color).dashed()));
        out.push(text(x - flat + 2.0, y + b, "4", TextAnchor::Start));
    }
    out
}
