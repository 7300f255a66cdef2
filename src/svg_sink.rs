use std::path::Path;

use svg::node::element::path::Data;
use svg::node::element::{Circle, Path as SvgPath, Text};
use svg::{Document, Node};

use crate::error::{Result, SundialError};
use crate::sink::{DrawingSink, PointMarker, Polyline, TextLabel};
use crate::types::PlanePoint;

const STROKE_WIDTH: f64 = 0.26;
const DASH: &str = "1.58749792,1.58749792";
const MARKER_RADIUS: f64 = 0.5;
const VIEW_MARGIN: f64 = 10.0;

pub struct SvgSink {
    document: Document,
    element_count: usize,
}

impl SvgSink {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        let document = Document::new()
            .set("width", format!("{}mm", width))
            .set("height", format!("{}mm", height))
            .set("xmlns:inkscape", "http://www.inkscape.org/namespaces/inkscape")
            .set("viewBox", (min_x, min_y, width, height));
        Self {
            document,
            element_count: 0,
        }
    }

    // The view is centred on the gnomon, so offsets smaller than the
    // bounding half-size still show the whole dial.
    pub fn for_dial(origin: PlanePoint, bounding_half_size: f64) -> Self {
        let reach = bounding_half_size + VIEW_MARGIN;
        let size = (2.0 * reach).max(1.0);
        Self::new(origin.x - reach, origin.y - reach, size, size)
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    fn push<T: Into<Box<dyn Node>>>(&mut self, node: T) {
        self.document.append(node);
        self.element_count += 1;
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        svg::save(path, &self.document).map_err(|source| SundialError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DrawingSink for SvgSink {
    fn polyline(&mut self, polyline: &Polyline) {
        let Some((first, rest)) = polyline.points.split_first() else {
            return;
        };
        let mut data = Data::new().move_to((first.x as f32, first.y as f32));
        for p in rest {
            data = data.line_to((p.x as f32, p.y as f32));
        }
        let mut path = SvgPath::new()
            .set("fill", "none")
            .set("stroke", polyline.color.to_string())
            .set("stroke-width", STROKE_WIDTH)
            .set("stroke-linejoin", "round")
            .set("stroke-linecap", "round")
            .set("d", data);
        if polyline.dashed {
            path = path
                .set("stroke-dasharray", DASH)
                .set("stroke-dashoffset", 0);
        }
        if let Some(label) = &polyline.label {
            path = path.set("inkscape:label", label.as_str());
        }
        self.push(path);
    }

    fn marker(&mut self, marker: &PointMarker) {
        let fill = if marker.filled {
            marker.color.to_string()
        } else {
            "none".to_string()
        };
        let circle = Circle::new()
            .set("cx", marker.position.x)
            .set("cy", marker.position.y)
            .set("r", MARKER_RADIUS)
            .set("stroke", marker.color.to_string())
            .set("stroke-width", STROKE_WIDTH)
            .set("fill", fill);
        self.push(circle);
    }

    fn label(&mut self, label: &TextLabel) {
        let text = Text::new(label.text.as_str())
            .set("x", label.position.x)
            .set("y", label.position.y)
            .set("text-anchor", label.anchor.as_str())
            .set("font-size", "3px")
            .set("font-family", "sans-serif");
        self.push(text);
    }
}
