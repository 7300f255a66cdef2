use std::fmt;

use crate::types::PlanePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREY: Color = Color::rgb(0x90, 0x90, 0x90);
    pub const LIGHT_RED: Color = Color::rgb(0xFF, 0xB0, 0xB0);
    pub const LIGHT_GREY: Color = Color::rgb(0xC0, 0xC0, 0xC0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<PlanePoint>,
    pub color: Color,
    pub label: Option<String>,
    pub dashed: bool,
}

impl Polyline {
    pub fn new(points: Vec<PlanePoint>, color: Color) -> Self {
        Self {
            points,
            color,
            label: None,
            dashed: false,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    pub position: PlanePoint,
    pub color: Color,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub position: PlanePoint,
    pub text: String,
    pub anchor: TextAnchor,
}

impl TextLabel {
    pub fn new(position: PlanePoint, text: impl Into<String>, anchor: TextAnchor) -> Self {
        Self {
            position,
            text: text.into(),
            anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawingRequest {
    Polyline(Polyline),
    Marker(PointMarker),
    Label(TextLabel),
}

pub trait DrawingSink {
    fn polyline(&mut self, polyline: &Polyline);
    fn marker(&mut self, marker: &PointMarker);
    fn label(&mut self, label: &TextLabel);
}

pub fn render<S: DrawingSink + ?Sized>(requests: &[DrawingRequest], sink: &mut S) {
    for request in requests {
        match request {
            DrawingRequest::Polyline(p) => sink.polyline(p),
            DrawingRequest::Marker(m) => sink.marker(m),
            DrawingRequest::Label(l) => sink.label(l),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub requests: Vec<DrawingRequest>,
}

impl RecordingSink {
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.requests.iter().filter_map(|r| match r {
            DrawingRequest::Polyline(p) => Some(p),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &PointMarker> {
        self.requests.iter().filter_map(|r| match r {
            DrawingRequest::Marker(m) => Some(m),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.requests.iter().filter_map(|r| match r {
            DrawingRequest::Label(l) => Some(l),
            _ => None,
        })
    }
}

impl DrawingSink for RecordingSink {
    fn polyline(&mut self, polyline: &Polyline) {
        self.requests.push(DrawingRequest::Polyline(polyline.clone()));
    }

    fn marker(&mut self, marker: &PointMarker) {
        self.requests.push(DrawingRequest::Marker(*marker));
    }

    fn label(&mut self, label: &TextLabel) {
        self.requests.push(DrawingRequest::Label(label.clone()));
    }
}
