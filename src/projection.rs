use crate::config::BoxParams;
use crate::types::PlanePoint;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxWall {
    Near,
    Left,
    Far,
}

impl BoxWall {
    /// Corrections are applied in this order, each one overriding the
    /// running point when its trigger holds. A point near a corner can
    /// trigger more than one; the last trigger wins. There is no wall on
    /// the larger-x edge, where the gnomon template sits.
    pub const UNFOLD_ORDER: [BoxWall; 3] = [BoxWall::Near, BoxWall::Left, BoxWall::Far];

    fn triggers(&self, point: PlanePoint, origin: PlanePoint, flat_size: f64) -> bool {
        match self {
            BoxWall::Near => point.y < origin.y - flat_size,
            BoxWall::Left => point.x < origin.x - flat_size,
            BoxWall::Far => point.y > origin.y + flat_size,
        }
    }

    fn unfold(
        &self,
        length: f64,
        el_rad: f64,
        az_rad: f64,
        origin: PlanePoint,
        flat_size: f64,
    ) -> PlanePoint {
        match self {
            BoxWall::Near | BoxWall::Far => {
                let x_out = flat_size / az_rad.tan();
                let d2 = (x_out * x_out + flat_size * flat_size).sqrt();
                let y_out = length - el_rad.tan() * d2;
                if *self == BoxWall::Near {
                    PlanePoint::new(origin.x - x_out, origin.y - flat_size - y_out)
                } else {
                    PlanePoint::new(origin.x + x_out, origin.y + flat_size + y_out)
                }
            }
            BoxWall::Left => {
                let y_out = az_rad.tan() * flat_size;
                let d2 = (y_out * y_out + flat_size * flat_size).sqrt();
                let x_out = length - el_rad.tan() * d2;
                PlanePoint::new(origin.x - flat_size - x_out, origin.y - y_out)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub flat: PlanePoint,
    pub point: PlanePoint,
    pub wall: Option<BoxWall>,
}

impl Projection {
    pub fn on_flat_face(&self) -> bool {
        self.wall.is_none()
    }
}

pub fn project_flat(length: f64, elevation_deg: f64, azimuth_deg: f64, origin: PlanePoint) -> PlanePoint {
    let el_rad = deg_to_rad(elevation_deg);
    let az_rad = deg_to_rad(azimuth_deg);
    let d = length / el_rad.tan();
    PlanePoint::new(origin.x + d * az_rad.cos(), origin.y + d * az_rad.sin())
}

pub fn project_detailed(
    length: f64,
    elevation_deg: f64,
    azimuth_deg: f64,
    origin: PlanePoint,
    box_params: Option<BoxParams>,
) -> Projection {
    let flat = project_flat(length, elevation_deg, azimuth_deg, origin);
    let mut projection = Projection {
        flat,
        point: flat,
        wall: None,
    };
    let Some(params) = box_params else {
        return projection;
    };

    let el_rad = deg_to_rad(elevation_deg);
    let az_rad = deg_to_rad(azimuth_deg);
    let flat_size = params.flat_size(length);
    for wall in BoxWall::UNFOLD_ORDER {
        if wall.triggers(projection.point, origin, flat_size) {
            projection.point = wall.unfold(length, el_rad, az_rad, origin, flat_size);
            projection.wall = Some(wall);
        }
    }
    projection
}

pub fn project(
    length: f64,
    elevation_deg: f64,
    azimuth_deg: f64,
    origin: PlanePoint,
    box_params: Option<BoxParams>,
) -> PlanePoint {
    project_detailed(length, elevation_deg, azimuth_deg, origin, box_params).point
}

pub fn within_bounds(point: PlanePoint, origin: PlanePoint, bounding_half_size: f64) -> bool {
    (point.x - origin.x).abs() <= bounding_half_size && (point.y - origin.y).abs() <= bounding_half_size
}
