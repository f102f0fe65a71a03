///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt::{self, Display};

use druid::{Affine, Data, Point, Rect};

/// Distance in pixels between the viewer and the plane of a tile.
pub const DEFAULT_PERSPECTIVE: f64 = 600.0;

/// Sum of the front and back face angles of a tile.
pub const HALF_TURN: f64 = 180.0;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FaceTransform
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Perspective rotation of one tile face about its horizontal centre line.
///
/// Displays as `perspective(600px) rotateX(90deg)`. Positive angles tip the
/// bottom edge toward the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Data)]
pub struct FaceTransform {
    pub perspective: f64,
    pub rotate_x: f64,
}

impl FaceTransform {
    pub fn new(perspective: f64, rotate_x: f64) -> Self {
        Self { perspective, rotate_x }
    }

    /// Front face for the interpolated value `value`.
    pub fn front(value: f64, perspective: f64) -> Self {
        Self::new(perspective, value)
    }

    /// Back face for the interpolated value `value`. Always half a turn from the front.
    pub fn back(value: f64, perspective: f64) -> Self {
        Self::new(perspective, HALF_TURN - value)
    }

    /// Whether the face points at the viewer. Faces turned by a quarter turn or
    /// more show their reverse side and are not drawn.
    pub fn is_facing_viewer(&self) -> bool {
        self.rotate_x.to_radians().cos() > 1e-9
    }

    /// Projects `point` of a face centred on `center` onto the screen.
    pub fn project(&self, point: Point, center: Point) -> Point {
        let (sin, cos) = self.rotate_x.to_radians().sin_cos();
        let offset = point - center;
        let depth = offset.y * sin;
        let factor = self.depth_factor(depth);
        Point::new(
            center.x + offset.x * factor,
            center.y + offset.y * cos * factor,
        )
    }

    /// Screen corners of `rect` in the order top-left, top-right, bottom-right, bottom-left.
    pub fn quad(&self, rect: Rect) -> [Point; 4] {
        let center = rect.center();
        [
            self.project(Point::new(rect.x0, rect.y0), center),
            self.project(Point::new(rect.x1, rect.y0), center),
            self.project(Point::new(rect.x1, rect.y1), center),
            self.project(Point::new(rect.x0, rect.y1), center),
        ]
    }

    /// Affine stand-in for the projection, used for content that cannot be
    /// drawn as a polygon. Maps the top and bottom edges of `rect` onto the
    /// projected ones and keeps the width.
    pub fn to_affine(&self, rect: Rect) -> Affine {
        let center = rect.center();
        let height = rect.height();
        if height <= 0.0 {
            return Affine::IDENTITY;
        }
        let top = self.project(Point::new(center.x, rect.y0), center).y;
        let bottom = self.project(Point::new(center.x, rect.y1), center).y;
        let scale_y = (bottom - top) / height;
        let mid_y = (top + bottom) / 2.0;

        Affine::translate((center.x, mid_y))
            * Affine::scale_non_uniform(1.0, scale_y)
            * Affine::translate((-center.x, -center.y))
    }

    fn depth_factor(&self, depth: f64) -> f64 {
        if self.perspective <= 0.0 || !self.perspective.is_finite() {
            return 1.0;
        }
        let distance = (self.perspective - depth).max(f64::EPSILON);
        self.perspective / distance
    }
}

impl Display for FaceTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "perspective({}px) rotateX({}deg)", self.perspective, self.rotate_x)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// TileTransforms
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Front and back face transforms of one tile for a single interpolated value.
#[derive(Clone, Copy, Debug, PartialEq, Data)]
pub struct TileTransforms {
    pub front: FaceTransform,
    pub back: FaceTransform,
}

impl TileTransforms {
    pub fn new(value: f64, perspective: f64) -> Self {
        Self {
            front: FaceTransform::front(value, perspective),
            back: FaceTransform::back(value, perspective),
        }
    }

    /// The face to draw, if any. At exactly a quarter turn both faces are edge-on.
    pub fn visible_face(&self) -> Option<Face> {
        if self.front.is_facing_viewer() {
            Some(Face::Front)
        } else if self.back.is_facing_viewer() {
            Some(Face::Back)
        } else {
            None
        }
    }

    pub fn get(&self, face: Face) -> &FaceTransform {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Data)]
pub enum Face {
    Front,
    Back,
}
