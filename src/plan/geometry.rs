//! Axis-aligned rectangle geometry.
//!
//! Rooms are integer-bounded rectangles. Two rectangles are edge-adjacent
//! when a boundary of one coincides exactly with the opposite boundary of
//! the other and the shared length along that boundary is positive.
//! No tolerance is applied: bounds are rounded to integers on ingestion.

use std::fmt;

use tracing::warn;

use crate::error::GeometryError;

/// Largest accepted absolute bound. Spans then fit in 32 bits and areas in
/// `i64` with room to sum them.
pub const MAX_COORD: i64 = 1 << 24;

/// A validated rectangle with `x_min < x_max` and `y_min < y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x_min: i64,
    y_min: i64,
    x_max: i64,
    y_max: i64,
}

impl Rect {
    /// Creates a rectangle from integer bounds.
    pub fn new(x_min: i64, y_min: i64, x_max: i64, y_max: i64) -> Result<Rect, GeometryError> {
        for bound in [x_min, y_min, x_max, y_max] {
            if !(-MAX_COORD..=MAX_COORD).contains(&bound) {
                return Err(GeometryError::OutOfRange(bound as f64));
            }
        }
        if x_min >= x_max {
            return Err(GeometryError::EmptyWidth { x_min, x_max });
        }
        if y_min >= y_max {
            return Err(GeometryError::EmptyHeight { y_min, y_max });
        }
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates a rectangle from `[x_min, y_min, x_max, y_max]` plan coordinates.
    ///
    /// Each bound is rounded to the nearest integer, ties to even, before
    /// validation, so `[0, 0, 0.4, 1]` is rejected as having no width.
    pub fn from_coords(coords: &[f64]) -> Result<Rect, GeometryError> {
        if coords.len() != 4 {
            return Err(GeometryError::WrongArity(coords.len()));
        }
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if let Some(&c) = coords.iter().find(|c| c.abs() > MAX_COORD as f64) {
            return Err(GeometryError::OutOfRange(c));
        }
        let r = |c: f64| c.round_ties_even() as i64;
        Rect::new(r(coords[0]), r(coords[1]), r(coords[2]), r(coords[3]))
    }

    pub const fn x_min(&self) -> i64 {
        self.x_min
    }

    pub const fn y_min(&self) -> i64 {
        self.y_min
    }

    pub const fn x_max(&self) -> i64 {
        self.x_max
    }

    pub const fn y_max(&self) -> i64 {
        self.y_max
    }

    pub const fn width(&self) -> i64 {
        self.x_max - self.x_min
    }

    pub const fn height(&self) -> i64 {
        self.y_max - self.y_min
    }

    pub const fn area(&self) -> i64 {
        self.width() * self.height()
    }

    /// Returns true if the interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x_min >= other.x_max
            || self.x_max <= other.x_min
            || self.y_min >= other.y_max
            || self.y_max <= other.y_min)
    }

    /// Returns the bounds as `[x_min, y_min, x_max, y_max]`.
    pub const fn bounds(&self) -> [i64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}

/// The side of a room an adjacency lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Bottom,
}

/// The order in which wall completion visits the four sides.
pub const WALL_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Bottom,
];

impl Direction {
    /// Returns the lowercase side name.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Bottom => "bottom",
        }
    }

    /// Returns the side facing this one across a shared boundary.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Bottom,
            Direction::Bottom => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a second rectangle relates to a first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Contact {
    /// The second rectangle covers `ratio` of the first one's `direction` side.
    Adjacent { direction: Direction, ratio: f64 },
    /// The interiors intersect. Treated as no adjacency.
    Overlap,
    /// No shared boundary of positive length.
    Separate,
}

/// Length shared by `[a_min, a_max]` and `[b_min, b_max]` once their
/// boundaries coincide: the smallest of the two cross distances and the two
/// spans. Spans meeting only at an endpoint share nothing.
///
/// A gap between the spans is not checked, so two rooms on the same grid
/// line count as touching even when they are apart along it.
fn shared_length(a_min: i64, a_max: i64, b_min: i64, b_max: i64) -> i64 {
    (a_max - b_min)
        .abs()
        .min((a_min - b_max).abs())
        .min(a_max - a_min)
        .min(b_max - b_min)
}

/// Builds the contact for a boundary coincidence on `direction`, where the
/// shared axis of the first rectangle spans `[a_min, a_max]`.
fn side_contact(direction: Direction, a_min: i64, a_max: i64, b_min: i64, b_max: i64) -> Contact {
    let span = a_max - a_min;
    let shared = shared_length(a_min, a_max, b_min, b_max);
    if span == 0 || shared == 0 {
        return Contact::Separate;
    }
    Contact::Adjacent {
        direction,
        ratio: shared as f64 / span as f64,
    }
}

/// Classifies `rec2` relative to `rec1`.
///
/// Sides are tested in the order left, right, up, bottom; the first boundary
/// coincidence decides the result. The ratio is relative to `rec1`'s span,
/// so the relation is asymmetric.
pub(crate) fn classify(rec1: &Rect, rec2: &Rect) -> Contact {
    if rec1.overlaps(rec2) {
        return Contact::Overlap;
    }

    if rec2.x_max == rec1.x_min {
        side_contact(Direction::Left, rec1.y_min, rec1.y_max, rec2.y_min, rec2.y_max)
    } else if rec2.x_min == rec1.x_max {
        side_contact(Direction::Right, rec1.y_min, rec1.y_max, rec2.y_min, rec2.y_max)
    } else if rec2.y_min == rec1.y_max {
        side_contact(Direction::Up, rec1.x_min, rec1.x_max, rec2.x_min, rec2.x_max)
    } else if rec2.y_max == rec1.y_min {
        side_contact(Direction::Bottom, rec1.x_min, rec1.x_max, rec2.x_min, rec2.x_max)
    } else {
        Contact::Separate
    }
}

/// Returns the side of `rec1` that `rec2` touches and the fraction of that
/// side it covers, or `None` when the rectangles are not edge-adjacent.
///
/// Overlapping rectangles are logged and reported as not adjacent.
pub fn intersect_edge_ratio(rec1: &Rect, rec2: &Rect) -> Option<(Direction, f64)> {
    match classify(rec1, rec2) {
        Contact::Adjacent { direction, ratio } => Some((direction, ratio)),
        Contact::Overlap => {
            warn!(%rec1, %rec2, "rectangles overlap; treating as not adjacent");
            None
        }
        Contact::Separate => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(c: [f64; 4]) -> Rect {
        Rect::from_coords(&c).unwrap()
    }

    fn unit() -> Rect {
        Rect::new(0, 0, 1, 1).unwrap()
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            Rect::new(0, 0, -1, -1),
            Err(GeometryError::EmptyWidth { x_min: 0, x_max: -1 })
        );
        assert_eq!(
            Rect::new(0, 2, 1, 2),
            Err(GeometryError::EmptyHeight { y_min: 2, y_max: 2 })
        );
    }

    #[test]
    fn rejects_wrong_arity_and_non_finite() {
        assert_eq!(
            Rect::from_coords(&[0.0, 0.0, 1.0]),
            Err(GeometryError::WrongArity(3))
        );
        assert_eq!(
            Rect::from_coords(&[0.0, 0.0, 1.0, 1.0, 2.0]),
            Err(GeometryError::WrongArity(5))
        );
        assert_eq!(
            Rect::from_coords(&[0.0, f64::NAN, 1.0, 1.0]),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn rounds_ties_to_even_before_validating() {
        let r = rect([0.5, 1.5, 2.4, 3.6]);
        assert_eq!(r.bounds(), [0, 2, 2, 4]);
        assert_eq!(r.area(), 4);

        assert!(Rect::from_coords(&[0.0, 0.0, 0.4, 1.0]).is_err());
    }

    #[test]
    fn corners_are_not_adjacent() {
        let rec1 = unit();
        for (dx, dy) in [(0, 0), (2, 0), (2, 2), (0, 2)] {
            let rec2 = Rect::new(-1 + dx, -1 + dy, dx, dy).unwrap();
            assert_eq!(intersect_edge_ratio(&rec1, &rec2), None);
            assert_eq!(classify(&rec1, &rec2), Contact::Separate);
        }
    }

    #[test]
    fn overlap_is_not_adjacent() {
        let rec1 = Rect::new(0, 0, 2, 2).unwrap();
        let rec2 = Rect::new(1, 1, 3, 3).unwrap();
        assert_eq!(classify(&rec1, &rec2), Contact::Overlap);
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), None);

        let rec2 = Rect::new(0, 0, 3, 3).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), None);
    }

    #[test]
    fn left_partial() {
        let rec1 = Rect::new(0, 0, 2, 2).unwrap();
        let rec2 = Rect::new(-1, 1, 0, 2).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Left, 0.5)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Right, 1.0)));

        let rec2 = Rect::new(-1, 0, 0, 1).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Left, 0.5)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Right, 1.0)));
    }

    #[test]
    fn right_partial() {
        let rec1 = Rect::new(0, 0, 2, 2).unwrap();
        let rec2 = Rect::new(2, 1, 3, 2).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Right, 0.5)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Left, 1.0)));
    }

    #[test]
    fn up_partial() {
        let rec1 = Rect::new(0, 0, 2, 2).unwrap();
        let rec2 = Rect::new(1, 2, 2, 3).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Up, 0.5)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Bottom, 1.0)));
    }

    #[test]
    fn bottom_partial() {
        let rec1 = Rect::new(0, 0, 2, 2).unwrap();
        let rec2 = Rect::new(0, -1, 1, 0).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Bottom, 0.5)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Up, 1.0)));
    }

    #[test]
    fn neighbor_wider_than_side_caps_at_one() {
        let rec1 = Rect::new(0, 0, 10, 10).unwrap();
        let rec2 = Rect::new(10, -5, 20, 30).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Right, 1.0)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Left, 10.0 / 35.0)));
    }

    #[test]
    fn shared_grid_line_with_gap_is_adjacent() {
        let rec1 = Rect::new(0, 0, 10, 10).unwrap();
        let rec2 = Rect::new(10, 20, 20, 30).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Right, 1.0)));
        assert_eq!(intersect_edge_ratio(&rec2, &rec1), Some((Direction::Left, 1.0)));

        let rec2 = Rect::new(-1, 15, 0, 16).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), Some((Direction::Left, 0.1)));
    }

    #[test]
    fn rejects_out_of_range_bounds() {
        assert_eq!(
            Rect::from_coords(&[-1e300, 0.0, 1e300, 1.0]),
            Err(GeometryError::OutOfRange(-1e300))
        );
        assert_eq!(
            Rect::from_coords(&[0.0, 0.0, 5e9, 5e9]),
            Err(GeometryError::OutOfRange(5e9))
        );
        assert_eq!(
            Rect::new(0, 0, MAX_COORD + 1, 1),
            Err(GeometryError::OutOfRange((MAX_COORD + 1) as f64))
        );
        assert_eq!(Rect::new(i64::MIN, 0, 0, 1), Err(GeometryError::OutOfRange(i64::MIN as f64)));
    }

    #[test]
    fn largest_rect_has_exact_area() {
        let r = Rect::from_coords(&[-(MAX_COORD as f64), -(MAX_COORD as f64), MAX_COORD as f64, MAX_COORD as f64])
            .unwrap();
        assert_eq!(r.width(), 2 * MAX_COORD);
        assert_eq!(r.area(), 4 * MAX_COORD * MAX_COORD);
    }

    #[test]
    fn far_apart_is_separate() {
        let rec1 = Rect::new(0, 0, 1, 1).unwrap();
        let rec2 = Rect::new(10, 0, 20, 1).unwrap();
        assert_eq!(intersect_edge_ratio(&rec1, &rec2), None);
    }

    #[test]
    fn opposite_is_involutive() {
        for d in WALL_ORDER {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }
}
