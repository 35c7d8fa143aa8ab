use super::{Aabb, Plane, Segment, Sphere, Triangle};

/// Any primitive that can take part in an intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Segment(Segment),
    Triangle(Triangle),
    Aabb(Aabb),
}

/// Discriminant of a [`Shape`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Plane,
    Segment,
    Triangle,
    Aabb,
}

impl Shape {
    /// Returns which primitive this shape holds.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Plane(_) => ShapeKind::Plane,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Aabb(_) => ShapeKind::Aabb,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Self::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Self::Plane(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Aabb> for Shape {
    fn from(b: Aabb) -> Self {
        Self::Aabb(b)
    }
}
