use geo::{BoundingRect, MultiPolygon, Rect};

use crate::error::ScoreError;

/// A named region outline read from the boundary file.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub name: String,
    pub shape: MultiPolygon<f64>,
}

impl Boundary {
    pub fn new(name: impl Into<String>, shape: MultiPolygon<f64>) -> Self {
        Self { name: name.into(), shape }
    }
}

/// Region outlines in file order. Names are the join key and must be unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    boundaries: Vec<Boundary>,
}

impl BoundarySet {
    pub fn new(boundaries: Vec<Boundary>) -> Result<Self, ScoreError> {
        for (i, boundary) in boundaries.iter().enumerate() {
            if boundaries[..i].iter().any(|other| other.name == boundary.name) {
                return Err(ScoreError::DuplicateRegion(boundary.name.clone(), "boundary file"));
            }
        }
        Ok(Self { boundaries })
    }

    #[inline]
    pub fn len(&self) -> usize { self.boundaries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.boundaries.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.boundaries.iter().map(|b| b.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Boundary> + '_ {
        self.boundaries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Boundary> {
        self.boundaries.iter().find(|b| b.name == name)
    }

    /// Bounding rectangle over every outline, or `None` if nothing has coordinates.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.boundaries.iter()
            .filter_map(|b| b.shape.bounding_rect())
            .reduce(|a, b| Rect::new(
                (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
                (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
            ))
    }
}
