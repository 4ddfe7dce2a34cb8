//! Facets: typed pieces of information that can be asked of a date-time
//! without knowing what kind of date-time it is.

use crate::cal::Chronology;
use crate::cal::offset::Offset;


/// A piece of information that can be extracted from a date-time.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Facet {

    /// The calendar system of the date.
    Chronology,

    /// The offset from UTC. Local date-times don’t have one.
    Offset,
}

/// The answer to a `Facet` query.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FacetValue {
    Chronology(Chronology),
    Offset(Offset),
}

impl FacetValue {

    /// The chronology, if this is one.
    pub fn chronology(self) -> Option<Chronology> {
        match self {
            FacetValue::Chronology(c) => Some(c),
            FacetValue::Offset(_)     => None,
        }
    }

    /// The offset, if this is one.
    pub fn offset(self) -> Option<Offset> {
        match self {
            FacetValue::Offset(o)     => Some(o),
            FacetValue::Chronology(_) => None,
        }
    }
}
