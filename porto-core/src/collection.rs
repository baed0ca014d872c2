//! Immutable venue arena and the identifiers it issues.
//!
//! A [`VenueCollection`] is loaded once per view and never changes afterwards,
//! so a [`VenueId`] stays valid for the lifetime of the collection no matter
//! how the venues are later filtered or sorted.

use geo::Coord;

use crate::Venue;

/// Position of a venue within the [`VenueCollection`] that issued it.
///
/// Identifiers are only minted by the collection, so they always refer to
/// the original, unfiltered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VenueId(usize);

impl VenueId {
    /// Index of the venue in the original collection.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only collection of venues for one guide domain.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use porto_core::{Venue, VenueCollection};
///
/// let venues = VenueCollection::new(vec![
///     Venue::new("Ribeira", "area", Coord { x: -8.6130, y: 41.1405 }),
///     Venue::new("Serralves", "museum", Coord { x: -8.6598, y: 41.1596 }),
/// ]);
///
/// let id = venues.locate(Coord { x: -8.6598, y: 41.1596 }).expect("known venue");
/// assert_eq!(id.index(), 1);
/// assert_eq!(venues.get(id).map(|v| v.name.as_str()), Some("Serralves"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VenueCollection {
    venues: Vec<Venue>,
}

impl VenueCollection {
    pub const fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Return the venue for `id`, or `None` when the identifier came from a
    /// larger collection.
    pub fn get(&self, id: VenueId) -> Option<&Venue> {
        self.venues.get(id.0)
    }

    /// Iterate venues in their original order alongside their identifiers.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VenueId, &Venue)> + '_ {
        self.venues
            .iter()
            .enumerate()
            .map(|(index, venue)| (VenueId(index), venue))
    }

    /// Find the first venue positioned exactly at `location`.
    ///
    /// Source datasets carry no stable identifier, so coordinates are the
    /// only key that survives a round trip through a filtered view.
    pub fn locate(&self, location: Coord<f64>) -> Option<VenueId> {
        self.venues
            .iter()
            .position(|venue| venue.location == location)
            .map(VenueId)
    }

    pub fn as_slice(&self) -> &[Venue] {
        &self.venues
    }
}

impl FromIterator<Venue> for VenueCollection {
    fn from_iter<I: IntoIterator<Item = Venue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Venue>> for VenueCollection {
    fn from(venues: Vec<Venue>) -> Self {
        Self::new(venues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn venues() -> VenueCollection {
        VenueCollection::new(vec![
            Venue::new("Ribeira", "area", Coord { x: -8.6130, y: 41.1405 }),
            Venue::new("Serralves", "museum", Coord { x: -8.6598, y: 41.1596 }),
            Venue::new("Ribeira Square", "area", Coord { x: -8.6130, y: 41.1405 }),
        ])
    }

    #[rstest]
    fn iter_yields_original_indices(venues: VenueCollection) {
        let ids: Vec<usize> = venues.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[rstest]
    fn locate_returns_first_coordinate_match(venues: VenueCollection) {
        let id = venues
            .locate(Coord { x: -8.6130, y: 41.1405 })
            .expect("coordinates are present");
        assert_eq!(id.index(), 0);
    }

    #[rstest]
    fn locate_misses_unknown_coordinates(venues: VenueCollection) {
        assert!(venues.locate(Coord { x: 0.0, y: 0.0 }).is_none());
    }

    #[rstest]
    fn get_rejects_foreign_identifiers(venues: VenueCollection) {
        let (foreign, _) = venues.iter().last().expect("non-empty");
        let smaller = VenueCollection::new(vec![Venue::new("Foz", "area", Coord { x: 0.0, y: 0.0 })]);
        assert!(smaller.get(foreign).is_none());
    }
}
