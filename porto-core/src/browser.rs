//! The classified venue browser.
//!
//! [`VenueBrowser`] is the single implementation behind every guide view. It
//! owns an immutable [`VenueCollection`], a [`Classifier`] and a
//! [`CategoryRegistry`], and keeps the state the list and the map share: the
//! active [`Filter`], the list panel toggle and the selection cursor.
//!
//! The cursor is a [`VenueId`] into the original collection, so changing the
//! filter never invalidates it.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::collate::compare_names;
use crate::map::{MapMarker, MapViewport, SELECTED_ZOOM, Viewport};
use crate::{
    CategoryRegistry, CategoryTag, Classifier, DisplayAttributes, RuleSet, Venue, VenueCollection,
    VenueId,
};

/// Filter applied to the venue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Sentinel showing every venue.
    #[default]
    All,
    /// Only venues classified as the given tag.
    Category(CategoryTag),
}

impl Filter {
    /// Whether a venue classified as `tag` passes this filter.
    pub fn admits(self, tag: CategoryTag) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == tag,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Category(tag) => f.write_str(tag.as_str()),
        }
    }
}

/// Error returned when a filter name is neither `All` nor a category tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{input}'; expected 'All' or a category such as 'museum'")]
pub struct ParseFilterError {
    pub input: String,
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        CategoryTag::from_str(s)
            .map(Self::Category)
            .map_err(|_| ParseFilterError {
                input: s.to_owned(),
            })
    }
}

impl From<CategoryTag> for Filter {
    fn from(tag: CategoryTag) -> Self {
        Self::Category(tag)
    }
}

/// A row of the venue list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedVenue<'a> {
    /// Position in the original collection; use it as the selection cursor.
    pub id: VenueId,
    pub venue: &'a Venue,
    pub category: CategoryTag,
    pub attributes: &'a DisplayAttributes,
}

/// Filterable venue list with a selection cursor shared with the map.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use porto_core::{CategoryTag, Domain, Filter, Venue, VenueCollection, Viewport};
///
/// let venues = VenueCollection::new(vec![
///     Venue::new("Zé Bota", "restaurant", Coord { x: -8.6154, y: 41.1467 }),
///     Venue::new("Aduela", "bar", Coord { x: -8.6159, y: 41.1489 }),
///     Venue::new("Majestic Café", "café", Coord { x: -8.6069, y: 41.1472 }),
/// ]);
/// let mut browser = Domain::FoodAndDrink.browser(venues);
///
/// let names: Vec<&str> = browser
///     .filtered_sorted(Filter::All)
///     .iter()
///     .map(|row| row.venue.name.as_str())
///     .collect();
/// assert_eq!(names, ["Aduela", "Majestic Café", "Zé Bota"]);
///
/// let aduela = browser.filtered_sorted(Filter::Category(CategoryTag::Bar))[0].id;
///
/// let mut map = Domain::FoodAndDrink.initial_viewport();
/// browser.select_from_list(aduela, &mut map);
/// assert_eq!(browser.selection(), Some(aduela));
/// assert_eq!(map.zoom, 16);
/// ```
#[derive(Debug, Clone)]
pub struct VenueBrowser<C = RuleSet> {
    venues: VenueCollection,
    classifier: C,
    registry: CategoryRegistry,
    categories: Vec<CategoryTag>,
    filter: Filter,
    selection: Option<VenueId>,
    list_open: bool,
}

impl<C: Classifier> VenueBrowser<C> {
    /// Classify every venue once and start with no filter, no selection and
    /// the list closed.
    pub fn new(venues: VenueCollection, classifier: C, registry: CategoryRegistry) -> Self {
        let categories = venues
            .as_slice()
            .iter()
            .map(|venue| classifier.classify(venue))
            .collect();
        Self {
            venues,
            classifier,
            registry,
            categories,
            filter: Filter::All,
            selection: None,
            list_open: false,
        }
    }

    pub const fn venues(&self) -> &VenueCollection {
        &self.venues
    }

    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    pub const fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Category of the venue at `id`.
    pub fn category_of(&self, id: VenueId) -> Option<CategoryTag> {
        self.categories.get(id.index()).copied()
    }

    fn row<'a>(&'a self, id: VenueId, venue: &'a Venue) -> ListedVenue<'a> {
        let category = self.category_of(id).unwrap_or(CategoryTag::Default);
        ListedVenue {
            id,
            venue,
            category,
            attributes: self.registry.lookup(category),
        }
    }

    /// `All`, followed by each category observed in the collection once,
    /// ordered alphabetically by tag name.
    pub fn available_filters(&self) -> Vec<Filter> {
        let mut tags = self.categories.clone();
        tags.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        tags.dedup();
        std::iter::once(Filter::All)
            .chain(tags.into_iter().map(Filter::Category))
            .collect()
    }

    /// Venues passing `filter`, stable-sorted by display name.
    pub fn filtered_sorted(&self, filter: Filter) -> Vec<ListedVenue<'_>> {
        let mut rows: Vec<ListedVenue<'_>> = self
            .venues
            .iter()
            .filter(|(id, _)| {
                self.category_of(*id)
                    .is_some_and(|category| filter.admits(category))
            })
            .map(|(id, venue)| self.row(id, venue))
            .collect();
        rows.sort_by(|a, b| compare_names(&a.venue.name, &b.venue.name));
        rows
    }

    /// The list under the active filter.
    pub fn visible(&self) -> Vec<ListedVenue<'_>> {
        self.filtered_sorted(self.filter)
    }

    pub const fn active_filter(&self) -> Filter {
        self.filter
    }

    /// Change the active filter. The selection is left untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Map a venue taken from any view back to its original identifier by
    /// coordinate equality.
    pub fn resolve(&self, venue: &Venue) -> Option<VenueId> {
        self.venues.locate(venue.location)
    }

    /// Select `venue` and recentre the map on it.
    ///
    /// A venue that cannot be resolved clears the selection and leaves the
    /// map where it is.
    pub fn select_for(
        &mut self,
        venue: &Venue,
        viewport: &mut dyn MapViewport,
    ) -> Option<VenueId> {
        match self.resolve(venue) {
            Some(id) => {
                self.focus(id, viewport);
                Some(id)
            }
            None => {
                debug!(
                    "no venue at ({}, {}); clearing selection",
                    venue.latitude(),
                    venue.longitude()
                );
                self.selection = None;
                None
            }
        }
    }

    /// Select the venue at `id` from the list: recentre the map on it at
    /// [`SELECTED_ZOOM`] and close the list panel.
    ///
    /// Returns `false`, clearing the selection, when `id` is not part of this
    /// collection.
    pub fn select_from_list(&mut self, id: VenueId, viewport: &mut dyn MapViewport) -> bool {
        if self.venues.get(id).is_none() {
            debug!("venue {id} is not in this collection; clearing selection");
            self.selection = None;
            return false;
        }
        self.focus(id, viewport);
        true
    }

    fn focus(&mut self, id: VenueId, viewport: &mut dyn MapViewport) {
        if let Some(venue) = self.venues.get(id) {
            viewport.recentre(Viewport::new(venue.location, SELECTED_ZOOM));
            self.selection = Some(id);
            self.list_open = false;
        }
    }

    /// Select the venue whose marker was clicked. The map is not moved.
    pub fn select_marker(&mut self, id: VenueId) -> bool {
        if self.venues.get(id).is_none() {
            debug!("marker {id} is not in this collection; clearing selection");
            self.selection = None;
            return false;
        }
        self.selection = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub const fn selection(&self) -> Option<VenueId> {
        self.selection
    }

    /// The selected venue as a list row.
    pub fn selected(&self) -> Option<ListedVenue<'_>> {
        let id = self.selection?;
        let venue = self.venues.get(id)?;
        Some(self.row(id, venue))
    }

    pub fn open_list(&mut self) {
        self.list_open = true;
    }

    pub fn close_list(&mut self) {
        self.list_open = false;
    }

    pub const fn is_list_open(&self) -> bool {
        self.list_open
    }

    /// One marker per venue, in collection order. Markers ignore the list
    /// filter.
    pub fn markers(&self) -> Vec<MapMarker<'_>> {
        self.venues
            .iter()
            .map(|(id, venue)| {
                let row = self.row(id, venue);
                MapMarker {
                    venue: id,
                    position: venue.location,
                    title: &venue.name,
                    category: row.category,
                    icon: row.attributes,
                }
            })
            .collect()
    }
}
