//! Venue records supplied by the guide's static datasets.

use geo::Coord;

/// A single place shown on one of the guide's maps.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Venues
/// carry no identifier of their own; a [`VenueId`](crate::VenueId) is issued
/// by the [`VenueCollection`](crate::VenueCollection) that owns them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use porto_core::Venue;
///
/// let venue = Venue::new("Livraria Lello", "bookshop", Coord { x: -8.6149, y: 41.1469 })
///     .with_address("R. das Carmelitas 144");
///
/// assert_eq!(venue.latitude(), 41.1469);
/// assert_eq!(venue.search_query(), "Livraria Lello R. das Carmelitas 144");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "record::VenueRecord", into = "record::VenueRecord")
)]
pub struct Venue {
    /// Display name, also the sort key of the venue list.
    pub name: String,
    /// Free-text kind hint such as `"restaurant"` or `"museum"`.
    pub kind: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub tags: Vec<String>,
    pub specialties: Vec<String>,
}

impl Venue {
    /// Construct a venue with no optional metadata.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            location,
            address: None,
            price: None,
            tags: Vec::new(),
            specialties: Vec::new(),
        }
    }

    /// Attach a street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attach a price tag such as `"€€"`.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Attach descriptive tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach house specialties.
    #[must_use]
    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Free-text query used for map searches: the name, a space, then the
    /// address (empty when unknown).
    pub fn search_query(&self) -> String {
        format!("{} {}", self.name, self.address.as_deref().unwrap_or_default())
    }
}

#[cfg(feature = "serde")]
mod record {
    use geo::Coord;
    use serde::{Deserialize, Serialize};

    use super::Venue;

    /// Datasets store tags either as one string or as a list.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(untagged)]
    pub(super) enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    impl OneOrMany {
        fn into_vec(self) -> Vec<String> {
            match self {
                Self::One(value) => vec![value],
                Self::Many(values) => values,
            }
        }

        fn from_vec(mut values: Vec<String>) -> Option<Self> {
            match values.len() {
                0 => None,
                1 => values.pop().map(Self::One),
                _ => Some(Self::Many(values)),
            }
        }
    }

    /// Wire shape of a venue in the JSON datasets.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub(super) struct VenueRecord {
        #[serde(rename = "Place")]
        place: String,
        #[serde(rename = "Venue", default)]
        venue: String,
        #[serde(rename = "Latitude")]
        latitude: f64,
        #[serde(rename = "Longitude")]
        longitude: f64,
        #[serde(rename = "Address", default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
        #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
        price: Option<String>,
        #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
        tags: Option<OneOrMany>,
        #[serde(rename = "Specialty", default, skip_serializing_if = "Option::is_none")]
        specialty: Option<OneOrMany>,
    }

    impl From<VenueRecord> for Venue {
        fn from(record: VenueRecord) -> Self {
            Self {
                name: record.place,
                kind: record.venue,
                location: Coord {
                    x: record.longitude,
                    y: record.latitude,
                },
                address: record.address,
                price: record.price,
                tags: record.tags.map(OneOrMany::into_vec).unwrap_or_default(),
                specialties: record.specialty.map(OneOrMany::into_vec).unwrap_or_default(),
            }
        }
    }

    impl From<Venue> for VenueRecord {
        fn from(venue: Venue) -> Self {
            Self {
                place: venue.name,
                venue: venue.kind,
                latitude: venue.location.y,
                longitude: venue.location.x,
                address: venue.address,
                price: venue.price,
                tags: OneOrMany::from_vec(venue.tags),
                specialty: OneOrMany::from_vec(venue.specialties),
            }
        }
    }
}
