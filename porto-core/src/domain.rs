//! Built-in guide domains and the fixed points they share.
//!
//! Each [`Domain`] bundles the configuration that used to be copied between
//! views: a keyword [`RuleSet`], a [`CategoryRegistry`], a map centre and
//! the landmarks pinned to the map. [`Domain::browser`] wires them into a
//! [`VenueBrowser`].

use geo::Coord;

use crate::map::{INITIAL_ZOOM, Viewport};
use crate::{
    CategoryRegistry, CategoryTag, DisplayAttributes, MatchField, RuleSet, VenueBrowser,
    VenueCollection,
};

/// A named point that is not part of any venue dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Landmark {
    pub name: &'static str,
    pub address: &'static str,
    /// Position with `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
}

/// Metro stop at the airport arrivals hall.
pub const AIRPORT_METRO: Landmark = Landmark {
    name: "Airport Arrivals",
    address: "4470-523 Moreira, Portugal",
    location: Coord {
        x: -8.670_332_547_049_686,
        y: 41.236_893_482_066_556,
    },
};

/// Where the traveller is staying.
pub const LODGING: Landmark = Landmark {
    name: "Airbnb",
    address: "R. Formosa 414 1, 4000-249 Porto, Portugal",
    location: Coord {
        x: -8.609_004_400_792_529,
        y: 41.149_169_437_897_35,
    },
};

const PORTO_CENTRE: Coord<f64> = Coord {
    x: -8.6291,
    y: 41.1579,
};

const ESSENTIALS_CENTRE: Coord<f64> = Coord {
    x: -8.605_725,
    y: 41.149_525,
};

/// The themed views of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// Points of interest.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sights"))]
    Sights,
    /// Restaurants, bars and cafés.
    #[cfg_attr(feature = "serde", serde(rename = "food"))]
    FoodAndDrink,
    /// Supermarkets, pharmacies and off-licences near the lodging.
    #[cfg_attr(feature = "serde", serde(rename = "essentials"))]
    Essentials,
}

impl Domain {
    /// Every domain in menu order.
    pub const ALL: [Self; 3] = [Self::Sights, Self::FoodAndDrink, Self::Essentials];

    /// Short identifier used on the command line and in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sights => "sights",
            Self::FoodAndDrink => "food",
            Self::Essentials => "essentials",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Sights => "Places to visit",
            Self::FoodAndDrink => "Food & drink",
            Self::Essentials => "Essentials",
        }
    }

    pub const fn centre(self) -> Coord<f64> {
        match self {
            Self::Sights | Self::FoodAndDrink => PORTO_CENTRE,
            Self::Essentials => ESSENTIALS_CENTRE,
        }
    }

    /// Viewport the domain's map opens with.
    pub const fn initial_viewport(self) -> Viewport {
        Viewport::new(self.centre(), INITIAL_ZOOM)
    }

    /// Keyword rules for this domain.
    ///
    /// Sights match on the venue name, the other domains on the kind field.
    pub fn rule_set(self) -> RuleSet {
        match self {
            Self::Sights => RuleSet::new(MatchField::Name)
                .with_rule(
                    CategoryTag::Museum,
                    ["museum", "serralves", "palácio", "world of wine"],
                )
                .with_rule(
                    CategoryTag::Shopping,
                    ["shopping", "mercado", "livraria", "claus porto"],
                )
                .with_rule(CategoryTag::Music, ["music", "fado"])
                .with_rule(CategoryTag::Food, ["food", "rota do douro", "burmester"])
                .with_rule(
                    CategoryTag::Landmark,
                    [
                        "church",
                        "chapel",
                        "tower",
                        "funicular",
                        "miradouro",
                        "serra",
                        "são bento",
                        "gaia",
                        "foz",
                    ],
                )
                .with_rule(CategoryTag::Beach, ["beach", "praia"])
                .with_rule(CategoryTag::Area, ["ribeira", "bairro", "baixa"]),
            Self::FoodAndDrink => RuleSet::new(MatchField::Kind)
                .with_rule(CategoryTag::Bar, ["bar"])
                .with_rule(CategoryTag::Cafe, ["café", "cafe", "coffee"])
                .with_fallback(CategoryTag::Restaurant),
            Self::Essentials => RuleSet::new(MatchField::Kind)
                .with_rule(CategoryTag::Supermarket, ["supermarket"])
                .with_rule(CategoryTag::Pharmacy, ["pharmacy"])
                .with_rule(CategoryTag::OffLicence, ["off-license", "off-licence"])
                .with_fallback(CategoryTag::Supermarket),
        }
    }

    /// Marker styling for this domain. Every tag the rule set can produce
    /// has an entry.
    pub fn registry(self) -> CategoryRegistry {
        match self {
            Self::Sights => CategoryRegistry::new(DisplayAttributes::new("circle", "#ff9800", 1.0))
                .with_entry(
                    CategoryTag::Landmark,
                    DisplayAttributes::new("landmark", "#d32f2f", 1.0),
                )
                .with_entry(
                    CategoryTag::Museum,
                    DisplayAttributes::new("building-columns", "#7b1fa2", 1.0),
                )
                .with_entry(
                    CategoryTag::Shopping,
                    DisplayAttributes::new("shop", "#4b77d1", 1.0),
                )
                .with_entry(
                    CategoryTag::Music,
                    DisplayAttributes::new("music", "#1976d2", 1.0),
                )
                .with_entry(
                    CategoryTag::Food,
                    DisplayAttributes::new("bottle-droplet", "#388e3c", 1.0),
                )
                .with_entry(
                    CategoryTag::Beach,
                    DisplayAttributes::new("umbrella-beach", "#0097a7", 1.0),
                )
                .with_entry(
                    CategoryTag::Area,
                    DisplayAttributes::new("map", "#5d4037", 1.0),
                ),
            Self::FoodAndDrink => {
                let restaurant = DisplayAttributes::new("utensils", "#388e3c", 0.8);
                CategoryRegistry::new(restaurant.clone())
                    .with_entry(CategoryTag::Restaurant, restaurant)
                    .with_entry(
                        CategoryTag::Bar,
                        DisplayAttributes::new("wine-glass", "#1976d2", 0.7),
                    )
                    .with_entry(
                        CategoryTag::Cafe,
                        DisplayAttributes::new("coffee", "#795548", 0.7),
                    )
            }
            Self::Essentials => {
                let supermarket = DisplayAttributes::new("cart-shopping", "#388e3c", 0.8);
                CategoryRegistry::new(supermarket.clone())
                    .with_entry(CategoryTag::Supermarket, supermarket)
                    .with_entry(
                        CategoryTag::Pharmacy,
                        DisplayAttributes::new("prescription-bottle-medical", "#d32f2f", 0.7),
                    )
                    .with_entry(
                        CategoryTag::OffLicence,
                        DisplayAttributes::new("wine-bottle", "#7b1fa2", 0.7),
                    )
                    .with_entry(
                        CategoryTag::Lodging,
                        DisplayAttributes::new("house", "#e91e63", 0.7),
                    )
            }
        }
    }

    /// Fixed points drawn on this domain's map in addition to its venues.
    pub fn pinned(self) -> &'static [Landmark] {
        match self {
            Self::Essentials => std::slice::from_ref(&LODGING),
            Self::Sights | Self::FoodAndDrink => &[],
        }
    }

    /// A browser over `venues` configured for this domain.
    pub fn browser(self, venues: VenueCollection) -> VenueBrowser {
        VenueBrowser::new(venues, self.rule_set(), self.registry())
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sights" | "places" => Ok(Self::Sights),
            "food" | "food-and-drink" => Ok(Self::FoodAndDrink),
            "essentials" => Ok(Self::Essentials),
            _ => Err(format!(
                "unknown domain '{s}'; expected sights, food or essentials"
            )),
        }
    }
}
