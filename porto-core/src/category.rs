//! The closed set of display categories a venue can fall into.
//!
//! # Examples
//! ```
//! use porto_core::CategoryTag;
//!
//! assert_eq!(CategoryTag::Cafe.as_str(), "café");
//! assert_eq!("cafe".parse::<CategoryTag>(), Ok(CategoryTag::Cafe));
//! assert_eq!(CategoryTag::OffLicence.label(), "Off-licence");
//! ```

/// Display category assigned to a venue by a [`Classifier`](crate::Classifier).
///
/// The ordering follows declaration order, which is also the order of map
/// legends. Filter menus sort by [`CategoryTag::as_str`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CategoryTag {
    /// Churches, towers, viewpoints and similar sights.
    Landmark,
    Museum,
    Shopping,
    /// Food experiences such as tastings and food tours.
    Food,
    Drinks,
    Music,
    Beach,
    /// Neighbourhoods worth wandering.
    Area,
    Restaurant,
    Bar,
    #[cfg_attr(feature = "serde", serde(rename = "café", alias = "cafe"))]
    Cafe,
    Supermarket,
    Pharmacy,
    #[cfg_attr(feature = "serde", serde(alias = "off-license"))]
    OffLicence,
    /// Where the traveller is staying.
    Lodging,
    /// Catch-all for venues no keyword rule recognises.
    Default,
}

impl CategoryTag {
    /// Every tag in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Landmark,
        Self::Museum,
        Self::Shopping,
        Self::Food,
        Self::Drinks,
        Self::Music,
        Self::Beach,
        Self::Area,
        Self::Restaurant,
        Self::Bar,
        Self::Cafe,
        Self::Supermarket,
        Self::Pharmacy,
        Self::OffLicence,
        Self::Lodging,
        Self::Default,
    ];

    /// Return the tag as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landmark => "landmark",
            Self::Museum => "museum",
            Self::Shopping => "shopping",
            Self::Food => "food",
            Self::Drinks => "drinks",
            Self::Music => "music",
            Self::Beach => "beach",
            Self::Area => "area",
            Self::Restaurant => "restaurant",
            Self::Bar => "bar",
            Self::Cafe => "café",
            Self::Supermarket => "supermarket",
            Self::Pharmacy => "pharmacy",
            Self::OffLicence => "off-licence",
            Self::Lodging => "lodging",
            Self::Default => "default",
        }
    }

    /// Human-readable label for legends and list badges.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landmark => "Landmark",
            Self::Museum => "Museum",
            Self::Shopping => "Shopping",
            Self::Food => "Food",
            Self::Drinks => "Drinks",
            Self::Music => "Music",
            Self::Beach => "Beach",
            Self::Area => "Area",
            Self::Restaurant => "Restaurant",
            Self::Bar => "Bar",
            Self::Cafe => "Café",
            Self::Supermarket => "Supermarket",
            Self::Pharmacy => "Pharmacy",
            Self::OffLicence => "Off-licence",
            Self::Lodging => "Lodging",
            Self::Default => "Other",
        }
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        match normalised.as_str() {
            "cafe" => Ok(Self::Cafe),
            "off-license" | "off licence" | "off license" => Ok(Self::OffLicence),
            other => Self::ALL
                .into_iter()
                .find(|tag| tag.as_str() == other)
                .ok_or_else(|| format!("unknown category '{s}'")),
        }
    }
}
