//! Classify venues into display categories.
//!
//! The [`Classifier`] trait maps a [`Venue`] to exactly one [`CategoryTag`].
//! [`RuleSet`] is the stock implementation: an ordered priority list of
//! keyword rules tested as lower-case substrings of the venue's name, kind,
//! or both. The first matching rule wins, so a name matching two keyword
//! sets is resolved by list order rather than by specificity.

use crate::{CategoryTag, Venue};

/// Assign a display category to a venue.
///
/// Implementations must be total: every venue maps to some tag, falling back
/// to a catch-all when nothing else applies.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use porto_core::{CategoryTag, Classifier, Venue};
///
/// let everything_is_a_bar = |_: &Venue| CategoryTag::Bar;
/// let venue = Venue::new("Capela Incomum", "wine bar", Coord { x: -8.6174, y: 41.1488 });
/// assert_eq!(everything_is_a_bar.classify(&venue), CategoryTag::Bar);
/// ```
pub trait Classifier {
    /// Return the category for `venue`.
    fn classify(&self, venue: &Venue) -> CategoryTag;
}

impl<F> Classifier for F
where
    F: Fn(&Venue) -> CategoryTag,
{
    fn classify(&self, venue: &Venue) -> CategoryTag {
        self(venue)
    }
}

/// Venue fields a [`RuleSet`] searches for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchField {
    /// The display name (`Place`).
    #[default]
    Name,
    /// The free-text kind hint (`Venue`).
    Kind,
    /// Name and kind, searched independently.
    NameAndKind,
}

/// A category together with the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    tag: CategoryTag,
    keywords: Vec<String>,
}

impl KeywordRule {
    /// Build a rule. Keywords are lower-cased and blank keywords dropped,
    /// since an empty substring would match every venue.
    pub fn new<I, S>(tag: CategoryTag, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { tag, keywords }
    }

    pub const fn tag(&self) -> CategoryTag {
        self.tag
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether any keyword occurs in the already lower-cased `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}

/// Ordered keyword rules with a fallback category.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use porto_core::{CategoryTag, Classifier, MatchField, RuleSet, Venue};
///
/// let rules = RuleSet::new(MatchField::Kind)
///     .with_rule(CategoryTag::Bar, ["bar"])
///     .with_rule(CategoryTag::Cafe, ["café"])
///     .with_fallback(CategoryTag::Restaurant);
///
/// let at = Coord { x: -8.61, y: 41.14 };
/// assert_eq!(rules.classify(&Venue::new("Base", "Rooftop Bar", at)), CategoryTag::Bar);
/// // Priority order decides ties: "bar" is listed before "café".
/// assert_eq!(rules.classify(&Venue::new("Moustache", "café bar", at)), CategoryTag::Bar);
/// assert_eq!(rules.classify(&Venue::new("Cufra", "Snack", at)), CategoryTag::Restaurant);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<KeywordRule>,
    field: MatchField,
    fallback: CategoryTag,
}

impl RuleSet {
    /// Start an empty rule set searching `field` and falling back to
    /// [`CategoryTag::Default`].
    pub const fn new(field: MatchField) -> Self {
        Self {
            rules: Vec::new(),
            field,
            fallback: CategoryTag::Default,
        }
    }

    /// Append a rule with lower priority than every rule already present.
    #[must_use]
    pub fn with_rule<I, S>(mut self, tag: CategoryTag, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rules.push(KeywordRule::new(tag, keywords));
        self
    }

    /// Replace the category returned when no rule matches.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: CategoryTag) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub const fn field(&self) -> MatchField {
        self.field
    }

    pub const fn fallback(&self) -> CategoryTag {
        self.fallback
    }

    /// Every tag [`Classifier::classify`] can return for this rule set, in
    /// priority order with the fallback last.
    pub fn output_tags(&self) -> Vec<CategoryTag> {
        let mut tags: Vec<CategoryTag> = Vec::with_capacity(self.rules.len() + 1);
        for tag in self
            .rules
            .iter()
            .map(KeywordRule::tag)
            .chain(std::iter::once(self.fallback))
        {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    fn haystacks(&self, venue: &Venue) -> Vec<String> {
        match self.field {
            MatchField::Name => vec![venue.name.to_lowercase()],
            MatchField::Kind => vec![venue.kind.to_lowercase()],
            MatchField::NameAndKind => vec![venue.name.to_lowercase(), venue.kind.to_lowercase()],
        }
    }
}

impl Classifier for RuleSet {
    fn classify(&self, venue: &Venue) -> CategoryTag {
        let haystacks = self.haystacks(venue);
        self.rules
            .iter()
            .find(|rule| haystacks.iter().any(|text| rule.matches(text)))
            .map_or(self.fallback, KeywordRule::tag)
    }
}
