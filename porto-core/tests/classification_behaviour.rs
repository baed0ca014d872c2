//! Behavioural tests for keyword classification.

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};

use porto_core::{
    CategoryRegistry, CategoryTag, Classifier, Domain, Filter, MatchField, RuleSet, Venue,
    VenueCollection,
};

#[fixture]
fn rules() -> RefCell<Option<(RuleSet, CategoryRegistry)>> {
    RefCell::new(None)
}

#[fixture]
fn venue() -> RefCell<Option<Venue>> {
    RefCell::new(None)
}

#[fixture]
fn category() -> Cell<Option<CategoryTag>> {
    Cell::new(None)
}

fn classify(
    rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>,
    venue: &RefCell<Option<Venue>>,
    category: &Cell<Option<CategoryTag>>,
    subject: Venue,
) {
    let guard = rules.borrow();
    let (rule_set, _) = guard.as_ref().expect("rules must be initialised");
    category.set(Some(rule_set.classify(&subject)));
    *venue.borrow_mut() = Some(subject);
}

fn assert_category(category: &Cell<Option<CategoryTag>>, expected: CategoryTag) {
    assert_eq!(category.get(), Some(expected));
}

// --- Given steps ---

#[given("the food and drink rules")]
fn food_rules(#[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>) {
    let domain = Domain::FoodAndDrink;
    *rules.borrow_mut() = Some((domain.rule_set(), domain.registry()));
}

#[given("food and drink rules with cafés before bars")]
fn reversed_food_rules(#[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>) {
    let rule_set = RuleSet::new(MatchField::Kind)
        .with_rule(CategoryTag::Cafe, ["café", "cafe", "coffee"])
        .with_rule(CategoryTag::Bar, ["bar"])
        .with_fallback(CategoryTag::Restaurant);
    *rules.borrow_mut() = Some((rule_set, Domain::FoodAndDrink.registry()));
}

#[given("the sights rules")]
fn sights_rules(#[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>) {
    let domain = Domain::Sights;
    *rules.borrow_mut() = Some((domain.rule_set(), domain.registry()));
}

// --- When steps ---

#[when("I classify Café Santiago as a café")]
fn classify_cafe_santiago(
    #[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>,
    #[from(venue)] venue: &RefCell<Option<Venue>>,
    #[from(category)] category: &Cell<Option<CategoryTag>>,
) {
    let subject = Venue::new("Café Santiago", "café", Coord { x: -8.6063, y: 41.1466 });
    classify(rules, venue, category, subject);
}

#[when("I classify a venue whose kind is café bar")]
fn classify_cafe_bar(
    #[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>,
    #[from(venue)] venue: &RefCell<Option<Venue>>,
    #[from(category)] category: &Cell<Option<CategoryTag>>,
) {
    let subject = Venue::new("Moustache", "café bar", Coord { x: -8.6110, y: 41.1450 });
    classify(rules, venue, category, subject);
}

#[when("I classify a sight with no known keyword")]
fn classify_unknown_sight(
    #[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>,
    #[from(venue)] venue: &RefCell<Option<Venue>>,
    #[from(category)] category: &Cell<Option<CategoryTag>>,
) {
    let subject = Venue::new("Jardim do Morro", "garden", Coord { x: -8.6094, y: 41.1373 });
    classify(rules, venue, category, subject);
}

// --- Then steps ---

#[then("the category is café")]
fn category_is_cafe(#[from(category)] category: &Cell<Option<CategoryTag>>) {
    assert_category(category, CategoryTag::Cafe);
}

#[then("the category is bar")]
fn category_is_bar(#[from(category)] category: &Cell<Option<CategoryTag>>) {
    assert_category(category, CategoryTag::Bar);
}

#[then("the category is default")]
fn category_is_default(#[from(category)] category: &Cell<Option<CategoryTag>>) {
    assert_category(category, CategoryTag::Default);
}

#[then("the café filter lists Café Santiago")]
fn cafe_filter_lists_venue(
    #[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>,
    #[from(venue)] venue: &RefCell<Option<Venue>>,
) {
    let (rule_set, registry) = rules.borrow().clone().expect("rules must be initialised");
    let subject = venue.borrow().clone().expect("venue must be classified");
    let browser = porto_core::VenueBrowser::new(
        VenueCollection::new(vec![subject]),
        rule_set,
        registry,
    );
    let rows = browser.filtered_sorted(Filter::Category(CategoryTag::Cafe));
    let names: Vec<&str> = rows.iter().map(|row| row.venue.name.as_str()).collect();
    assert_eq!(names, vec!["Café Santiago"]);
}

#[then("the registry has display attributes for the category")]
fn registry_covers_category(
    #[from(rules)] rules: &RefCell<Option<(RuleSet, CategoryRegistry)>>,
    #[from(category)] category: &Cell<Option<CategoryTag>>,
) {
    let guard = rules.borrow();
    let (_, registry) = guard.as_ref().expect("rules must be initialised");
    let tag = category.get().expect("venue must be classified");
    assert!(registry.contains(tag));
    assert!(!registry.lookup(tag).colour.is_empty());
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/classification.feature", name = $title)]
        fn $fn_name(
            rules: RefCell<Option<(RuleSet, CategoryRegistry)>>,
            venue: RefCell<Option<Venue>>,
            category: Cell<Option<CategoryTag>>,
        ) {
            let _ = (rules, venue, category);
        }
    };
}

register_scenario!(cafe_listed_under_cafe, "a café is listed under the café filter");
register_scenario!(first_rule_wins, "the first matching rule wins");
register_scenario!(reversed_order_prefers_cafes, "the reversed rule order prefers cafés");
register_scenario!(
    unmatched_sight_falls_back,
    "unmatched sights fall back to the default category"
);
