//! Behavioural tests for one-line address formatting.

use geo::Coord;
use placefinder_core::{Place, format_address};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[fixture]
fn place() -> RefCell<Option<Place>> {
    RefCell::new(None)
}

#[fixture]
fn formatted() -> RefCell<Option<String>> {
    RefCell::new(None)
}

fn bare_place() -> Place {
    Place::new(Coord { x: -89.65, y: 39.78 })
}

// --- Given steps ---

#[given("a place on \"Main St\" in \"Springfield\" \"IL\" without a street number")]
fn place_without_number(#[from(place)] place: &RefCell<Option<Place>>) {
    *place.borrow_mut() = Some(
        bare_place()
            .with_street_name("Main St")
            .with_city("Springfield")
            .with_region("IL"),
    );
}

#[given("a place with no address components")]
fn place_without_address(#[from(place)] place: &RefCell<Option<Place>>) {
    *place.borrow_mut() = Some(bare_place());
}

#[given("a place with only the city \"City\"")]
fn place_with_city(#[from(place)] place: &RefCell<Option<Place>>) {
    *place.borrow_mut() = Some(bare_place().with_city("City"));
}

// --- When steps ---

#[when("I format its address")]
fn format_it(
    #[from(place)] place: &RefCell<Option<Place>>,
    #[from(formatted)] formatted: &RefCell<Option<String>>,
) {
    let guard = place.borrow();
    let subject = guard.as_ref().expect("place must be initialised");
    *formatted.borrow_mut() = Some(format_address(subject));
}

// --- Then steps ---

#[then("the address reads \"Main St, Springfield IL\"")]
fn reads_street_and_locality(#[from(formatted)] formatted: &RefCell<Option<String>>) {
    assert_eq!(
        formatted.borrow().as_deref(),
        Some("Main St, Springfield IL")
    );
}

#[then("the address is empty")]
fn address_empty(#[from(formatted)] formatted: &RefCell<Option<String>>) {
    assert_eq!(formatted.borrow().as_deref(), Some(""));
}

#[then("the address reads \"City\"")]
fn reads_city(#[from(formatted)] formatted: &RefCell<Option<String>>) {
    assert_eq!(formatted.borrow().as_deref(), Some("City"));
}

// --- Scenario registrations ---

#[scenario(path = "tests/features/address_formatting.feature", index = 0)]
fn address_without_street_number(
    place: RefCell<Option<Place>>,
    formatted: RefCell<Option<String>>,
) {
    let _ = (place, formatted);
}

#[scenario(path = "tests/features/address_formatting.feature", index = 1)]
fn address_without_components(place: RefCell<Option<Place>>, formatted: RefCell<Option<String>>) {
    let _ = (place, formatted);
}

#[scenario(path = "tests/features/address_formatting.feature", index = 2)]
fn address_with_city_only(place: RefCell<Option<Place>>, formatted: RefCell<Option<String>>) {
    let _ = (place, formatted);
}
