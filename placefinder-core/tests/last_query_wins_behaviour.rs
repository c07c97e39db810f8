//! Behavioural tests for last-query-wins search dispatch.

use geo::Coord;
use placefinder_core::test_support::{RecordingResultsView, StaticPlaceSearch};
use placefinder_core::{
    Place, QueryDispatcher, ResultList, SearchError, SearchFuture, SearchQuery, Viewport,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::future::Future;

const QUERIES: [&str; 3] = ["pi", "piz", "pizza"];

/// Dispatcher plus the list state it writes into.
#[derive(Default)]
struct Harness {
    dispatcher: Option<QueryDispatcher<StaticPlaceSearch>>,
    results: ResultList,
    view: RecordingResultsView,
    pending: Vec<Option<SearchFuture>>,
}

#[fixture]
fn harness() -> RefCell<Harness> {
    RefCell::new(Harness::default())
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
        .block_on(future)
}

fn region() -> Viewport {
    Viewport::focused_on(Coord { x: 12.49, y: 41.89 })
}

fn answer_for(text: &str) -> Vec<Place> {
    vec![Place::new(Coord { x: 12.49, y: 41.89 }).with_name(format!("{text} result"))]
}

fn stale_place() -> Place {
    Place::new(Coord { x: 0.0, y: 0.0 }).with_name("stale")
}

// --- Given steps ---

#[given("a provider with distinct answers for three queries")]
fn distinct_answers(#[from(harness)] harness: &RefCell<Harness>) {
    let provider = QUERIES
        .iter()
        .fold(StaticPlaceSearch::with_places(Vec::new()), |provider, text| {
            provider.with_answer(*text, answer_for(text))
        });
    harness.borrow_mut().dispatcher = Some(QueryDispatcher::new(provider));
}

#[given("a provider that fails every search")]
fn failing_provider(#[from(harness)] harness: &RefCell<Harness>) {
    let provider = StaticPlaceSearch::with_error(SearchError::Timeout {
        url: "http://example.com/search".to_owned(),
        timeout_secs: 15,
    });
    harness.borrow_mut().dispatcher = Some(QueryDispatcher::new(provider));
}

#[given("the result list already holds a stale place")]
fn stale_results(#[from(harness)] harness: &RefCell<Harness>) {
    harness.borrow_mut().results.replace(vec![stale_place()]);
}

// --- When steps ---

#[when("I issue the three queries in order")]
fn issue_three(#[from(harness)] harness: &RefCell<Harness>) {
    let mut guard = harness.borrow_mut();
    let state = &mut *guard;
    let dispatcher = state
        .dispatcher
        .as_mut()
        .expect("dispatcher must be initialised");
    state.pending = QUERIES
        .iter()
        .map(|text| Some(dispatcher.dispatch(SearchQuery::new(*text, region()))))
        .collect();
}

#[when("the answers arrive in the order first, third, second")]
fn answers_out_of_order(#[from(harness)] harness: &RefCell<Harness>) {
    let mut guard = harness.borrow_mut();
    let state = &mut *guard;
    let dispatcher = state
        .dispatcher
        .as_ref()
        .expect("dispatcher must be initialised");
    for index in [0, 2, 1] {
        let call = state
            .pending
            .get_mut(index)
            .and_then(Option::take)
            .expect("query must have been issued");
        let completion = block_on(call);
        dispatcher.complete(completion, &mut state.results, &mut state.view);
    }
}

#[when("I search for \"bakery\"")]
fn search_bakery(#[from(harness)] harness: &RefCell<Harness>) {
    let mut guard = harness.borrow_mut();
    let state = &mut *guard;
    let dispatcher = state
        .dispatcher
        .as_mut()
        .expect("dispatcher must be initialised");
    block_on(dispatcher.search(
        SearchQuery::new("bakery", region()),
        &mut state.results,
        &mut state.view,
    ));
}

// --- Then steps ---

#[then("the result list holds the third answer only")]
fn holds_third(#[from(harness)] harness: &RefCell<Harness>) {
    let state = harness.borrow();
    assert_eq!(state.results.as_slice(), answer_for("pizza").as_slice());
}

#[then("the list was refreshed once")]
fn refreshed_once(#[from(harness)] harness: &RefCell<Harness>) {
    assert_eq!(harness.borrow().view.reloads(), 1);
}

#[then("the result list is empty")]
fn list_empty(#[from(harness)] harness: &RefCell<Harness>) {
    assert!(harness.borrow().results.is_empty());
}

// --- Scenario registrations ---

#[scenario(path = "tests/features/last_query_wins.feature", index = 0)]
fn stale_answer_discarded(harness: RefCell<Harness>) {
    let _ = harness;
}

#[scenario(path = "tests/features/last_query_wins.feature", index = 1)]
fn failure_empties_list(harness: RefCell<Harness>) {
    let _ = harness;
}
