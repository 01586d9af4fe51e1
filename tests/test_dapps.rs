//! Dapp query tests: lookup, search, category filter, featured.

mod common;

use baseapps_sdk::DirectoryError;
use common::{dapp, harness, ids, sample_dapps, Reply};

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn get_returns_the_exact_record() {
    let h = harness();

    let found = h.client.dapps().get(3).unwrap();
    assert_eq!(found, sample_dapps()[2]);
}

#[test]
fn get_unknown_id_is_not_found() {
    let h = harness();

    let err = h.client.dapps().get(999).unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound(999)));
    assert_eq!(err.to_string(), "Dapp with ID 999 not found");
}

#[test]
fn get_works_offline_from_snapshot() {
    let h = harness();
    h.client.dapps().list().unwrap();
    h.go_offline();

    assert_eq!(h.client.dapps().get(6).unwrap().name, "Basepaint");
}

#[test]
fn get_propagates_listing_failure() {
    let h = harness();
    h.go_offline();

    let err = h.client.dapps().get(1).unwrap_err();
    assert!(matches!(err, DirectoryError::NoConnectivity));
}

// ---------------------------------------------------------------------------
// view
// ---------------------------------------------------------------------------

#[test]
fn view_records_recently_viewed() {
    let h = harness();

    let viewed = h.client.dapps().view(2).unwrap();
    assert_eq!(viewed.id, 2);
    assert_eq!(ids(&h.client.recently_viewed().list().unwrap()), vec![2]);
}

#[test]
fn view_of_missing_id_records_nothing() {
    let h = harness();

    assert!(h.client.dapps().view(42).is_err());
    assert!(h.client.recently_viewed().list().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// by_category
// ---------------------------------------------------------------------------

#[test]
fn by_category_is_exact_and_case_sensitive() {
    let h = harness();

    let defi = h.client.dapps().by_category("DeFi").unwrap();
    assert_eq!(ids(&defi), vec![1, 2]);
    assert!(defi.iter().all(|d| d.category == "DeFi"));

    assert_eq!(ids(&h.client.dapps().by_category("defi").unwrap()), vec![5]);
}

#[test]
fn by_category_does_not_match_partially() {
    let h = harness();

    assert!(h.client.dapps().by_category("Social").unwrap().is_empty());
    assert!(h.client.dapps().by_category("De").unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_online_uses_server_results() {
    let h = harness();
    let server_hits = vec![dapp(100, "Server Pick", "DeFi", "")];
    h.source.set_search(Reply::Dapps(server_hits.clone()));

    let results = h.client.dapps().search("base").unwrap();
    assert_eq!(results, server_hits);
    assert_eq!(h.source.calls(), vec!["search:base"]);
}

#[test]
fn search_offline_matches_name_description_and_category() {
    let h = harness();
    h.client.dapps().list().unwrap();
    h.go_offline();

    let results = h.client.dapps().search("base").unwrap();
    assert_eq!(ids(&results), vec![1, 3, 4, 6]);
    assert_eq!(h.source.calls(), vec!["fetch_all"]);
}

#[test]
fn search_is_case_insensitive() {
    let h = harness();
    h.source.set_search(Reply::Malformed);

    let upper = h.client.dapps().search("BASE").unwrap();
    let lower = h.client.dapps().search("base").unwrap();
    assert_eq!(ids(&upper), ids(&lower));
}

#[test]
fn search_falls_back_locally_when_server_search_fails() {
    let h = harness();
    h.source.set_search(Reply::Malformed);

    let results = h.client.dapps().search("lending").unwrap();
    assert_eq!(ids(&results), vec![5]);
    assert_eq!(h.source.calls(), vec!["search:lending", "fetch_all"]);
}

#[test]
fn search_propagates_non_transient_server_failure() {
    let h = harness();
    h.source.set_search(Reply::Fatal);

    assert!(matches!(
        h.client.dapps().search("base").unwrap_err(),
        DirectoryError::Io(_)
    ));
}

#[test]
fn search_results_are_not_written_to_snapshot() {
    let h = harness();
    h.source.set_search(Reply::Dapps(vec![dapp(100, "Server Pick", "DeFi", "")]));

    h.client.dapps().search("pick").unwrap();
    assert_eq!(h.stored_snapshot(), None);
}

#[test]
fn empty_search_returns_full_listing_without_server_search() {
    let h = harness();

    let results = h.client.dapps().search("").unwrap();
    assert_eq!(results, sample_dapps());
    assert_eq!(h.source.calls(), vec!["fetch_all"]);
}

#[test]
fn search_without_matches_is_empty() {
    let h = harness();
    h.client.dapps().list().unwrap();
    h.go_offline();

    assert!(h.client.dapps().search("solana").unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// featured
// ---------------------------------------------------------------------------

#[test]
fn featured_online_uses_featured_endpoint() {
    let h = harness();
    let picks = vec![dapp(6, "Basepaint", "NFT", "")];
    h.source.set_featured(Reply::Dapps(picks.clone()));

    assert_eq!(h.client.dapps().featured().unwrap(), picks);
    assert_eq!(h.source.calls(), vec!["featured"]);
}

#[test]
fn featured_falls_back_to_first_five_in_listing_order() {
    let h = harness();
    h.source.set_featured(Reply::Malformed);

    let featured = h.client.dapps().featured().unwrap();
    assert_eq!(ids(&featured), vec![1, 2, 3, 4, 5]);
}

#[test]
fn featured_offline_uses_snapshot_prefix() {
    let h = harness();
    h.client.dapps().list().unwrap();
    h.go_offline();

    let featured = h.client.dapps().featured().unwrap();
    assert_eq!(ids(&featured), vec![1, 2, 3, 4, 5]);
    assert!(!h.source.calls().contains(&"featured".to_string()));
}

#[test]
fn featured_fallback_with_short_listing_returns_everything() {
    let h = common::harness_with(vec![dapp(1, "Solo", "DeFi", "")]);

    assert_eq!(ids(&h.client.dapps().featured().unwrap()), vec![1]);
}

// ---------------------------------------------------------------------------
// count
// ---------------------------------------------------------------------------

#[test]
fn count_matches_listing() {
    let h = harness();
    assert_eq!(h.client.dapps().count().unwrap(), 7);
}
