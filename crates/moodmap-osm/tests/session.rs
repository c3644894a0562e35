//! Ordering tests for `DiscoverySession`.

use std::time::Duration;

use moodmap_core::{Coordinates, Location, Mood};
use moodmap_osm::{
    ClientSettings, DiscoverySession, FixedMetadata, PlaceDiscovery, QueryOptions,
    RefreshOutcome, SimulatedMetadata,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn named(id: i64, name: &str) -> serde_json::Value {
    json!({ "type": "node", "id": id, "lat": 37.78, "lon": -122.41, "tags": { "name": name } })
}

fn session_for(server: &MockServer) -> DiscoverySession {
    let discovery = PlaceDiscovery::new(
        &format!("{}/api/interpreter", server.uri()),
        &ClientSettings {
            timeout_secs: 5,
            user_agent: "moodmap-test/0.1".to_string(),
            max_retries: 0,
            backoff_base_ms: 0,
        },
        QueryOptions::default(),
    )
    .expect("discovery construction should not fail")
    .with_simulator(FixedMetadata(SimulatedMetadata {
        user_ratings_total: 10,
        open_now: true,
        price_level: 1,
    }));
    let start = Location::new(
        Coordinates::new(37.7749, -122.4194).unwrap(),
        "San Francisco, CA",
    );
    DiscoverySession::new(discovery, start)
}

#[tokio::test]
async fn later_request_wins_even_when_it_completes_first() {
    let server = MockServer::start().await;

    // Work is slow, budget is fast.
    Mock::given(method("POST"))
        .and(body_string_contains("coworking"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "elements": [named(1, "Slow Cafe")] }))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("fast_food"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "elements": [named(2, "Quick Burger")] })),
        )
        .mount(&server)
        .await;

    let session = session_for(&server);
    let (first, second) = tokio::join!(session.set_mood(Some(Mood::Work)), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.set_mood(Some(Mood::Budget)).await
    });

    assert_eq!(first, RefreshOutcome::Superseded);
    assert_eq!(second, RefreshOutcome::Applied { places: 1 });
    let names: Vec<_> = session.places().await.into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Quick Burger"]);
    assert_eq!(session.mood().await, Some(Mood::Budget));
}

#[tokio::test]
async fn location_change_refreshes_and_clears_selection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("(around:2000,37.7749,-122.4194)"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "elements": [named(7, "Old Spot")] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("(around:2000,48.8566,2.3522)"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "elements": [named(8, "Le Bistro"), named(9, "Parc")] })),
        )
        .mount(&server)
        .await;

    let session = session_for(&server);
    assert_eq!(
        session.set_mood(Some(Mood::Date)).await,
        RefreshOutcome::Applied { places: 1 }
    );
    assert_eq!(session.select("7").await.map(|p| p.name), Some("Old Spot".to_string()));
    assert!(session.selected().await.is_some());

    let paris = Location::new(Coordinates::new(48.8566, 2.3522).unwrap(), "Paris, France");
    assert_eq!(
        session.set_location(paris.clone()).await,
        RefreshOutcome::Applied { places: 2 }
    );
    assert_eq!(session.location().await, paris);
    assert!(session.selected().await.is_none());
}

#[tokio::test]
async fn clearing_the_mood_empties_the_list_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "elements": [named(1, "Cafe")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    session.set_mood(Some(Mood::Work)).await;
    assert_eq!(session.places().await.len(), 1);

    assert_eq!(
        session.set_mood(None).await,
        RefreshOutcome::Applied { places: 0 }
    );
    assert!(session.places().await.is_empty());
}

#[tokio::test]
async fn selecting_an_unknown_id_clears_selection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "elements": [named(1, "Cafe")] })),
        )
        .mount(&server)
        .await;

    let session = session_for(&server);
    session.set_mood(Some(Mood::Work)).await;
    assert!(session.select("1").await.is_some());
    assert!(session.select("999").await.is_none());
    assert!(session.selected().await.is_none());
}
