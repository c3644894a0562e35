//! Terminal and JSON output for locations and place lists.

use moodmap_core::{Location, Mood, Place};

pub(crate) fn print_location(location: &Location, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(location)?);
    } else {
        println!(
            "{} ({:.5}, {:.5})",
            location.display_name, location.lat, location.lng
        );
    }
    Ok(())
}

pub(crate) fn print_places(
    location: &Location,
    mood: Option<Mood>,
    places: &[Place],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let payload = serde_json::json!({
            "location": location,
            "mood": mood,
            "places": places,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", heading(location, mood, places.len()));
    for place in places {
        println!("  {}", place_line(place));
    }
    Ok(())
}

fn heading(location: &Location, mood: Option<Mood>, count: usize) -> String {
    let title = match mood {
        Some(mood) => format!("Recommended places ({})", mood.label()),
        None => "All places".to_string(),
    };
    format!(
        "{title} near \u{1f4cd} {} \u{00b7} {count} results",
        location.display_name
    )
}

/// One line per place: name, vicinity, rating, open badge, price.
fn place_line(place: &Place) -> String {
    let status = if place.open_now { "Open" } else { "Closed" };
    let price = "$".repeat(usize::from(place.price_level));
    format!(
        "{} \u{00b7} {} \u{00b7} {} \u{2605} ({}) \u{00b7} {status} \u{00b7} {price} \u{00b7} {}",
        place.name,
        place.vicinity,
        place.rating,
        place.user_ratings_total,
        place.primary_type(),
    )
}

#[cfg(test)]
mod tests {
    use moodmap_core::Coordinates;

    use super::*;

    fn place(open_now: bool) -> Place {
        Place {
            id: "123".to_string(),
            name: "Cafe X".to_string(),
            rating: "3.8".to_string(),
            user_ratings_total: 42,
            vicinity: "12 Market St".to_string(),
            location: Coordinates { lat: 1.0, lng: 2.0 },
            open_now,
            types: vec!["cafe".to_string()],
            price_level: 2,
        }
    }

    fn sf() -> Location {
        Location::new(
            Coordinates::new(37.7749, -122.4194).unwrap(),
            "San Francisco, CA",
        )
    }

    #[test]
    fn place_line_shows_open_badge_and_price() {
        let line = place_line(&place(true));
        assert_eq!(
            line,
            "Cafe X \u{00b7} 12 Market St \u{00b7} 3.8 \u{2605} (42) \u{00b7} Open \u{00b7} $$ \u{00b7} cafe"
        );
    }

    #[test]
    fn place_line_shows_closed() {
        assert!(place_line(&place(false)).contains("Closed"));
    }

    #[test]
    fn heading_without_mood_says_all_places() {
        let h = heading(&sf(), None, 0);
        assert!(h.starts_with("All places"));
        assert!(h.ends_with("0 results"));
    }

    #[test]
    fn heading_with_mood_uses_label() {
        let h = heading(&sf(), Some(Mood::QuickBite), 3);
        assert!(h.starts_with("Recommended places (Quick Bite)"));
        assert!(h.contains("San Francisco, CA"));
        assert!(h.ends_with("3 results"));
    }
}
