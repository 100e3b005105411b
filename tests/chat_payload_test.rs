use marquee::catalogue::{Catalogue, CatalogueEntry};
use marquee::chat::context::{build_context, search_catalogue};
use marquee::chat::{parse_validated, ChatReply};
use marquee::external::PlaceholderProvider;

fn entry(movie_id: u64, title: &str, tags: &str) -> CatalogueEntry {
    CatalogueEntry {
        movie_id,
        title: title.to_string(),
        tags: tags.to_string(),
    }
}

fn sample() -> Catalogue {
    Catalogue::new(vec![
        entry(1, "Inception", "sci-fi dream heist mind"),
        entry(2, "The Prestige", "drama magic rivalry"),
        entry(3, "Dream House", "horror family secret"),
    ])
}

#[test]
fn model_reply_survives_only_with_real_titles() {
    let catalogue = sample();
    let raw = r#"Sure, here are my picks!
{
  "message": "Based on your taste I suggest these.",
  "database_movies": [
    {"title": "inception", "movie_id": 42, "reason": "layered plot"},
    {"title": "The Prestige", "reason": "same director"},
    {"title": "Imaginary Film", "movie_id": 7, "reason": "does not exist"}
  ],
  "external_movies": [
    {"title": "Memento", "year": 2000, "reason": "nonlinear"}
  ]
}"#;

    let reply = parse_validated(raw, &catalogue);

    assert_eq!(reply.message, "Based on your taste I suggest these.");
    let titles: Vec<&str> = reply
        .database_movies
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Inception", "The Prestige"]);
    // Ids are taken from the catalogue, not from the model.
    assert_eq!(reply.database_movies[0].movie_id, 1);
    assert_eq!(reply.external_movies.len(), 1);
}

#[test]
fn unstructured_reply_becomes_plain_message() {
    let catalogue = sample();
    let reply = parse_validated("Tell me more about what you like!", &catalogue);

    assert_eq!(reply.message, "Tell me more about what you like!");
    assert!(reply.database_movies.is_empty());
    assert!(reply.external_movies.is_empty());
}

#[test]
fn reply_roundtrips_through_json() {
    let reply = ChatReply {
        message: "ok".to_string(),
        database_movies: Vec::new(),
        external_movies: Vec::new(),
    };
    let encoded = serde_json::to_string(&reply).unwrap();
    let decoded: ChatReply = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, reply);
}

#[test]
fn context_quotes_matching_titles_for_the_model() {
    let catalogue = sample();
    let provider = PlaceholderProvider::new();
    let context = build_context(&catalogue, "dream", &provider);

    assert!(context.contains("Database Info: 3 movies available."));
    assert!(context.contains("USE EXACT TITLES"));
    // Title match and tag match both surface.
    assert!(context.contains("- Dream House (ID: 3"));
    assert!(context.contains("- Inception (ID: 1"));
}

#[test]
fn context_search_caps_and_orders_results() {
    let catalogue = sample();
    let hits = search_catalogue(&catalogue, "dream", 1);

    assert_eq!(hits.len(), 1);
    // Title matches win over tag matches at the cap.
    assert_eq!(hits[0].1.title, "Dream House");
}
