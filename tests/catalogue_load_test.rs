use std::fs;
use std::io::Write;

use tempfile::TempDir;

use marquee::catalogue::Catalogue;
use marquee::error::{MarqueeError, Result};
use marquee::recommend::Recommender;

const VALID_CATALOGUE: &str = r#"[
    {"movie_id": 101, "title": "Night Train", "tags": "thriller train night chase"},
    {"movie_id": 102, "title": "Morning Light", "tags": "drama family morning hope"},
    {"movie_id": 103, "title": "Night Shift", "tags": "thriller hospital night tension"}
]"#;

#[test]
fn load_valid_catalogue_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalogue.json");
    fs::write(&path, VALID_CATALOGUE)?;

    let catalogue = Catalogue::load(&path)?;
    assert_eq!(catalogue.len(), 3);
    assert_eq!(catalogue.lookup_by_id(102).unwrap().title, "Morning Light");
    Ok(())
}

#[test]
fn load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = Catalogue::load(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MarqueeError::Load(_)));
}

#[test]
fn load_malformed_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "{{ not json").unwrap();

    let err = Catalogue::load(&path).unwrap_err();
    assert!(matches!(err, MarqueeError::Load(_)));
}

#[test]
fn load_record_missing_required_field_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("incomplete.json");
    fs::write(&path, r#"[{"movie_id": 1, "tags": "no title field"}]"#).unwrap();

    let err = Catalogue::load(&path).unwrap_err();
    assert!(matches!(err, MarqueeError::Load(_)));
}

#[test]
fn full_pipeline_from_file_to_recommendations() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalogue.json");
    fs::write(&path, VALID_CATALOGUE)?;

    let recommender = Recommender::fit(Catalogue::load(&path)?)?;
    let outcome = recommender.recommend("night train", 2)?;

    let results = outcome.results();
    assert_eq!(results.len(), 2);
    // The other night thriller shares more tag vocabulary than the drama.
    assert_eq!(results[0].movie_id, 103);
    Ok(())
}

#[test]
fn empty_tag_catalogue_fails_at_fit() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty_tags.json");
    fs::write(
        &path,
        r#"[{"movie_id": 1, "title": "Blank", "tags": ""}]"#,
    )?;

    let err = Recommender::fit(Catalogue::load(&path)?).unwrap_err();
    assert!(matches!(err, MarqueeError::EmptyCorpus(_)));
    Ok(())
}
