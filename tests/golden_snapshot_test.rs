use markgate::{transform, ContentSource};
use pretty_assertions::assert_eq;

const STUDY_NOTES: &str = include_str!("golden/study_notes.md");

#[test]
fn golden_snapshot_transform_output() {
    let html = transform(STUDY_NOTES.trim_end());
    let expected = include_str!("golden/study_notes_transform.html");
    assert_eq!(html, expected.trim_end());
}

#[test]
fn golden_snapshot_notes_render() {
    let html = ContentSource::Notes.render(STUDY_NOTES.trim_end());
    let expected = include_str!("golden/study_notes_notes.html");
    assert_eq!(html.as_str(), expected.trim_end());
}

#[test]
fn golden_snapshot_roadmap_render() {
    let html = ContentSource::Roadmap.render(STUDY_NOTES.trim_end());
    let expected = include_str!("golden/study_notes_roadmap.html");
    assert_eq!(html.as_str(), expected.trim_end());
}

#[test]
fn golden_snapshot_summary_matches_notes() {
    assert_eq!(
        ContentSource::DocumentSummary.render(STUDY_NOTES.trim_end()),
        ContentSource::Notes.render(STUDY_NOTES.trim_end())
    );
}
