use std::fs;

use vinyl_player::error::LyricsError;
use vinyl_player::source::LyricsStore;

#[tokio::test]
async fn reads_lyrics_next_to_audio() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("track1_Intro.txt"), "first\nsecond\n").unwrap();

    let store = LyricsStore::new(dir.path());
    let text = store.fetch("track1_Intro").await.unwrap();
    assert_eq!(text, "first\nsecond\n");
    assert!(store.is_cached("track1_Intro").await);
}

#[tokio::test]
async fn cached_lyrics_survive_file_removal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.txt");
    fs::write(&path, "la la").unwrap();

    let store = LyricsStore::new(dir.path());
    store.fetch("song").await.unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(store.fetch("song").await.unwrap(), "la la");
}

#[tokio::test]
async fn missing_file_is_not_found_and_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let store = LyricsStore::new(dir.path());

    let err = store.fetch("ghost").await.unwrap_err();
    assert!(matches!(err, LyricsError::NotFound(ref name) if name == "ghost"));
    assert!(!store.is_cached("ghost").await);

    fs::write(dir.path().join("ghost.txt"), "boo").unwrap();
    assert_eq!(store.fetch("ghost").await.unwrap(), "boo");
}

#[tokio::test]
async fn unreadable_path_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be cannot be read as text
    fs::create_dir(dir.path().join("folder.txt")).unwrap();

    let store = LyricsStore::new(dir.path());
    let err = store.fetch("folder").await.unwrap_err();
    assert!(matches!(err, LyricsError::Unavailable { .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn prefetch_warms_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "A").unwrap();

    let store = LyricsStore::new(dir.path());
    store.prefetch(vec!["a".to_string(), "b".to_string()]).await;
    assert!(store.is_cached("a").await);
    assert!(!store.is_cached("b").await);
}
