use std::fs;
use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::time::timeout;

use vinyl_player::config::Config;
use vinyl_player::controller::AppController;
use vinyl_player::model::{AppModel, Event, LyricsView, Session, Track};
use vinyl_player::source::LyricsStore;
use vinyl_player::view::ViewAreas;

async fn pump_until<F>(
    controller: &mut AppController,
    events: &mut mpsc::UnboundedReceiver<Event>,
    done: F,
) where
    F: Fn(&AppController) -> bool,
{
    for _ in 0..50 {
        if done(controller) {
            return;
        }
        let event = timeout(Duration::from_secs(2), events.recv())
            .await
            .expect("timed out waiting for an event")
            .expect("event channel closed");
        controller.dispatch(event);
    }
    panic!("condition never reached");
}

fn lyrics_lines(controller: &AppController) -> Vec<(String, bool)> {
    match &controller.model().get_ui_state().lyrics.view {
        LyricsView::Lines(lines) => lines.iter().map(|l| (l.text.clone(), l.active)).collect(),
        LyricsView::Unavailable => Vec::new(),
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn drag(controller: &mut AppController, column: u16, from: u16, to: u16) {
    controller.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, from));
    controller.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), column, to));
}

fn setup(dir: &std::path::Path) -> (AppController, mpsc::UnboundedReceiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let config = Config {
        music_dir: dir.to_path_buf(),
        ..Config::default()
    };
    let controller = AppController::new(
        AppModel::new(Session::default()),
        None,
        LyricsStore::new(dir),
        tx,
        config,
    );
    (controller, rx)
}

#[tokio::test]
async fn startup_cues_first_track_and_shows_its_lyrics() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("track1_One.txt"), "hello\nworld\nagain").unwrap();
    let (mut controller, mut rx) = setup(dir.path());

    controller.start(vec![
        Track::new("track1_One", "track1_One.mp3"),
        Track::new("track2_Two", "track2_Two.mp3"),
    ]);
    assert_eq!(controller.model().get_ui_state().active_track, Some(0));
    assert!(!controller.model().get_ui_state().is_playing);

    pump_until(&mut controller, &mut rx, |c| {
        let ui = c.model().get_ui_state();
        ui.lyrics.visible && !lyrics_lines(c).is_empty()
    })
    .await;

    assert_eq!(
        lyrics_lines(&controller),
        vec![("hello".to_string(), true), ("world".to_string(), false)]
    );

    controller.dispatch(Event::LyricsDown);
    assert!(!controller.model().get_ui_state().lyrics.visible);
    pump_until(&mut controller, &mut rx, |c| c.model().get_ui_state().lyrics.visible).await;
    assert_eq!(
        lyrics_lines(&controller),
        vec![
            ("hello".to_string(), false),
            ("world".to_string(), true),
            ("again".to_string(), false),
        ]
    );
}

#[tokio::test]
async fn track_without_lyrics_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, mut rx) = setup(dir.path());

    controller.start(vec![Track::new("silent", "silent.mp3")]);
    pump_until(&mut controller, &mut rx, |c| {
        c.model().get_ui_state().lyrics.view == LyricsView::Unavailable
    })
    .await;
    assert!(controller.model().get_ui_state().lyrics.visible);
}

#[tokio::test]
async fn empty_playlist_sets_a_status_message() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, _rx) = setup(dir.path());

    controller.start(Vec::new());
    let ui = controller.model().get_ui_state();
    assert!(ui.status_message.is_some());
    assert!(!ui.controls_enabled);
    assert_eq!(ui.active_track, None);
}

#[tokio::test]
async fn clicking_the_track_list_selects_any_track() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, _rx) = setup(dir.path());
    let areas = ViewAreas::compute(Rect::new(0, 0, 100, 30));
    controller.set_view_areas(areas);

    controller.start(
        (1..=12)
            .map(|i| Track::new(format!("track{i}_Song"), format!("track{i}.mp3")))
            .collect(),
    );
    assert_eq!(controller.model().get_ui_state().active_track, Some(0));

    let click = MouseEventKind::Down(MouseButton::Left);
    controller.handle_mouse_event(mouse(click, areas.tracks.x + 3, areas.tracks.y + 1 + 11));
    assert_eq!(controller.model().get_ui_state().active_track, Some(11));
    assert_eq!(controller.model().session.playlist().current_index(), Some(11));

    // The border row is not a track
    controller.handle_mouse_event(mouse(click, areas.tracks.x + 3, areas.tracks.y));
    assert_eq!(controller.model().get_ui_state().active_track, Some(11));
}

#[tokio::test]
async fn only_drags_on_the_lyrics_pane_move_the_cursor() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("track1_One.txt"), "a\nb\nc\nd").unwrap();
    let (mut controller, mut rx) = setup(dir.path());
    let areas = ViewAreas::compute(Rect::new(0, 0, 100, 30));
    controller.set_view_areas(areas);

    controller.start(vec![Track::new("track1_One", "track1_One.mp3")]);
    pump_until(&mut controller, &mut rx, |c| {
        c.model().get_ui_state().lyrics.visible && !lyrics_lines(c).is_empty()
    })
    .await;

    // Starting on the header or the track list is not a swipe
    let lyrics_column = areas.lyrics.x + 5;
    drag(&mut controller, lyrics_column, areas.header.y + 1, areas.lyrics.bottom() - 2);
    drag(&mut controller, areas.tracks.x + 3, areas.tracks.y + 2, areas.tracks.bottom() - 2);
    assert_eq!(controller.model().session.lyrics().cursor(), Some(0));
    assert!(controller.model().get_ui_state().lyrics.visible);

    // Dragging the lyrics downward moves to the next line
    drag(&mut controller, lyrics_column, areas.lyrics.y + 2, areas.lyrics.y + 8);
    assert_eq!(controller.model().session.lyrics().cursor(), Some(1));
    assert!(!controller.model().get_ui_state().lyrics.visible);
}

#[tokio::test]
async fn draining_a_closed_channel_dispatches_what_was_queued() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, _rx) = setup(dir.path());

    let (tx, mut queued) = mpsc::unbounded_channel();
    tx.send(Event::Load(vec![Track::new("a", "a.mp3"), Track::new("b", "b.mp3")]))
        .unwrap();
    tx.send(Event::Select(1)).unwrap();
    drop(tx);

    controller.drain_events(&mut queued);
    assert_eq!(controller.model().get_ui_state().active_track, Some(1));
    assert!(controller.model().get_ui_state().controls_enabled);
}
