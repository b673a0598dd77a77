//! Audio driver backed by rodio
//!
//! The output stream is created and owned by a dedicated thread. The rest of the
//! player talks to it through [`AudioBackend`], which only forwards commands, and
//! hears back through the application event channel.

use std::fs::File;
use std::io::BufReader;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tokio::sync::mpsc::UnboundedSender;

use crate::model::{AudioCommand, AudioEvent, Event};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct AudioBackend {
    commands: Sender<AudioCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl AudioBackend {
    /// Open the default output device on a new thread. Fails when no device
    /// can be opened.
    pub fn spawn(events: UnboundedSender<Event>) -> Result<Self> {
        let (commands, command_rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), String>>(1);

        let worker = thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || {
                let stream = match open_stream() {
                    Ok(stream) => {
                        let _ = ready_tx.send(Ok(()));
                        stream
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(format!("{e:#}")));
                        return;
                    }
                };
                AudioWorker::new(stream, events).run(command_rx);
            })
            .context("spawning audio thread")?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                tracing::info!("Audio output opened");
                Ok(Self {
                    commands,
                    worker: Some(worker),
                })
            }
            Ok(Err(message)) => Err(anyhow!("audio output unavailable: {message}")),
            Err(_) => Err(anyhow!("audio thread exited during startup")),
        }
    }

    pub fn send(&self, command: AudioCommand) {
        if self.commands.send(command).is_err() {
            tracing::warn!("Audio thread is gone, command dropped");
        }
    }
}

impl Drop for AudioBackend {
    fn drop(&mut self) {
        let _ = self.commands.send(AudioCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn open_stream() -> Result<OutputStream> {
    OutputStreamBuilder::from_default_device()
        .context("finding audio device")?
        .open_stream_or_fallback()
        .context("opening audio stream")
}

struct AudioWorker {
    stream: OutputStream,
    sink: Sink,
    events: UnboundedSender<Event>,
    volume: f32,
    /// Id of the last `Load`; every event about the current sink carries it
    load_id: u64,
    loaded: bool,
    playing: bool,
}

impl AudioWorker {
    fn new(stream: OutputStream, events: UnboundedSender<Event>) -> Self {
        let sink = Sink::connect_new(stream.mixer());
        Self {
            stream,
            sink,
            events,
            volume: 1.0,
            load_id: 0,
            loaded: false,
            playing: false,
        }
    }

    fn run(mut self, commands: Receiver<AudioCommand>) {
        loop {
            // Commands are handled as they come, the poll runs at least every interval
            match commands.recv_timeout(POLL_INTERVAL) {
                Ok(AudioCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Ok(command) => self.handle(command),
                Err(RecvTimeoutError::Timeout) => {}
            }
            if !self.poll() {
                break;
            }
        }
        self.sink.stop();
        tracing::debug!("Audio thread stopped");
    }

    fn handle(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Load { load_id, url } => self.load(load_id, &url),
            AudioCommand::Play => {
                self.playing = true;
                self.sink.play();
            }
            AudioCommand::Pause => {
                self.playing = false;
                self.sink.pause();
            }
            AudioCommand::Seek(seconds) => {
                if let Err(e) = self.sink.try_seek(Duration::from_secs_f64(seconds.max(0.0))) {
                    tracing::warn!(error = %e, seconds, "Seek failed");
                }
            }
            AudioCommand::SetVolume(ratio) => {
                self.volume = ratio;
                self.sink.set_volume(ratio);
            }
            AudioCommand::Shutdown => {}
        }
    }

    /// Replace the current source. The previous position is discarded.
    fn load(&mut self, load_id: u64, url: &str) {
        self.load_id = load_id;
        // A fresh sink resets the position reported by get_pos
        self.sink.stop();
        self.sink = Sink::connect_new(self.stream.mixer());
        self.sink.set_volume(self.volume);
        self.sink.pause();
        self.loaded = false;

        let source = File::open(url)
            .with_context(|| format!("opening {url}"))
            .and_then(|file| {
                Decoder::new(BufReader::new(file)).with_context(|| format!("decoding {url}"))
            });

        match source {
            Ok(source) => {
                if let Some(duration) = source.total_duration() {
                    self.emit(AudioEvent::MetadataLoaded {
                        load_id,
                        duration: duration.as_secs_f64(),
                    });
                }
                self.sink.append(source);
                self.loaded = true;
                if self.playing {
                    self.sink.play();
                }
                tracing::debug!(url, load_id, "Audio source loaded");
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Cannot load audio source");
                self.emit(AudioEvent::Failed(format!("Cannot play {url}")));
            }
        }
    }

    /// Report position and detect the end of the track. Returns false once the
    /// event channel is closed.
    fn poll(&mut self) -> bool {
        if !self.loaded {
            return !self.events.is_closed();
        }
        // An empty sink while playing means the source ran out
        if self.playing && self.sink.empty() {
            self.loaded = false;
            return self.emit(AudioEvent::Ended {
                load_id: self.load_id,
            });
        }
        self.emit(AudioEvent::PositionChanged {
            load_id: self.load_id,
            seconds: self.sink.get_pos().as_secs_f64(),
        })
    }

    fn emit(&self, event: AudioEvent) -> bool {
        self.events.send(Event::Audio(event)).is_ok()
    }
}
