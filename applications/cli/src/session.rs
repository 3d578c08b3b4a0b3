//! Terminal session
//!
//! Parses line commands and runs them against one shared player bound to a
//! simulated media element. The configured catalogue stands in for the
//! episode list screens.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use podcastr_playback::{
    Episode, PlayerStore, RandomPicker, SeededPicker, SharedPlayer, ShufflePicker,
};
use podcastr_transport::{MediaCall, MediaEvent, PlayerView, SimulatedMedia, TransportBinder};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::debug;

/// A line command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the catalogue
    List,
    /// Play catalogue entry `n` on its own
    Play(usize),
    /// Queue the whole catalogue, starting at `n`
    PlayList(usize),
    Toggle,
    Next,
    Prev,
    Loop,
    Shuffle,
    Speed,
    /// Jump to a position, in seconds
    Seek(f64),
    /// Let simulated time pass, in seconds
    Tick(f64),
    /// Simulate the element reaching the end
    End,
    Clear,
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(AppError::UnknownCommand(String::new()));
        };

        let command = match name {
            "list" | "ls" => Command::List,
            "play" => Command::Play(parse_arg("play", parts.next())?),
            "playlist" => Command::PlayList(parse_arg("playlist", parts.next())?),
            "toggle" | "p" => Command::Toggle,
            "next" | "n" => Command::Next,
            "prev" => Command::Prev,
            "loop" => Command::Loop,
            "shuffle" => Command::Shuffle,
            "speed" => Command::Speed,
            "seek" => Command::Seek(parse_seconds("seek", parts.next())?),
            "tick" => Command::Tick(parse_seconds("tick", parts.next())?),
            "end" => Command::End,
            "clear" => Command::Clear,
            "status" | "s" => Command::Status,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = parts.next() {
            return Err(AppError::InvalidArgument {
                command: command_name(&command),
                reason: format!("unexpected '{}'", extra),
            });
        }

        Ok(command)
    }
}

fn parse_arg<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let arg = arg.ok_or_else(|| AppError::InvalidArgument {
        command,
        reason: "missing argument".to_string(),
    })?;

    arg.parse().map_err(|e: T::Err| AppError::InvalidArgument {
        command,
        reason: format!("'{}': {}", arg, e),
    })
}

fn parse_seconds(command: &'static str, arg: Option<&str>) -> Result<f64> {
    let seconds: f64 = parse_arg(command, arg)?;
    if !seconds.is_finite() {
        return Err(AppError::InvalidArgument {
            command,
            reason: format!("'{}' is not a finite number of seconds", seconds),
        });
    }
    Ok(seconds)
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List => "list",
        Command::Play(_) => "play",
        Command::PlayList(_) => "playlist",
        Command::Toggle => "toggle",
        Command::Next => "next",
        Command::Prev => "prev",
        Command::Loop => "loop",
        Command::Shuffle => "shuffle",
        Command::Speed => "speed",
        Command::Seek(_) => "seek",
        Command::Tick(_) => "tick",
        Command::End => "end",
        Command::Clear => "clear",
        Command::Status => "status",
        Command::Quit => "quit",
    }
}

/// What the terminal should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and read the next line
    Text(String),
    Quit,
}

/// One terminal session over a shared player
pub struct Session {
    player: SharedPlayer,
    binder: TransportBinder<SimulatedMedia>,
    catalogue: Vec<Episode>,
}

impl Session {
    /// Mount a simulated element on `player`
    pub fn new(player: SharedPlayer, catalogue: Vec<Episode>) -> Self {
        let mut binder = TransportBinder::new();
        player.with(|store| binder.mount(SimulatedMedia::new(), store));

        let mut session = Self {
            player,
            binder,
            catalogue,
        };
        session.settle();
        session
    }

    /// Build the player from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let picker: Box<dyn ShufflePicker> = match config.player.seed {
            Some(seed) => Box::new(SeededPicker::new(seed)),
            None => Box::new(RandomPicker),
        };
        let store = PlayerStore::with_picker(config.player.player_config(), picker);

        Self::new(SharedPlayer::from_store(store), config.episodes.clone())
    }

    pub fn player(&self) -> &SharedPlayer {
        &self.player
    }

    pub fn binder(&self) -> &TransportBinder<SimulatedMedia> {
        &self.binder
    }

    pub fn catalogue(&self) -> &[Episode] {
        &self.catalogue
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        debug!(?command, "Executing command");

        match command {
            Command::List => return Ok(Reply::Text(self.catalogue_listing())),
            Command::Status => {}
            Command::Quit => return Ok(Reply::Quit),
            Command::Play(index) => {
                let episode = self.catalogue_entry(index)?.clone();
                self.act(|store| store.play(episode));
            }
            Command::PlayList(index) => {
                let episodes = self.catalogue.clone();
                self.act(|store| store.play_list(episodes, index))?;
            }
            Command::Toggle => self.act(PlayerStore::toggle_play),
            Command::Next => self.act(PlayerStore::play_next),
            Command::Prev => self.act(PlayerStore::play_previous),
            Command::Loop => self.act(PlayerStore::toggle_loop),
            Command::Shuffle => self.act(PlayerStore::toggle_shuffle),
            Command::Speed => self.act(PlayerStore::toggle_speed),
            Command::Clear => self.act(PlayerStore::clear_player_state),
            Command::Seek(seconds) => {
                let binder = &mut self.binder;
                self.player.with(|store| binder.seek(seconds, store));
            }
            Command::Tick(seconds) => self.tick(seconds),
            Command::End => self.deliver(MediaEvent::Ended),
        }

        Ok(Reply::Text(self.status_line()))
    }

    /// One-line summary of the player
    pub fn status_line(&self) -> String {
        let view = self.player.with(|store| self.binder.view(store));
        let (index, len) = self
            .player
            .with(|store| (store.current_index(), store.queue_len()));

        match view {
            PlayerView::Empty { .. } => "stopped | nothing queued".to_string(),
            PlayerView::NowPlaying(now) => format!(
                "{} [{}/{}] {} | {}/{}s | loop {} | shuffle {} | {}",
                if now.is_playing { "playing" } else { "paused" },
                index + 1,
                len,
                now.title,
                now.progress,
                now.duration,
                on_off(now.is_looping),
                on_off(now.is_shuffling),
                now.controls.speed_label,
            ),
        }
    }

    fn catalogue_entry(&self, index: usize) -> Result<&Episode> {
        self.catalogue.get(index).ok_or(AppError::NoSuchEpisode {
            index,
            len: self.catalogue.len(),
        })
    }

    fn catalogue_listing(&self) -> String {
        if self.catalogue.is_empty() {
            return "catalogue is empty".to_string();
        }

        let current_url = self
            .player
            .with(|store| store.current_episode().map(|e| e.url.clone()));

        let mut out = String::new();
        for (index, episode) in self.catalogue.iter().enumerate() {
            let marker = if current_url.as_deref() == Some(episode.url.as_str()) {
                '>'
            } else {
                ' '
            };
            let _ = writeln!(
                out,
                "{} {:>3}  {} ({}) {}s",
                marker, index, episode.title, episode.members, episode.duration
            );
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Run a store action and mirror its changes onto the element
    fn act<R>(&mut self, action: impl FnOnce(&mut PlayerStore) -> R) -> R {
        let binder = &mut self.binder;
        let result = self.player.with_mut(|store| {
            let result = action(store);
            binder.sync(store);
            result
        });
        self.settle();
        result
    }

    fn deliver(&mut self, event: MediaEvent) {
        let binder = &mut self.binder;
        self.player
            .with_mut(|store| binder.handle_event(event, store));
        self.settle();
    }

    fn tick(&mut self, seconds: f64) {
        let events = self
            .binder
            .handle_mut()
            .map(|media| media.advance(seconds))
            .unwrap_or_default();

        for event in events {
            self.deliver(event);
        }
    }

    /// Finish loading a newly set source, the way a browser reports
    /// `loadedmetadata` once it knows the duration
    fn settle(&mut self) {
        let duration = self
            .player
            .with(|store| store.current_episode().map(|e| e.duration));

        let Some(media) = self.binder.handle_mut() else {
            return;
        };
        let loaded = media
            .calls()
            .iter()
            .any(|call| matches!(call, MediaCall::SetSource(_)));
        media.clear_calls();

        if let (true, Some(duration)) = (loaded, duration) {
            media.set_duration(duration as f64);
            self.deliver(MediaEvent::MetadataLoaded);
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
