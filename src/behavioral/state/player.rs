//! Audio player context and its button rules.

use super::history::TransitionLog;
use super::State;
use tracing::{debug, warn};

crate::state_enum! {
    /// Behaviour variants of the [`AudioPlayer`].
    pub enum PlayerState {
        Locked,
        Ready,
        Playing,
    }
}

const LOCKED: &str = "Locked...";

/// Ordered track names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<String>,
}

impl Playlist {
    pub fn new<I, T>(tracks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tracks: tracks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }
}

impl Default for Playlist {
    /// "Track 1" through "Track 12".
    fn default() -> Self {
        Self::new((1..=12).map(|i| format!("Track {}", i)))
    }
}

/// Player whose `lock`, `play`, `next` and `previous` buttons behave
/// differently in each [`PlayerState`].
///
/// | state   | lock                        | play                    | next / previous      |
/// |---------|-----------------------------|-------------------------|----------------------|
/// | Locked  | stays Locked                | -> Ready                | ignored              |
/// | Ready   | -> Locked                   | -> Playing, starts track| selects track        |
/// | Playing | -> Locked, rewinds playlist | -> Ready (pause)        | switches track       |
#[derive(Clone, Debug)]
pub struct AudioPlayer {
    state: PlayerState,
    playlist: Playlist,
    current_track: usize,
    log: TransitionLog<PlayerState>,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    /// Player in the `Ready` state with the default playlist.
    pub fn new() -> Self {
        Self::with_playlist(Playlist::default())
    }

    pub fn with_playlist(playlist: Playlist) -> Self {
        Self {
            state: PlayerState::Ready,
            playlist,
            current_track: 0,
            log: TransitionLog::new(),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn current_track(&self) -> Option<&str> {
        self.playlist.get(self.current_track)
    }

    pub fn transitions(&self) -> &TransitionLog<PlayerState> {
        &self.log
    }

    pub fn lock(&mut self) -> String {
        match self.state {
            PlayerState::Locked => {
                warn!("lock pressed while already locked");
                LOCKED.to_string()
            }
            PlayerState::Ready => {
                self.change_state(PlayerState::Locked);
                LOCKED.to_string()
            }
            PlayerState::Playing => {
                self.change_state(PlayerState::Locked);
                self.current_track = 0;
                "Stop playing".to_string()
            }
        }
    }

    pub fn play(&mut self) -> String {
        match self.state {
            PlayerState::Locked => {
                self.change_state(PlayerState::Ready);
                "Ready".to_string()
            }
            PlayerState::Ready => {
                let Some(track) = self.current_track() else {
                    warn!("play pressed with an empty playlist");
                    return "Playlist is empty".to_string();
                };
                let message = format!("Playing {}", track);
                self.change_state(PlayerState::Playing);
                message
            }
            PlayerState::Playing => {
                self.change_state(PlayerState::Ready);
                "Paused...".to_string()
            }
        }
    }

    pub fn next(&mut self) -> String {
        self.skip(true)
    }

    pub fn previous(&mut self) -> String {
        self.skip(false)
    }

    fn skip(&mut self, forward: bool) -> String {
        if self.state == PlayerState::Locked {
            warn!(forward, "track change ignored while locked");
            return LOCKED.to_string();
        }

        let len = self.playlist.len();
        if len == 0 {
            return "Playlist is empty".to_string();
        }
        self.current_track = if forward {
            (self.current_track + 1) % len
        } else {
            (self.current_track + len - 1) % len
        };

        let track = self.current_track().unwrap_or_default();
        debug!(track, "track changed");
        match self.state {
            PlayerState::Playing => format!("Playing {}", track),
            _ => format!("Selected {}", track),
        }
    }

    fn change_state(&mut self, to: PlayerState) {
        debug!(from = self.state.name(), to = to.name(), "player state changed");
        self.log.record(self.state, to);
        self.state = to;
    }
}
