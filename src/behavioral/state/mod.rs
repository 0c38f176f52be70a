//! State pattern: an audio player whose buttons change meaning with its state.
//!
//! The closed set of player states is a plain enum implementing [`State`];
//! the [`AudioPlayer`] context holds exactly one of them at a time and
//! dispatches every button press on it.
//!
//! # Example
//!
//! ```rust
//! use patternbook::behavioral::state::{AudioPlayer, PlayerState};
//!
//! let mut player = AudioPlayer::new();
//! assert_eq!(player.state(), PlayerState::Ready);
//!
//! assert_eq!(player.play(), "Playing Track 1");
//! assert_eq!(player.next(), "Playing Track 2");
//! assert_eq!(player.lock(), "Stop playing");
//! assert_eq!(player.state(), PlayerState::Locked);
//! ```

mod history;
mod macros;
mod player;

pub use history::{TransitionLog, TransitionRecord};
pub use player::{AudioPlayer, PlayerState, Playlist};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the named behaviour variants of a state-pattern context.
///
/// # Example
///
/// ```rust
/// use patternbook::behavioral::state::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert!(!Door::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Display name of the variant.
    fn name(&self) -> &str;

    /// Whether the context stops accepting transitions in this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
