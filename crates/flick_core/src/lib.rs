//! Flick Core
//!
//! A two-card swipe deck: the top card follows the pointer, tilts and
//! shrinks, and is either flung off to one side or sprung back to center.
//! Each completed fling advances the deck by one item.
//!
//! # Modules
//!
//! - [`deck`]: the card stack controller and advance protocol
//! - [`gesture`]: press/drag/release classification
//! - [`mapper`]: rotation and companion scale derived from the drag offset
//! - [`projector`]: read-only card views for a renderer
//! - [`feed`]: item providers, list cleaning, and snapshots
//!
//! # Example
//!
//! ```
//! use flick_core::{CardDeck, DeckFrame, Item};
//!
//! let mut deck = CardDeck::with_items(
//!     vec![Item::new("a", "A"), Item::new("b", "B"), Item::new("c", "C")].into(),
//! );
//! deck.like();
//! while deck.tick(1.0 / 60.0).animating {}
//!
//! assert_eq!(deck.current_index(), 1);
//! let frame = DeckFrame::project(&deck);
//! assert_eq!(frame.top().and_then(|c| c.item).map(Item::label), Some("B"));
//! ```

pub mod config;
pub mod deck;
pub mod error;
pub mod feed;
pub mod gesture;
pub mod input;
pub mod item;
pub mod mapper;
pub mod projector;

pub use config::{DeckConfig, SpringProfile};
pub use deck::{CardDeck, Commit, CommitSource, FrameReport};
pub use error::{FeedError, Result};
pub use feed::{Feed, FeedFilter, ItemProvider, JsonFileProvider, StaticProvider};
pub use gesture::{
    classify_release, Direction, GestureAction, GesturePhase, GestureTracker, Release,
};
pub use input::DeckInput;
pub use item::{Item, ItemList};
pub use mapper::{companion_scale, rotation};
pub use projector::{CardView, DeckFrame};
