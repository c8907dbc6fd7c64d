//! Read-only projection of a deck into two card views

use crate::deck::CardDeck;
use crate::item::Item;
use std::fmt;

/// Transform and content for one rendered card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardView<'a> {
    /// Item index this card shows; also its render key
    pub key: usize,
    /// `None` once the deck runs past the end of the list
    pub item: Option<&'a Item>,
    pub translate_x: f32,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
}

/// What to draw this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckFrame<'a> {
    /// No item list yet
    Loading,
    Ready {
        /// Draggable card on top
        top: CardView<'a>,
        /// Card beneath, previewing the next item
        companion: CardView<'a>,
    },
}

impl<'a> DeckFrame<'a> {
    pub fn project(deck: &'a CardDeck) -> Self {
        let Some(items) = deck.items() else {
            return DeckFrame::Loading;
        };
        let index = deck.current_index();
        let offset = deck.drag_offset();

        DeckFrame::Ready {
            top: CardView {
                key: index,
                item: items.get(index),
                translate_x: offset,
                rotation: deck.rotation(),
                scale: deck.press_scale(),
            },
            companion: CardView {
                key: index + 1,
                item: items.get(index + 1),
                translate_x: 0.0,
                rotation: 0.0,
                scale: deck.companion_scale(),
            },
        }
    }

    pub fn top(&self) -> Option<&CardView<'a>> {
        match self {
            DeckFrame::Ready { top, .. } => Some(top),
            DeckFrame::Loading => None,
        }
    }

    pub fn companion(&self) -> Option<&CardView<'a>> {
        match self {
            DeckFrame::Ready { companion, .. } => Some(companion),
            DeckFrame::Loading => None,
        }
    }
}

impl fmt::Display for CardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.item.map(Item::label).unwrap_or("-");
        write!(
            f,
            "#{} {:<16} x={:>8.2} rot={:>6.2}° scale={:.3}",
            self.key, label, self.translate_x, self.rotation, self.scale
        )
    }
}

impl fmt::Display for DeckFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckFrame::Loading => f.write_str("loading…"),
            DeckFrame::Ready { top, companion } => {
                write!(f, "top  {top}\nnext {companion}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;

    #[test]
    fn test_loading_frame() {
        let deck = CardDeck::new(DeckConfig::default());
        assert_eq!(DeckFrame::project(&deck), DeckFrame::Loading);
        assert_eq!(DeckFrame::project(&deck).to_string(), "loading…");
    }

    #[test]
    fn test_frame_follows_drag() {
        let mut deck = CardDeck::with_items(
            vec![Item::new("a", "Alpha"), Item::new("b", "Beta")].into(),
        );
        deck.press_start();
        deck.drag_move(150.0);

        let frame = DeckFrame::project(&deck);
        let top = frame.top().unwrap();
        assert_eq!(top.item.map(Item::label), Some("Alpha"));
        assert_eq!(top.translate_x, 150.0);
        assert!((top.rotation - 9.0).abs() < 1e-4);

        let companion = frame.companion().unwrap();
        assert_eq!(companion.key, 1);
        assert_eq!(companion.item.map(Item::label), Some("Beta"));
        assert!((companion.scale - 0.85).abs() < 1e-4);
    }

    #[test]
    fn test_last_card_has_empty_companion() {
        let deck = CardDeck::with_items(vec![Item::new("a", "Alpha")].into());
        let frame = DeckFrame::project(&deck);
        assert!(frame.top().unwrap().item.is_some());
        assert!(frame.companion().unwrap().item.is_none());
        assert!(frame.to_string().contains("next #1 -"));
    }
}
