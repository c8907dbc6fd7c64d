//! Deck tuning
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use crate::feed::FeedFilter;
use flick_animation::{RestThresholds, SpringConfig};
use serde::{Deserialize, Serialize};

/// A spring described the way mobile toolkits describe them
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SpringProfile {
    pub tension: f32,
    pub friction: f32,
    /// Distance from target below which the spring may rest
    pub rest_displacement: f32,
    /// Speed below which the spring may rest
    pub rest_speed: f32,
}

impl SpringProfile {
    /// Snap-back and press springs
    pub fn settle() -> Self {
        Self {
            tension: 40.0,
            friction: 7.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Dismissal fling
    pub fn fling() -> Self {
        Self {
            tension: 5.0,
            friction: 7.0,
            rest_displacement: 100.0,
            rest_speed: 100.0,
        }
    }

    pub fn spring_config(&self) -> SpringConfig {
        SpringConfig::from_tension_friction(self.tension, self.friction)
            .with_rest(RestThresholds::new(self.rest_displacement, self.rest_speed))
    }
}

/// Configuration for a [`CardDeck`](crate::deck::CardDeck)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Release offset a drag must exceed to dismiss
    pub commit_threshold: f32,
    /// Offset a dismissed card flies to
    pub fling_distance: f32,
    /// Scale of the top card while pressed
    pub pressed_scale: f32,
    pub settle_spring: SpringProfile,
    pub fling_spring: SpringProfile,
    pub feed: FeedFilter,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 250.0,
            fling_distance: 500.0,
            pressed_scale: 0.95,
            settle_spring: SpringProfile::settle(),
            fling_spring: SpringProfile::fling(),
            feed: FeedFilter::default(),
        }
    }
}
