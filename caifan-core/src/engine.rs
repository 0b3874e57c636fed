//! The bracket state machine.
//!
//! A [`Session`] holds the items still competing in the current round, the
//! winners waiting for the next round, and the pairing currently offered to
//! the user. [`Session::begin`] seeds a shuffled bracket; [`Session::resolve_pick`]
//! folds a user choice back in and drives the bracket forward. Both return the
//! [`Effect`]s the delivery layer should render, in order.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::types::{Effect, Item};

/// Sent once when a tournament is (re)started.
pub const MSG_STARTED: &str = "🍽 Tournament started!";
/// Sent exactly once at each round boundary.
pub const MSG_NEXT_ROUND: &str = "➡️ Next round!";
/// Defensive notification when no pairing and no winner is possible.
pub const MSG_NOT_ENOUGH: &str = "Not enough dishes left. Send /start to restart.";

/// Per-chat bracket state. Pairing order is frozen at [`Session::begin`] time;
/// nothing re-shuffles mid-tournament.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    current_round: Vec<Item>,
    next_round: Vec<Item>,
    /// The pairing most recently offered to the user, if any. Picks that do
    /// not match it (stale or forged buttons) are ignored.
    pending: Option<(Item, Item)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new tournament over `items`, discarding any prior state.
    /// Produces a uniformly random permutation and immediately drives the
    /// first pairing (or the winner, for a single entrant).
    pub fn begin(&mut self, items: impl IntoIterator<Item = Item>) -> Vec<Effect> {
        let mut entrants: Vec<Item> = items.into_iter().collect();
        entrants.shuffle(&mut rand::rng());

        info!(entrants = entrants.len(), "tournament started");

        self.current_round = entrants;
        self.next_round.clear();
        self.pending = None;

        let mut effects = vec![Effect::Notify(MSG_STARTED.to_string())];
        effects.extend(self.advance());
        effects
    }

    /// Records the user's choice from the outstanding pairing and advances the
    /// bracket. Picks with no pairing outstanding, or naming an item that was
    /// not offered, are ignored without touching state.
    pub fn resolve_pick(&mut self, chosen: &str) -> Vec<Effect> {
        let Some((a, b)) = self.pending.take() else {
            debug!(chosen, "pick with no pairing outstanding, ignoring");
            return Vec::new();
        };

        if chosen != a && chosen != b {
            warn!(chosen, offered_a = %a, offered_b = %b, "pick does not match the offered pairing, ignoring");
            self.pending = Some((a, b));
            return Vec::new();
        }

        self.next_round.push(chosen.to_string());
        self.advance()
    }

    /// True once a winner has been announced (or before any `begin`).
    pub fn is_idle(&self) -> bool {
        self.current_round.is_empty() && self.next_round.is_empty() && self.pending.is_none()
    }

    /// Drives the bracket until it can emit a pairing, a winner, or the
    /// defensive "not enough items" notification. Rolls `next_round` into
    /// `current_round` at round boundaries, emitting the round notification
    /// exactly once per roll; a leftover item in an odd-sized round gets a
    /// bye into the next round rather than being dropped.
    fn advance(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();

        loop {
            if self.current_round.len() >= 2 {
                let a = self.current_round.remove(0);
                let b = self.current_round.remove(0);
                debug!(a = %a, b = %b, remaining = self.current_round.len(), "presenting pairing");
                self.pending = Some((a.clone(), b.clone()));
                effects.push(Effect::PresentChoice(a, b));
                return effects;
            }

            if self.next_round.is_empty() {
                match self.current_round.pop() {
                    Some(winner) => {
                        info!(winner = %winner, "tournament finished");
                        effects.push(Effect::AnnounceWinner(winner));
                    }
                    None => effects.push(Effect::Notify(MSG_NOT_ENOUGH.to_string())),
                }
                return effects;
            }

            // Round boundary. A leftover unpaired item advances as a bye.
            if let Some(leftover) = self.current_round.pop() {
                debug!(item = %leftover, "odd round, leftover item gets a bye");
                self.next_round.push(leftover);
            }
            self.current_round = std::mem::take(&mut self.next_round);
            effects.push(Effect::Notify(MSG_NEXT_ROUND.to_string()));
        }
    }
}
