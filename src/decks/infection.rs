//! Infection draw and discard piles.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::InfectionCard;
use crate::core::Randomness;

/// Which end of the infection draw pile a card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawEnd {
    /// Ordinary draws.
    Front,
    /// Epidemic draws.
    Back,
}

/// Draw one infection card and put it on top of the discard pile.
///
/// Returns the card, or `None` when the draw pile is empty.
pub fn draw_infection_card(
    draw: &mut Vector<InfectionCard>,
    discard: &mut Vector<InfectionCard>,
    end: DrawEnd,
) -> Option<InfectionCard> {
    let card = match end {
        DrawEnd::Front => draw.pop_front(),
        DrawEnd::Back => draw.pop_back(),
    }?;
    discard.push_front(card.clone());
    Some(card)
}

/// Shuffle the discard pile and stack it on top of the draw pile.
///
/// The discard pile ends up empty. Returns the shuffled cards in their new
/// order, top first.
pub fn restack_infection_discard<R: Randomness>(
    draw: &mut Vector<InfectionCard>,
    discard: &mut Vector<InfectionCard>,
    rng: &mut R,
) -> Vec<InfectionCard> {
    let mut cards: Vec<InfectionCard> = std::mem::take(discard).into_iter().collect();
    rng.shuffle(&mut cards);

    let mut stacked: Vector<InfectionCard> = cards.iter().cloned().collect();
    stacked.append(std::mem::take(draw));
    *draw = stacked;
    cards
}
