//! Player deck construction.

use std::ops::Range;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::PlayerCard;
use crate::core::Randomness;

/// How a shuffled card list is partitioned for epidemic insertion.
///
/// Ranges index the shuffled list, not the finished deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLayout {
    /// Cards kept aside for the initial deal, taken from the top.
    pub reserved: usize,

    /// One range per epidemic, covering the rest of the list in order.
    pub chunks: Vec<Range<usize>>,
}

impl DeckLayout {
    /// Total cards covered by the reserve and the chunks.
    #[must_use]
    pub fn covered(&self) -> usize {
        self.chunks.last().map_or(self.reserved, |c| c.end)
    }
}

/// Partition `total` cards into the initial-deal reserve and `epidemics`
/// chunks.
///
/// Chunks hold `n / epidemics` cards where `n` is what's left after the
/// reserve; the first `n % epidemics` chunks take one extra.
///
/// ```
/// use outbreak_engine::decks::chunk_layout;
///
/// let layout = chunk_layout(53, 8, 5);
/// assert_eq!(layout.chunks, vec![8..17, 17..26, 26..35, 35..44, 44..53]);
/// ```
#[must_use]
pub fn chunk_layout(total: usize, reserved: usize, epidemics: usize) -> DeckLayout {
    let reserved = reserved.min(total);
    if epidemics == 0 {
        return DeckLayout {
            reserved,
            chunks: Vec::new(),
        };
    }

    let n = total - reserved;
    let chunk_size = n / epidemics;
    let larger = n % epidemics;

    let mut start = reserved;
    let chunks = (0..epidemics)
        .map(|index| {
            let len = chunk_size + usize::from(index < larger);
            let chunk = start..start + len;
            start += len;
            chunk
        })
        .collect();

    DeckLayout { reserved, chunks }
}

/// Splice one epidemic marker into each chunk of `shuffled`.
///
/// The cut for a chunk `[start, end)` is `rand_int(start, end)`; the marker
/// goes before the card at the cut. Relative order of the other cards is
/// preserved, so dropping the markers gives back `shuffled`.
pub fn insert_epidemics<R: Randomness>(
    shuffled: &[PlayerCard],
    layout: &DeckLayout,
    rng: &mut R,
) -> Vector<PlayerCard> {
    let mut deck: Vector<PlayerCard> = shuffled[..layout.reserved].iter().cloned().collect();

    for chunk in &layout.chunks {
        let cut = rng.rand_int(chunk.start, chunk.end);
        deck.extend(shuffled[chunk.start..cut].iter().cloned());
        deck.push_back(PlayerCard::Epidemic);
        deck.extend(shuffled[cut..chunk.end].iter().cloned());
    }

    // Only non-empty without epidemics
    deck.extend(shuffled[layout.covered()..].iter().cloned());
    deck
}

/// Shuffle the player cards and splice in the epidemics.
///
/// Returns the finished draw pile (top first) and the layout used.
pub fn build_player_deck<R: Randomness>(
    cards: &[PlayerCard],
    reserved: usize,
    epidemics: usize,
    rng: &mut R,
) -> (Vector<PlayerCard>, DeckLayout) {
    let mut shuffled = cards.to_vec();
    rng.shuffle(&mut shuffled);

    let layout = chunk_layout(shuffled.len(), reserved, epidemics);
    let deck = insert_epidemics(&shuffled, &layout, rng);

    tracing::debug!(
        cards = deck.len(),
        reserved = layout.reserved,
        epidemics,
        "built player deck"
    );
    (deck, layout)
}
