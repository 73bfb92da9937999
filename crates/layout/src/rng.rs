use dobble_types::CardIndex;
use rand::SeedableRng;
use rand::rngs::StdRng;

const STREAM_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;

/// An independent, reproducible random stream for one card.
///
/// The stream depends only on the deck seed and the card's index, never on
/// which thread packs the card or in which order.
pub fn card_rng(seed: u64, card: CardIndex) -> StdRng {
    let stream = (card.get() as u64).wrapping_add(1).wrapping_mul(STREAM_SPACING);
    StdRng::seed_from_u64(seed ^ stream)
}
