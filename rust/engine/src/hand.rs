use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Ranked value of a hand. Field order matters: the derived `Ord` compares
/// the category first, then the tiebreak ranks most-significant first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    // decisive ranks ordered high -> low, unused slots are 0
    pub tiebreak: [u8; 5],
}

impl HandResult {
    fn new(category: Category, ranks: &[u8]) -> Self {
        let mut tiebreak = [0u8; 5];
        for (slot, &r) in tiebreak.iter_mut().zip(ranks) {
            *slot = r;
        }
        Self { category, tiebreak }
    }

    /// Rank of the primary group (or top card for high-card hands).
    pub fn decisive_rank(&self) -> u8 {
        self.tiebreak[0]
    }

    /// The significant tiebreak ranks, without zero padding.
    pub fn ranks(&self) -> Vec<u8> {
        self.tiebreak.iter().copied().filter(|&r| r != 0).collect()
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.ranks())
    }
}

/// Ranks a player's hole cards together with 0-5 community cards.
pub fn evaluate_hand(hole: &[Card; 2], community: &[Card]) -> HandResult {
    let mut all = Vec::with_capacity(7);
    all.extend_from_slice(hole);
    all.extend_from_slice(community);
    evaluate_cards(&all)
}

/// Best-five ranking over any 2..=7 cards.
pub fn evaluate_cards(cards: &[Card]) -> HandResult {
    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask = 0u16;
    for c in cards {
        let r = c.rank.value();
        let s = c.suit.index();
        rank_counts[usize::from(r)] += 1;
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << r;
        rank_mask |= 1 << r;
    }

    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);
    let straight = straight_high(rank_mask);

    // Straight flush: the run must exist inside the flush suit itself
    if let (Some(s), Some(_)) = (flush_suit, straight) {
        if let Some(high) = straight_high(suit_masks[s]) {
            let category = if high == 14 {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return HandResult::new(category, &[high]);
        }
    }

    // Four of a kind
    if let Some(quad) = highest_with(&rank_counts, |c| c == 4) {
        let ranks: Vec<u8> = std::iter::once(quad)
            .chain(present_desc(&rank_counts, &[quad]).take(1))
            .collect();
        return HandResult::new(Category::FourOfAKind, &ranks);
    }

    // Full house: highest trips, then the best remaining pair-or-better
    let trips = highest_with(&rank_counts, |c| c == 3);
    if let Some(t) = trips {
        let pair = (2..=14u8)
            .rev()
            .find(|&r| r != t && rank_counts[usize::from(r)] >= 2);
        if let Some(p) = pair {
            return HandResult::new(Category::FullHouse, &[t, p]);
        }
    }

    // Flush
    if let Some(s) = flush_suit {
        let ranks: Vec<u8> = (2..=14u8)
            .rev()
            .filter(|&r| suit_masks[s] & (1 << r) != 0)
            .take(5)
            .collect();
        return HandResult::new(Category::Flush, &ranks);
    }

    // Straight
    if let Some(high) = straight {
        return HandResult::new(Category::Straight, &[high]);
    }

    // Three of a kind
    if let Some(t) = trips {
        let ranks: Vec<u8> = std::iter::once(t)
            .chain(present_desc(&rank_counts, &[t]).take(2))
            .collect();
        return HandResult::new(Category::ThreeOfAKind, &ranks);
    }

    let pairs: Vec<u8> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[usize::from(r)] == 2)
        .take(2)
        .collect();
    match pairs[..] {
        [high, low] => {
            let ranks: Vec<u8> = [high, low]
                .into_iter()
                .chain(present_desc(&rank_counts, &[high, low]).take(1))
                .collect();
            HandResult::new(Category::TwoPair, &ranks)
        }
        [p] => {
            let ranks: Vec<u8> = std::iter::once(p)
                .chain(present_desc(&rank_counts, &[p]).take(3))
                .collect();
            HandResult::new(Category::OnePair, &ranks)
        }
        _ => {
            let highs: Vec<u8> = present_desc(&rank_counts, &[]).take(5).collect();
            HandResult::new(Category::HighCard, &highs)
        }
    }
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

fn highest_with(rank_counts: &[u8; 15], pred: impl Fn(u8) -> bool) -> Option<u8> {
    (2..=14u8)
        .rev()
        .find(|&r| pred(rank_counts[usize::from(r)]))
}

fn present_desc<'a>(
    rank_counts: &'a [u8; 15],
    exclude: &'a [u8],
) -> impl Iterator<Item = u8> + 'a {
    (2..=14u8)
        .rev()
        .filter(move |&r| rank_counts[usize::from(r)] > 0 && !exclude.contains(&r))
}

/// Highest straight in a rank bitmask (bit n = rank n). The wheel reports 5.
fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    // Ace also plays low
    if m & (1 << 14) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        m & window == window
    })
}
