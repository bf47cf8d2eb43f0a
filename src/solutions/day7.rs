use anyhow::{bail, ensure, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

pub fn day7(input: &str) -> Result<(u64, u64)> {
    let mut hands = Vec::new();
    for line in input.lines() {
        let (cards, bid) = line.split_once(' ').context("missing bid")?;
        let cards = cards.as_bytes();
        ensure!(cards.len() == 5, "hand {cards:?} is not five cards");
        hands.push((<[u8; 5]>::try_from(cards)?, bid.parse::<u64>()?));
    }
    Ok((total_winnings(&hands, false)?, total_winnings(&hands, true)?))
}

fn total_winnings(hands: &[([u8; 5], u64)], jokers: bool) -> Result<u64> {
    let mut ranked = Vec::with_capacity(hands.len());
    for &(cards, bid) in hands {
        let mut values = [0u8; 5];
        for (value, &card) in values.iter_mut().zip(&cards) {
            *value = card_value(card, jokers)?;
        }
        ranked.push(((classify(&values), values), bid));
    }
    // Ties within a hand type fall back to card-by-card comparison, which
    // the tuple key gives us for free.
    ranked.sort_unstable_by_key(|&(key, _)| key);
    Ok(ranked
        .iter()
        .enumerate()
        .map(|(i, &(_, bid))| (i as u64 + 1) * bid)
        .sum())
}

fn card_value(card: u8, jokers: bool) -> Result<u8> {
    Ok(match card {
        b'2'..=b'9' => card - b'0',
        b'T' => 10,
        b'J' if jokers => 1,
        b'J' => 11,
        b'Q' => 12,
        b'K' => 13,
        b'A' => 14,
        other => bail!("unknown card {:?}", other as char),
    })
}

fn classify(values: &[u8; 5]) -> HandType {
    let mut counts = [0u8; 15];
    let mut jokers = 0;
    for &value in values {
        if value == 1 {
            jokers += 1;
        } else {
            counts[value as usize] += 1;
        }
    }
    let mut counts: Vec<u8> = counts.into_iter().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    if counts.is_empty() {
        counts.push(0);
    }
    // Jokers always help most by joining the largest group.
    counts[0] += jokers;

    match (counts[0], counts.get(1).copied()) {
        (5, _) => HandType::FiveOfAKind,
        (4, _) => HandType::FourOfAKind,
        (3, Some(2)) => HandType::FullHouse,
        (3, _) => HandType::ThreeOfAKind,
        (2, Some(2)) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn example() -> Result<()> {
        let example = indoc! {"
            32T3K 765
            T55J5 684
            KK677 28
            KTJJT 220
            QQQJA 483
        "};
        assert_eq!(day7(example)?, (6440, 5905));
        Ok(())
    }

    #[test]
    fn all_jokers_is_five_of_a_kind() {
        assert_eq!(classify(&[1, 1, 1, 1, 1]), HandType::FiveOfAKind);
        assert_eq!(classify(&[1, 1, 1, 1, 9]), HandType::FiveOfAKind);
    }

    #[test]
    fn joker_improves_the_largest_group() {
        // Two pair plus a joker is a full house, not three of a kind.
        assert_eq!(classify(&[5, 5, 9, 9, 1]), HandType::FullHouse);
        assert_eq!(classify(&[5, 5, 9, 8, 1]), HandType::ThreeOfAKind);
    }
}
