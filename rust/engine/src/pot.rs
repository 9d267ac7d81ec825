//! Round settlement.
//!
//! The pot is redistributed by a pairwise sweep: players are ranked by hand score,
//! and each non-folded player, in rank order, collects from every lower-ranked
//! player up to its own round contribution. This approximates side pots for
//! all-ins of unequal size. It is not an exact multi-way side-pot split: with
//! several unequal all-ins a chip claim taken by a higher hand is measured against
//! that hand's own contribution only, and equal scores are not split but resolved
//! in seat order.

/// Settlement-time snapshot of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contender {
    /// Hand score; folded seats carry 0
    pub score: u32,
    pub round_bet: u64,
    pub folded: bool,
}

/// Computes each seat's round reward. Rewards are indexed like `contenders` and
/// always sum to the total of `round_bet`.
///
/// # Examples
///
/// ```
/// use holdem_engine::pot::{settle, Contender};
///
/// let rewards = settle(&[
///     Contender { score: 900, round_bet: 50, folded: false },
///     Contender { score: 100, round_bet: 50, folded: false },
///     Contender { score: 0, round_bet: 20, folded: true },
/// ]);
/// assert_eq!(rewards, vec![120, 0, 0]);
/// ```
pub fn settle(contenders: &[Contender]) -> Vec<u64> {
    let mut rewards: Vec<u64> = contenders.iter().map(|c| c.round_bet).collect();

    let mut order: Vec<usize> = (0..contenders.len()).collect();
    order.sort_by(|&a, &b| contenders[b].score.cmp(&contenders[a].score));

    for (pos, &winner) in order.iter().enumerate() {
        if contenders[winner].folded {
            continue;
        }
        let cap = contenders[winner].round_bet;
        for &loser in &order[pos + 1..] {
            let take = rewards[loser].min(cap);
            rewards[loser] -= take;
            rewards[winner] += take;
        }
    }
    rewards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(score: u32, round_bet: u64, folded: bool) -> Contender {
        Contender {
            score,
            round_bet,
            folded,
        }
    }

    #[test]
    fn short_all_in_winner_only_claims_its_contribution() {
        // winner put in 30, the others 100 each
        let rewards = settle(&[c(500, 30, false), c(400, 100, false), c(300, 100, false)]);
        assert_eq!(rewards, vec![90, 140, 0]);
        assert_eq!(rewards.iter().sum::<u64>(), 230);
    }

    #[test]
    fn folded_players_never_collect() {
        let rewards = settle(&[c(0, 100, true), c(10, 20, false)]);
        assert_eq!(rewards, vec![80, 40]);
    }

    #[test]
    fn equal_scores_resolve_in_seat_order() {
        let rewards = settle(&[c(700, 50, false), c(700, 50, false)]);
        assert_eq!(rewards, vec![100, 0]);
    }

    #[test]
    fn empty_table_settles_to_nothing() {
        assert!(settle(&[]).is_empty());
    }
}
