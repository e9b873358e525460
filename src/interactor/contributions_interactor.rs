use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::data;
use crate::entity::Contribution;
use crate::random::RandomSource;

/// Rounds that receive mock contributions
pub const ROUND_IDS: [&str; 3] = ["Game1", "Game2", "Game3"];

/// Possible contribution amounts in BUSD cents
const AMOUNT_CENTS: [i64; 4] = [1000, 2050, 3000, 5000];

const MAX_CONTRIBUTIONS_PER_ROUND: u64 = 3;

pub type RoundTransactions = BTreeMap<String, Vec<Contribution>>;

#[async_trait]
pub trait ContributionsInteractor: Send + Sync {
    /// Contributions of a round, empty for unknown rounds
    async fn get_round_contributions(&self, round: &str) -> Vec<Contribution>;
}

pub struct ContributionsInteractorImpl {
    rounds: RoundTransactions,
}

impl ContributionsInteractorImpl {
    /// Generates a fresh set of mock contributions
    pub fn new(rng: &dyn RandomSource) -> Self {
        Self::with_rounds(generate_round_transactions(rng, Utc::now()))
    }

    pub fn with_rounds(rounds: RoundTransactions) -> Self {
        Self { rounds }
    }
}

#[async_trait]
impl ContributionsInteractor for ContributionsInteractorImpl {
    async fn get_round_contributions(&self, round: &str) -> Vec<Contribution> {
        let contributions = self.rounds.get(round).cloned().unwrap_or_default();
        debug!("Round {} has {} contributions", round, contributions.len());
        contributions
    }
}

/// One mock contribution dated between 2022-01-01 and `now`
pub fn generate_contribution(rng: &dyn RandomSource, now: DateTime<Utc>) -> Contribution {
    let epoch = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();
    let played_at = data::random_instant_since(rng, epoch, now);

    Contribution {
        transaction_id: format!("0x{}", rng.hex_string(64)),
        address: format!("0x{}", rng.hex_string(40)),
        gameplay_date: played_at.with_timezone(&Local).date_naive(),
        amount: Decimal::new(AMOUNT_CENTS[rng.next_index(AMOUNT_CENTS.len())], 2),
    }
}

/// Between one and three contributions for every known round
pub fn generate_round_transactions(rng: &dyn RandomSource, now: DateTime<Utc>) -> RoundTransactions {
    ROUND_IDS
        .iter()
        .map(|round| {
            let count = rng.next_in_range(0, MAX_CONTRIBUTIONS_PER_ROUND).max(1);
            let contributions = (0..count)
                .map(|_| generate_contribution(rng, now))
                .collect();
            (round.to_string(), contributions)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededRandom, ThreadRandom};
    use regex::Regex;

    #[test]
    fn rounds_have_one_to_three_contributions() {
        let rng = ThreadRandom;
        for _ in 0..50 {
            let rounds = generate_round_transactions(&rng, Utc::now());
            assert_eq!(rounds.len(), ROUND_IDS.len());
            for round in ROUND_IDS {
                let count = rounds[round].len();
                assert!((1..=3).contains(&count), "{} has {}", round, count);
            }
        }
    }

    #[test]
    fn contribution_fields_are_well_formed() {
        let id_pattern = Regex::new(r"^0x[0-9a-f]{64}$").unwrap();
        let address_pattern = Regex::new(r"^0x[0-9a-f]{40}$").unwrap();
        let date_pattern = Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap();
        let amounts = ["10.00 BUSD", "20.50 BUSD", "30.00 BUSD", "50.00 BUSD"];

        let rng = SeededRandom::new(2024);
        let now = Utc::now();
        let earliest = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let today = now.with_timezone(&Local).date_naive();

        for _ in 0..200 {
            let c = generate_contribution(&rng, now);
            assert!(id_pattern.is_match(&c.transaction_id));
            assert!(address_pattern.is_match(&c.address));
            assert!(date_pattern.is_match(&c.gameplay_date_label()));
            assert!(amounts.contains(&c.amount_label().as_str()), "{}", c.amount_label());
            assert!(c.gameplay_date >= earliest && c.gameplay_date <= today);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let now = Utc::now();
        let first = generate_round_transactions(&SeededRandom::new(5), now);
        let second = generate_round_transactions(&SeededRandom::new(5), now);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_round_is_empty() {
        let interactor = ContributionsInteractorImpl::new(&ThreadRandom);
        assert!(interactor.get_round_contributions("Game4").await.is_empty());
        assert!(!interactor.get_round_contributions("Game1").await.is_empty());
    }
}
