use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, EvaluatedHand};
use crate::logger::{ActionKind, ActionRecord, RoundRecord, SeatResult};
use crate::player::{BetReceipt, Player, PlayerAction};
use crate::pot::{settle, Contender};
use crate::rules::{validate_action, ValidatedAction};

pub const DEFAULT_SMALL_BLIND: u64 = 10;
const COMMUNITY_CARDS: usize = 5;

/// Table setup for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seats: usize,
    pub starting_balance: u64,
    /// The big blind is always twice this
    pub small_blind: u64,
    /// Seed for every deck of the session; random when absent
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(seats: usize, starting_balance: u64) -> Self {
        Self {
            seats,
            starting_balance,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.seats == 0 {
            return Err(GameError::InvalidConfig("seats must be >= 1".into()));
        }
        if self.seats > 23 {
            // 5 community + 2 per seat must fit in one deck
            return Err(GameError::InvalidConfig("seats must be <= 23".into()));
        }
        if self.starting_balance == 0 {
            return Err(GameError::InvalidConfig(
                "starting balance must be > 0".into(),
            ));
        }
        if self.small_blind == 0 || self.small_blind > u64::MAX / 2 {
            return Err(GameError::InvalidConfig(
                "small blind must be > 0 and its double must fit in u64".into(),
            ));
        }
        // every chip on the table must fit a signed net result
        let table_chips = self.starting_balance.checked_mul(self.seats as u64);
        if !matches!(table_chips, Some(total) if total <= i64::MAX as u64) {
            return Err(GameError::InvalidConfig(
                "starting balance times seats is too large".into(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: 4,
            starting_balance: 1_000,
            small_blind: DEFAULT_SMALL_BLIND,
            seed: None,
        }
    }
}

/// Betting streets. `Showdown` is reached once the river betting closes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Community cards revealed at this stage.
    pub fn visible_cards(self) -> usize {
        [0, 3, 4, 5, 5][self.index()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Preflop => "Pre Flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }

    fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }
}

/// Emitted through the observer after every state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    RoundStarted { round: u32 },
    TurnAdvanced { seat: usize },
    StageAdvanced { stage: Stage },
    RoundEnded { round: u32 },
}

pub type Observer = Box<dyn FnMut(&StateChange)>;

/// Next seat after `from`, circularly, that can still act (neither folded nor all-in).
/// `None` means nobody can act.
pub fn next_eligible_seat(from: usize, players: &[Player]) -> Option<usize> {
    let n = players.len();
    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&i| players[i].is_actionable())
}

fn first_eligible_seat(start: usize, players: &[Player]) -> Option<usize> {
    let n = players.len();
    (0..n)
        .map(|step| (start + step) % n)
        .find(|&i| players[i].is_actionable())
}

/// Chip totals are bounded by [`GameConfig::validate`], so this never saturates in practice.
fn signed(chips: u64) -> i64 {
    i64::try_from(chips).unwrap_or(i64::MAX)
}

/// Controller for one table session.
///
/// Owns the seats, the board and the round counters. Players only change their own
/// fields; wagers reach the table through [`BetReceipt`] messages.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::{Game, GameConfig, Stage};
/// use holdem_engine::player::PlayerAction;
///
/// let mut game = Game::new(GameConfig { seed: Some(7), ..GameConfig::new(3, 500) }).unwrap();
/// assert_eq!(game.stage(), Stage::Preflop);
/// assert_eq!(game.round_total_bet(), 30);
///
/// game.act(PlayerAction::Fold).unwrap();
/// game.act(PlayerAction::Fold).unwrap();
/// assert!(game.is_round_over());
/// let total: u64 = game.players().iter().map(|p| p.balance()).sum();
/// assert_eq!(total, 1_500);
/// ```
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: ChaCha20Rng,
    observer: Option<Observer>,
    players: Vec<Player>,
    round: u32,
    stage: Stage,
    community: Vec<Card>,
    /// Index into `players`
    dealer: usize,
    last_dealer_seat: Option<usize>,
    /// Index into `players`
    current: usize,
    max_stage_bet: u64,
    round_total_bet: u64,
    round_over: bool,
    actions: Vec<ActionRecord>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("round", &self.round)
            .field("stage", &self.stage)
            .field("players", &self.players)
            .field("dealer", &self.dealer)
            .field("current", &self.current)
            .field("max_stage_bet", &self.max_stage_bet)
            .field("round_total_bet", &self.round_total_bet)
            .field("round_over", &self.round_over)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Seats the players and starts the first round.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::build(config, None)
    }

    /// Like [`Game::new`], with `observer` notified of every state change including the first round.
    pub fn with_observer(config: GameConfig, observer: Observer) -> Result<Self, GameError> {
        Self::build(config, Some(observer))
    }

    fn build(config: GameConfig, observer: Option<Observer>) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let players = (0..config.seats)
            .map(|seat| Player::new(seat, config.starting_balance))
            .collect();
        let mut game = Self {
            config,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            observer,
            players,
            round: 0,
            stage: Stage::Preflop,
            community: Vec::with_capacity(COMMUNITY_CARDS),
            dealer: 0,
            last_dealer_seat: None,
            current: 0,
            max_stage_bet: 0,
            round_total_bet: 0,
            round_over: true,
            actions: Vec::new(),
        };
        tracing::debug!(seed, seats = game.players.len(), "game created");
        game.new_round()?;
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.seat() == seat)
    }
    pub fn small_blind(&self) -> u64 {
        self.config.small_blind
    }
    pub fn big_blind(&self) -> u64 {
        self.config.small_blind * 2
    }
    pub fn max_stage_bet(&self) -> u64 {
        self.max_stage_bet
    }
    /// Chips wagered this round. After settlement this is the pot that was distributed.
    pub fn round_total_bet(&self) -> u64 {
        self.round_total_bet
    }
    pub fn is_round_over(&self) -> bool {
        self.round_over
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Fewer than two seats can still pay chips.
    pub fn is_game_over(&self) -> bool {
        self.players.iter().filter(|p| p.balance() > 0).count() < 2
    }

    pub fn dealer_seat(&self) -> usize {
        self.players[self.dealer].seat()
    }
    pub fn small_blind_seat(&self) -> usize {
        self.players[(self.dealer + 1) % self.players.len()].seat()
    }
    pub fn big_blind_seat(&self) -> usize {
        self.players[(self.dealer + 2) % self.players.len()].seat()
    }

    /// The seat whose turn it is; `None` once the round is over.
    pub fn current_player(&self) -> Option<&Player> {
        (!self.round_over).then(|| &self.players[self.current])
    }

    pub fn current_seat(&self) -> Option<usize> {
        self.current_player().map(Player::seat)
    }

    /// Call value of the seat to act.
    pub fn call_value(&self) -> Option<u64> {
        self.current_player()
            .map(|p| p.call_value(self.max_stage_bet))
    }

    /// Minimum raise of the seat to act.
    pub fn min_raise(&self) -> Option<u64> {
        self.current_player()
            .map(|p| p.min_raise(self.max_stage_bet, self.big_blind()))
    }

    /// All five community cards dealt this round, including those not revealed yet.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Community cards revealed so far.
    pub fn visible_community(&self) -> &[Card] {
        let n = self.stage.visible_cards().min(self.community.len());
        &self.community[..n]
    }

    /// Revealed hands, categories and rewards. Only available once the round is over.
    pub fn showdown(&self) -> Option<Vec<SeatResult>> {
        if !self.round_over {
            return None;
        }
        let results = self
            .players
            .iter()
            .map(|p| {
                let hand = p.showdown();
                SeatResult {
                    seat: p.seat(),
                    hole: p.hole_cards(),
                    folded: p.is_folded(),
                    category: hand.map(|h| h.category),
                    best: hand.map(|h| h.cards),
                    score: hand.map_or(0, |h| h.score),
                    round_bet: p.round_bet(),
                    reward: p.round_reward(),
                    net: signed(p.round_reward()) - signed(p.round_bet()),
                }
            })
            .collect();
        Some(results)
    }

    /// Record of the finished round.
    pub fn round_record(&self) -> Option<RoundRecord> {
        let players = self.showdown()?;
        Some(RoundRecord {
            round_id: None,
            seed: self.seed,
            round: self.round,
            dealer: self.dealer_seat(),
            community: self.visible_community().to_vec(),
            pot: self.round_total_bet,
            players,
            actions: self.actions.clone(),
            ts: None,
        })
    }

    /// Starts the next round: drops broke seats, rotates the dealer, deals and posts blinds.
    ///
    /// # Errors
    ///
    /// [`GameError::RoundInProgress`] while the current round is still being bet,
    /// [`GameError::NotEnoughPlayers`] when no seat has chips left.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        if !self.round_over {
            return Err(GameError::RoundInProgress);
        }
        self.players.retain(|p| p.balance() > 0);
        if self.players.is_empty() {
            return Err(GameError::NotEnoughPlayers);
        }

        self.dealer = match self.last_dealer_seat {
            None => 0,
            Some(prev) => self
                .players
                .iter()
                .position(|p| p.seat() > prev)
                .unwrap_or(0),
        };
        self.last_dealer_seat = Some(self.players[self.dealer].seat());
        self.current = self.dealer;
        self.round += 1;
        self.round_over = false;
        self.stage = Stage::Preflop;
        self.max_stage_bet = 0;
        self.round_total_bet = 0;
        self.actions.clear();

        let mut deck = Deck::from_rng(&mut self.rng);
        self.community = deck.draw(COMMUNITY_CARDS)?;
        for p in &mut self.players {
            let hole = deck.draw(2)?;
            p.start_round([hole[0], hole[1]]);
        }

        let n = self.players.len();
        let sb = (self.dealer + 1) % n;
        let bb = (self.dealer + 2) % n;
        let (small, big) = (self.small_blind(), self.big_blind());
        let receipt = self.players[sb].blind_bet(small);
        self.record_bet(receipt, ActionKind::SmallBlind);
        let receipt = self.players[bb].blind_bet(big);
        self.record_bet(receipt, ActionKind::BigBlind);
        self.max_stage_bet = big;

        tracing::info!(
            round = self.round,
            dealer = self.dealer_seat(),
            seats = n,
            "round started"
        );
        self.notify(StateChange::RoundStarted { round: self.round });
        self.open_stage()
    }

    /// Applies `action` for the seat whose turn it is.
    ///
    /// Validation errors leave the table unchanged so the caller can re-prompt.
    pub fn act(&mut self, action: PlayerAction) -> Result<ValidatedAction, GameError> {
        if self.round_over {
            return Err(GameError::RoundOver);
        }
        let big_blind = self.big_blind();
        let max_stage_bet = self.max_stage_bet;
        let player = &mut self.players[self.current];
        let validated = validate_action(&player.bet_context(max_stage_bet, big_blind), action)?;
        match validated {
            ValidatedAction::Fold => {
                player.fold();
                let seat = player.seat();
                self.log_action(seat, ActionKind::Fold, 0);
            }
            ref wager => {
                let receipt = player.bet(wager.amount(), max_stage_bet, big_blind)?;
                self.record_bet(receipt, ActionKind::from(wager));
            }
        }
        tracing::debug!(
            round = self.round,
            stage = ?self.stage,
            seat = self.players[self.current].seat(),
            action = ?validated,
            "action applied"
        );
        self.player_finish_turn()?;
        Ok(validated)
    }

    /// Like [`Game::act`], but rejects seats acting out of turn.
    pub fn act_as(&mut self, seat: usize, action: PlayerAction) -> Result<ValidatedAction, GameError> {
        let expected = self.current_seat().ok_or(GameError::RoundOver)?;
        if expected != seat {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        self.act(action)
    }

    fn record_bet(&mut self, receipt: BetReceipt, kind: ActionKind) {
        self.max_stage_bet = self.max_stage_bet.max(receipt.stage_bet);
        self.round_total_bet += receipt.amount;
        self.log_action(receipt.seat, kind, receipt.amount);
    }

    fn log_action(&mut self, seat: usize, kind: ActionKind, amount: u64) {
        self.actions.push(ActionRecord {
            round: self.round,
            seat,
            stage: self.stage,
            kind,
            amount,
        });
    }

    fn player_finish_turn(&mut self) -> Result<(), GameError> {
        if self.is_walkover() {
            return self.end_round();
        }
        if self.is_stage_complete() {
            return self.next_stage();
        }
        match next_eligible_seat(self.current, &self.players) {
            Some(next) => {
                self.current = next;
                self.notify(StateChange::TurnAdvanced {
                    seat: self.players[next].seat(),
                });
                Ok(())
            }
            None => self.next_stage(),
        }
    }

    /// Gives the turn to the first seat at or after the dealer that can act,
    /// or moves on when nobody has anything left to decide.
    fn open_stage(&mut self) -> Result<(), GameError> {
        if self.is_walkover() {
            return self.end_round();
        }
        if self.is_stage_complete() {
            return self.next_stage();
        }
        match first_eligible_seat(self.dealer, &self.players) {
            Some(first) => {
                self.current = first;
                self.notify(StateChange::TurnAdvanced {
                    seat: self.players[first].seat(),
                });
                Ok(())
            }
            None => self.next_stage(),
        }
    }

    fn next_stage(&mut self) -> Result<(), GameError> {
        self.stage = self.stage.next();
        self.current = self.dealer;
        self.max_stage_bet = 0;
        for p in &mut self.players {
            p.start_stage();
        }
        if self.stage == Stage::Showdown {
            return self.end_round();
        }
        tracing::debug!(round = self.round, stage = ?self.stage, "stage advanced");
        self.notify(StateChange::StageAdvanced { stage: self.stage });
        self.open_stage()
    }

    fn end_round(&mut self) -> Result<(), GameError> {
        self.round_over = true;

        let mut hands: Vec<Option<EvaluatedHand>> = Vec::with_capacity(self.players.len());
        for p in &self.players {
            let hand = match (p.is_folded(), p.hole_cards()) {
                (false, Some(hole)) => {
                    let mut cards = hole.to_vec();
                    cards.extend_from_slice(&self.community);
                    Some(evaluate(&cards)?)
                }
                _ => None,
            };
            hands.push(hand);
        }

        let contenders: Vec<Contender> = self
            .players
            .iter()
            .zip(&hands)
            .map(|(p, hand)| Contender {
                score: hand.as_ref().map_or(0, |h| h.score),
                round_bet: p.round_bet(),
                folded: p.is_folded(),
            })
            .collect();
        let rewards = settle(&contenders);

        for ((p, hand), reward) in self.players.iter_mut().zip(hands).zip(rewards) {
            p.set_showdown(hand);
            p.collect_reward(reward);
        }

        tracing::info!(
            round = self.round,
            stage = ?self.stage,
            pot = self.round_total_bet,
            "round ended"
        );
        for p in &self.players {
            tracing::debug!(
                seat = p.seat(),
                category = ?p.showdown().map(|h| h.category),
                reward = p.round_reward(),
                balance = p.balance(),
                "settled seat"
            );
        }
        self.notify(StateChange::RoundEnded { round: self.round });
        Ok(())
    }

    /// At most one seat has not folded.
    fn is_walkover(&self) -> bool {
        self.players.iter().filter(|p| !p.is_folded()).count() <= 1
    }

    fn is_all_bets_done(&self) -> bool {
        self.players
            .iter()
            .filter(|p| p.is_actionable())
            .all(|p| p.finished_stage_action() && p.stage_bet() >= self.max_stage_bet)
    }

    /// Betting on this stage is closed: everyone who can act has acted and matched,
    /// or there is nobody left to bet against.
    fn is_stage_complete(&self) -> bool {
        let mut actionable = self.players.iter().filter(|p| p.is_actionable());
        match (actionable.next(), actionable.next()) {
            (None, _) => true,
            (Some(only), None) => only.stage_bet() >= self.max_stage_bet,
            _ => self.is_all_bets_done(),
        }
    }

    fn notify(&mut self, change: StateChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&change);
        }
    }
}
