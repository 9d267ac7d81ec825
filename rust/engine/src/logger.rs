use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Stage;
use crate::hand::Category;
use crate::rules::ValidatedAction;

/// What a seat did, including the forced blinds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl From<&ValidatedAction> for ActionKind {
    fn from(action: &ValidatedAction) -> Self {
        match action {
            ValidatedAction::Fold => ActionKind::Fold,
            ValidatedAction::Check => ActionKind::Check,
            ValidatedAction::Call(_) => ActionKind::Call,
            ValidatedAction::Raise(_) => ActionKind::Raise,
            ValidatedAction::AllIn(_) => ActionKind::AllIn,
        }
    }
}

/// Records a single seat action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub round: u32,
    /// Stable seat id
    pub seat: usize,
    pub stage: Stage,
    pub kind: ActionKind,
    /// Chips moved into the pot
    pub amount: u64,
}

/// One seat's revealed outcome at the end of a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub seat: usize,
    pub hole: Option<[Card; 2]>,
    pub folded: bool,
    /// Absent for folded seats
    pub category: Option<Category>,
    pub best: Option<[Card; 5]>,
    pub score: u32,
    pub round_bet: u64,
    pub reward: u64,
    /// `reward - round_bet`
    pub net: i64,
}

/// Complete record of a finished round. Serialized to JSONL for round history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Assigned by [`RoundLogger`] when written (format: YYYYMMDD-NNNNNN)
    #[serde(default)]
    pub round_id: Option<String>,
    /// Game seed (enables deterministic replay of the whole session)
    pub seed: u64,
    pub round: u32,
    pub dealer: usize,
    /// The board as far as it was revealed
    pub community: Vec<Card>,
    pub pot: u64,
    pub players: Vec<SeatResult>,
    pub actions: Vec<ActionRecord>,
    /// Timestamp when the round was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn winners(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.net > 0)
            .map(|p| p.seat)
            .collect()
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    /// Writes one record as a JSON line, filling in the id and timestamp when missing.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<RoundRecord> {
        let mut rec = record.clone();
        if rec.round_id.is_none() {
            rec.round_id = Some(self.next_id());
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(rec)
    }
}

impl std::fmt::Debug for RoundLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundLogger")
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}
