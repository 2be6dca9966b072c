use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::Category;
use crate::player::PlayerAction;

/// Records a single player action during a hand.
/// Associates the action with the seat and the phase when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0 is the human seat)
    pub seat: usize,
    /// The betting phase when this action occurred
    pub phase: Phase,
    /// The action taken by the seat
    pub action: PlayerAction,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that shared the pot
    pub winners: Vec<usize>,
    /// Pot size before distribution
    pub pot: u32,
    /// Optional notes about the showdown (e.g., "split pot", "uncontested")
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history output.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed the table was created with
    pub seed: Option<u64>,
    /// Dealer button seat for this hand
    pub dealer: usize,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Showdown information once the hand is resolved
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Something that happened at the table, rendered as a human-readable line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    /// A seat acted; `amount` is the chips called or the raise target.
    Acted {
        seat: usize,
        name: String,
        action: PlayerAction,
        amount: u32,
        all_in: bool,
    },
    Dealt { phase: Phase, cards: Vec<Card> },
    Won {
        seat: usize,
        name: String,
        amount: u32,
        category: Option<Category>,
    },
    SplitPot { winners: Vec<usize>, share: u32 },
    GameOver,
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::Acted {
                name,
                action,
                amount,
                all_in,
                ..
            } => {
                match action {
                    PlayerAction::Fold | PlayerAction::Check => {
                        write!(f, "{} {}", name, action.verb())?
                    }
                    PlayerAction::Call => write!(f, "{} called ${}", name, amount)?,
                    PlayerAction::Raise(_) => write!(f, "{} raised to ${}", name, amount)?,
                }
                if *all_in {
                    write!(f, " (all-in)")?;
                }
                Ok(())
            }
            TableEvent::Dealt { phase, cards } => {
                write!(f, "{}:", phase)?;
                for c in cards {
                    write!(f, " {}", c)?;
                }
                Ok(())
            }
            TableEvent::Won {
                name,
                amount,
                category,
                ..
            } => {
                write!(f, "{} won ${}", name, amount)?;
                if let Some(cat) = category {
                    write!(f, " with {}", cat)?;
                }
                Ok(())
            }
            TableEvent::SplitPot { winners, share } => {
                write!(f, "Split pot! ${} each to seats {:?}", share, winners)
            }
            TableEvent::GameOver => f.write_str("Game Over!"),
        }
    }
}

/// Appends one JSON line per finished hand and issues `YYYYMMDD-NNNNNN` ids.
pub struct HandLogger {
    sink: Option<BufWriter<Box<dyn Write>>>,
    day: String,
    issued: u32,
}

impl HandLogger {
    /// Opens `path` for writing, creating any missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_dir_all(dir)?;
        }
        Ok(Self::from_writer(File::create(path)?))
    }

    pub fn from_writer<W: Write + 'static>(w: W) -> Self {
        let sink: Box<dyn Write> = Box::new(w);
        Self {
            sink: Some(BufWriter::new(sink)),
            day: Utc::now().format("%Y%m%d").to_string(),
            issued: 0,
        }
    }

    /// Issues ids for `day` and discards every record.
    pub fn ids_only(day: &str) -> Self {
        Self {
            sink: None,
            day: day.to_string(),
            issued: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        format_hand_id(&self.day, self.issued)
    }

    /// Writes `record` as one line, stamping `ts` when the record has none.
    pub fn write(&mut self, record: &HandRecord) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let stamped;
        let record = match record.ts {
            Some(_) => record,
            None => {
                stamped = HandRecord {
                    ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                    ..record.clone()
                };
                &stamped
            }
        };
        serde_json::to_writer(&mut *sink, record)?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}
