//! Board Models
//!
//! Cards, columns and the board snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BoardError;

/// Card identifier (UUID v4 string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
        }
    }
}

/// The fixed set of board lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// All lanes in display order
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "inProgress",
            ColumnId::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Todo => "Todo",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BoardError::UnknownColumn(s.to_string()))
    }
}

/// One lane and its ordered cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            cards: Vec::new(),
        }
    }

    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id.as_str() == card_id)
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.position_of(card_id).is_some()
    }
}

/// Whole application state: the three columns in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Default for Board {
    /// Empty board with every lane present
    fn default() -> Self {
        Self {
            columns: ColumnId::ALL.into_iter().map(Column::new).collect(),
        }
    }
}
