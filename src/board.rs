//! Board Operations
//!
//! Pure add/delete/rename/move operations. Every operation borrows the
//! current board and returns a new one; an `Err` means "leave the board
//! as it is".

use crate::config::SeedColumn;
use crate::error::{BoardError, Result};
use crate::models::{Board, Card, Column, ColumnId};

impl Board {
    /// Board with the given sample cards, each with a fresh id
    pub fn from_seed(seed: &[SeedColumn]) -> Self {
        let mut board = Board::default();
        for entry in seed {
            if let Some(column) = board.columns.iter_mut().find(|c| c.id == entry.column) {
                column.cards.extend(entry.titles.iter().map(Card::new));
            }
        }
        board
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BoardError::UnknownColumn(id.to_string()))
    }

    /// Column currently holding `card_id`
    pub fn find_column_by_card(&self, card_id: &str) -> Option<ColumnId> {
        self.columns.iter().find(|c| c.contains(card_id)).map(|c| c.id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Append a new card to the end of `column`
    pub fn add_card(&self, column: ColumnId, title: &str) -> Result<Board> {
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let mut next = self.clone();
        next.column_mut(column)?.cards.push(Card::new(title));
        Ok(next)
    }

    /// Remove a card from whichever column holds it
    pub fn delete_card(&self, card_id: &str) -> Result<Board> {
        let source = self
            .find_column_by_card(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.to_string()))?;
        let mut next = self.clone();
        next.column_mut(source)?
            .cards
            .retain(|c| c.id.as_str() != card_id);
        Ok(next)
    }

    /// Replace a card's title; empty titles are accepted
    pub fn update_card_title(&self, card_id: &str, title: &str) -> Result<Board> {
        let source = self
            .find_column_by_card(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.to_string()))?;
        let mut next = self.clone();
        let column = next.column_mut(source)?;
        if let Some(card) = column.cards.iter_mut().find(|c| c.id.as_str() == card_id) {
            card.title = title.to_string();
        }
        Ok(next)
    }

    /// Apply a finished drag gesture.
    ///
    /// `over_id` is tried as a card id first, then as a column key (a drop
    /// on a column's free space). Within one column the card takes the
    /// target card's index; across columns it is inserted before the target
    /// card, or appended when the target is the column itself.
    pub fn handle_drag_end(&self, active_id: &str, over_id: &str) -> Result<Board> {
        let source = self
            .find_column_by_card(active_id)
            .ok_or_else(|| BoardError::CardNotFound(active_id.to_string()))?;
        let destination = match self.find_column_by_card(over_id) {
            Some(column) => column,
            None => over_id
                .parse::<ColumnId>()
                .map_err(|_| BoardError::UnknownDropTarget(over_id.to_string()))?,
        };

        let mut next = self.clone();
        if source == destination {
            let column = next.column_mut(source)?;
            let old_index = column
                .position_of(active_id)
                .ok_or_else(|| BoardError::CardNotFound(active_id.to_string()))?;
            let new_index = column
                .position_of(over_id)
                .unwrap_or(column.cards.len() - 1);
            let card = column.cards.remove(old_index);
            column.cards.insert(new_index, card);
        } else {
            let from = next.column_mut(source)?;
            let old_index = from
                .position_of(active_id)
                .ok_or_else(|| BoardError::CardNotFound(active_id.to_string()))?;
            let card = from.cards.remove(old_index);

            let to = next.column_mut(destination)?;
            let insert_at = to.position_of(over_id).unwrap_or(to.cards.len());
            to.cards.insert(insert_at, card);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::CardId;
    use std::collections::HashSet;

    /// Board whose card ids equal their titles; ids are space separated
    fn board_with(layout: &[(ColumnId, &str)]) -> Board {
        let mut board = Board::default();
        for (column, ids) in layout {
            let col = board.columns.iter_mut().find(|c| c.id == *column).unwrap();
            col.cards = ids
                .split_whitespace()
                .map(|id| Card { id: CardId::from(id), title: id.to_string() })
                .collect();
        }
        board
    }

    fn ids(board: &Board, column: ColumnId) -> Vec<String> {
        board
            .column(column)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    fn title_of<'a>(board: &'a Board, card_id: &str) -> &'a str {
        board
            .columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| card.id.as_str() == card_id)
            .map(|card| card.title.as_str())
            .unwrap()
    }

    fn assert_unique_membership(board: &Board) {
        let mut seen = HashSet::new();
        for column in &board.columns {
            for card in &column.cards {
                assert!(seen.insert(card.id.clone()), "card {} appears twice", card.id);
            }
        }
        assert_eq!(seen.len(), board.card_count());
    }

    #[test]
    fn test_from_seed() {
        let board = Board::from_seed(&AppConfig::default().seed);
        assert_eq!(board.column(ColumnId::Todo).unwrap().cards.len(), 2);
        assert_eq!(board.column(ColumnId::InProgress).unwrap().cards.len(), 1);
        assert_eq!(board.column(ColumnId::Done).unwrap().cards.len(), 1);
        assert_eq!(
            board.column(ColumnId::Todo).unwrap().cards[0].title,
            "Create initial project plan"
        );
        assert_unique_membership(&board);
    }

    #[test]
    fn test_seed_ids_differ_between_loads() {
        let seed = AppConfig::default().seed;
        let a = Board::from_seed(&seed);
        let b = Board::from_seed(&seed);
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_card_appends() {
        let board = board_with(&[(ColumnId::Done, "A")]);
        let next = board.add_card(ColumnId::Done, "New task").unwrap();
        let done = &next.column(ColumnId::Done).unwrap().cards;
        assert_eq!(done.len(), 2);
        assert_eq!(done[1].title, "New task");
        assert_eq!(done[0].id.as_str(), "A");
        // Snapshot is untouched
        assert_eq!(board.column(ColumnId::Done).unwrap().cards.len(), 1);
    }

    #[test]
    fn test_add_card_empty_title_is_rejected() {
        let board = board_with(&[(ColumnId::Todo, "A")]);
        assert_eq!(board.add_card(ColumnId::Todo, ""), Err(BoardError::EmptyTitle));
    }

    #[test]
    fn test_delete_card() {
        let board = board_with(&[(ColumnId::Todo, "A B"), (ColumnId::Done, "C")]);
        let next = board.delete_card("A").unwrap();
        assert_eq!(ids(&next, ColumnId::Todo), vec!["B"]);
        assert_eq!(ids(&next, ColumnId::Done), vec!["C"]);
    }

    #[test]
    fn test_delete_missing_card_is_noop() {
        let board = board_with(&[(ColumnId::Todo, "A")]);
        let next = board.delete_card("A").unwrap();
        assert_eq!(
            next.delete_card("A"),
            Err(BoardError::CardNotFound("A".to_string()))
        );
        assert_eq!(
            board.delete_card("missing"),
            Err(BoardError::CardNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_update_title_changes_only_that_card() {
        let board = board_with(&[(ColumnId::Todo, "A B"), (ColumnId::InProgress, "C")]);
        let next = board.update_card_title("B", "Renamed").unwrap();
        assert_eq!(title_of(&next, "B"), "Renamed");
        assert_eq!(title_of(&next, "A"), "A");
        assert_eq!(title_of(&next, "C"), "C");
        assert_eq!(ids(&next, ColumnId::Todo), vec!["A", "B"]);
        assert_eq!(ids(&next, ColumnId::InProgress), vec!["C"]);
    }

    #[test]
    fn test_update_title_accepts_empty() {
        let board = board_with(&[(ColumnId::Todo, "A")]);
        let next = board.update_card_title("A", "").unwrap();
        assert_eq!(title_of(&next, "A"), "");
    }

    #[test]
    fn test_update_missing_card_is_noop() {
        let board = board_with(&[(ColumnId::Todo, "A")]);
        assert!(board.update_card_title("missing", "x").is_err());
    }

    #[test]
    fn test_drag_onto_previous_card_swaps() {
        let board = board_with(&[(ColumnId::Todo, "X Y")]);
        let next = board.handle_drag_end("Y", "X").unwrap();
        assert_eq!(ids(&next, ColumnId::Todo), vec!["Y", "X"]);
    }

    #[test]
    fn test_same_column_move_shifts_between() {
        let board = board_with(&[
            (ColumnId::Todo, "A B C D"),
            (ColumnId::Done, "E"),
        ]);
        let down = board.handle_drag_end("A", "C").unwrap();
        assert_eq!(ids(&down, ColumnId::Todo), vec!["B", "C", "A", "D"]);
        let up = board.handle_drag_end("D", "B").unwrap();
        assert_eq!(ids(&up, ColumnId::Todo), vec!["A", "D", "B", "C"]);
        assert_eq!(ids(&up, ColumnId::Done), vec!["E"]);
    }

    #[test]
    fn test_same_column_drop_on_column_moves_to_end() {
        let board = board_with(&[(ColumnId::Todo, "A B C")]);
        let next = board.handle_drag_end("A", "todo").unwrap();
        assert_eq!(ids(&next, ColumnId::Todo), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drop_on_self_keeps_order() {
        let board = board_with(&[(ColumnId::Todo, "A B")]);
        let next = board.handle_drag_end("A", "A").unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_drag_onto_empty_column() {
        let board = board_with(&[(ColumnId::Todo, "X")]);
        let next = board.handle_drag_end("X", "inProgress").unwrap();
        assert!(ids(&next, ColumnId::Todo).is_empty());
        assert_eq!(ids(&next, ColumnId::InProgress), vec!["X"]);
    }

    #[test]
    fn test_cross_column_inserts_before_target() {
        let board = board_with(&[
            (ColumnId::Todo, "A B C"),
            (ColumnId::Done, "D E"),
        ]);
        let next = board.handle_drag_end("B", "E").unwrap();
        assert_eq!(ids(&next, ColumnId::Todo), vec!["A", "C"]);
        assert_eq!(ids(&next, ColumnId::Done), vec!["D", "B", "E"]);
        assert_unique_membership(&next);
    }

    #[test]
    fn test_cross_column_onto_column_appends() {
        let board = board_with(&[(ColumnId::Todo, "A"), (ColumnId::Done, "D E")]);
        let next = board.handle_drag_end("A", "done").unwrap();
        assert_eq!(ids(&next, ColumnId::Done), vec!["D", "E", "A"]);
    }

    #[test]
    fn test_unresolvable_drag_is_noop() {
        let board = board_with(&[(ColumnId::Todo, "A")]);
        assert_eq!(
            board.handle_drag_end("A", "trash"),
            Err(BoardError::UnknownDropTarget("trash".to_string()))
        );
        assert_eq!(
            board.handle_drag_end("ghost", "todo"),
            Err(BoardError::CardNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_operation_sequence_keeps_membership_unique() {
        let mut board = Board::from_seed(&AppConfig::default().seed);
        // xorshift, fixed seed
        let mut state: u32 = 0x9E37_79B9;
        let mut next_rand = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as usize
        };

        for step in 0..300 {
            let all: Vec<String> = board
                .columns
                .iter()
                .flat_map(|c| c.cards.iter().map(|card| card.id.to_string()))
                .collect();
            let column = ColumnId::ALL[next_rand() % 3];
            let pick = |n: usize| all.get(n % all.len().max(1)).cloned().unwrap_or_default();

            let result = match next_rand() % 4 {
                0 => board.add_card(column, &format!("card {}", step)),
                1 => board.delete_card(&pick(next_rand())),
                2 => board.update_card_title(&pick(next_rand()), "renamed"),
                _ => {
                    let over = if next_rand() % 2 == 0 {
                        column.as_str().to_string()
                    } else {
                        pick(next_rand())
                    };
                    board.handle_drag_end(&pick(next_rand()), &over)
                }
            };
            let before = board.card_count();
            if let Ok(next) = result {
                board = next;
            }
            assert_unique_membership(&board);
            assert!(board.card_count() + 1 >= before);
        }
    }
}
