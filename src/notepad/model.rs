use crate::error::{NotepadError, Result};
use std::fmt;
use std::str::FromStr;

/// A bounded, ordered collection of notes for one session.
///
/// The capacity is fixed when the notepad is built and tracked separately
/// from the current length, so `clear` can drop every note without losing
/// the bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notepad {
    notes: Vec<String>,
    capacity: usize,
}

impl Notepad {
    pub fn new(capacity: usize) -> Self {
        Self {
            notes: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() >= self.capacity
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.notes.get(index).map(String::as_str)
    }

    /// Appends a note, refusing once the capacity is reached.
    pub fn push(&mut self, note: String) -> Result<()> {
        if self.is_full() {
            return Err(NotepadError::CapacityExceeded);
        }
        self.notes.push(note);
        Ok(())
    }

    /// Replaces the note at a 0-based index. Callers validate the index first.
    pub fn replace(&mut self, index: usize, note: String) -> Option<String> {
        self.notes
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, note))
    }

    /// Removes the note at a 0-based index, shifting later notes down by one.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }
}

/// A 1-based position as typed by the user.
///
/// Any integer parses, including zero and negatives; whether it points at a
/// note is decided against a concrete notepad by [`Position::index_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(i64);

impl Position {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Maps to the 0-based index if the position addresses an existing note.
    pub fn index_in(&self, notepad: &Notepad) -> Result<usize> {
        self.0
            .checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .filter(|idx| *idx < notepad.len())
            .ok_or(NotepadError::PositionOutOfRange {
                position: self.0,
                capacity: notepad.capacity(),
            })
    }
}

impl FromStr for Position {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<i64>()
            .map(Position)
            .map_err(|_| NotepadError::InvalidPosition(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
