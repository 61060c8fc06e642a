//! Ordered in-memory meeting storage.
//!
//! Meetings are kept sorted ascending by their slot, and no two meetings
//! added through [`MeetingStore::insert`] share a slot.

use crate::error::{MeetbookError, MeetbookResult};
use crate::meeting::{Meeting, MeetingKey};

#[derive(Debug, Default, Clone)]
pub struct MeetingStore {
    meetings: Vec<Meeting>,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Meetings in stored order.
    pub fn list(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meeting> {
        self.meetings.iter()
    }

    /// Position of the meeting occupying `key`, if any.
    pub fn find(&self, key: &MeetingKey) -> Option<usize> {
        self.meetings.iter().position(|m| m.key == *key)
    }

    /// Index of the first meeting scheduled strictly after `key`, or `len()`
    /// if there is none.
    pub fn find_insert_position(&self, key: &MeetingKey) -> usize {
        self.meetings
            .iter()
            .position(|m| m.key > *key)
            .unwrap_or(self.meetings.len())
    }

    /// Insert a meeting at its sorted position and return that position.
    pub fn insert(&mut self, meeting: Meeting) -> MeetbookResult<usize> {
        if self.find(&meeting.key).is_some() {
            return Err(MeetbookError::DuplicateSlot);
        }

        let pos = self.find_insert_position(&meeting.key);
        self.meetings.insert(pos, meeting);
        Ok(pos)
    }

    /// Remove the meeting occupying `key`, keeping the rest in order.
    pub fn remove(&mut self, key: &MeetingKey) -> MeetbookResult<Meeting> {
        let pos = self.find(key).ok_or(MeetbookError::NotFound {
            month: key.month,
            day: key.day,
            hour: key.hour,
        })?;

        Ok(self.meetings.remove(pos))
    }

    /// Drop every stored meeting and adopt `meetings` as-is.
    ///
    /// The new entries keep their given order; they are not re-sorted or
    /// checked for duplicate slots.
    pub fn replace(&mut self, meetings: Vec<Meeting>) {
        self.meetings = meetings;
    }
}

impl<'a> IntoIterator for &'a MeetingStore {
    type Item = &'a Meeting;
    type IntoIter = std::slice::Iter<'a, Meeting>;

    fn into_iter(self) -> Self::IntoIter {
        self.meetings.iter()
    }
}
