//! Question-by-question navigation state for an interactive assessment.
//!
//! A session is a plain value: it borrows the catalog on each call instead
//! of holding it, and serializes to a small snapshot so callers can persist
//! and resume it with whatever storage they have.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::core::{AssessmentItem, Rating, Responses};
use crate::errors::SessionError;
use crate::scoring::normalized_percentile;

/// Result of answering the current item or stepping past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the next item.
    Advanced,
    /// On the last item with every item answered.
    Completed,
    /// On the last item, but earlier items are still unanswered.
    AwaitingRemaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// 1-based position of the current item.
    pub question_number: usize,
    pub total: usize,
    pub answered: usize,
    pub percent: u8,
}

/// Persisted form of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub responses: Responses,
    #[serde(default)]
    pub current_question: usize,
    #[serde(default)]
    pub paused: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentSession {
    current_index: usize,
    responses: Responses,
    paused: bool,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a snapshot; an index past the end lands on the last item.
    pub fn restore(catalog: &ItemCatalog, snapshot: SessionSnapshot) -> Self {
        let last = catalog.len().saturating_sub(1);
        if snapshot.current_question > last {
            tracing::warn!(
                index = snapshot.current_question,
                last,
                "Snapshot index out of range, clamping"
            );
        }
        Self {
            current_index: snapshot.current_question.min(last),
            responses: snapshot.responses,
            paused: snapshot.paused,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            responses: self.responses.clone(),
            current_question: self.current_index,
            paused: self.paused,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn current_item<'a>(&self, catalog: &'a ItemCatalog) -> Option<&'a AssessmentItem> {
        catalog.all_items().get(self.current_index)
    }

    /// Rating already given for the current item, if any.
    pub fn current_rating(&self, catalog: &ItemCatalog) -> Option<i64> {
        self.current_item(catalog)
            .and_then(|item| self.responses.get(&item.id))
    }

    /// Record `rating` for the current item and move forward.
    pub fn answer(&mut self, catalog: &ItemCatalog, rating: i64) -> Result<AnswerOutcome, SessionError> {
        if self.paused {
            return Err(SessionError::Paused);
        }
        let rating = Rating::new(rating).ok_or(SessionError::InvalidRating(rating))?;
        let Some(item) = self.current_item(catalog) else {
            return Ok(AnswerOutcome::AwaitingRemaining);
        };
        self.responses.insert(item.id.clone(), i64::from(rating));

        Ok(self.advance(catalog))
    }

    /// Step back one item; no-op on the first.
    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Step forward one item, only once the current item has an answer.
    ///
    /// `None` while the current item is unanswered. On the last item this
    /// does not move and reports whether the assessment is complete.
    pub fn next(&mut self, catalog: &ItemCatalog) -> Option<AnswerOutcome> {
        self.current_rating(catalog)?;
        Some(self.advance(catalog))
    }

    fn advance(&mut self, catalog: &ItemCatalog) -> AnswerOutcome {
        if self.current_index + 1 < catalog.len() {
            self.current_index += 1;
            AnswerOutcome::Advanced
        } else if self.is_complete(catalog) {
            tracing::info!(items = catalog.len(), "Assessment complete");
            AnswerOutcome::Completed
        } else {
            AnswerOutcome::AwaitingRemaining
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn answered_count(&self, catalog: &ItemCatalog) -> usize {
        catalog
            .all_items()
            .iter()
            .filter(|item| self.responses.contains(&item.id))
            .count()
    }

    pub fn progress(&self, catalog: &ItemCatalog) -> Progress {
        let total = catalog.len();
        let question_number = (self.current_index + 1).min(total);
        Progress {
            question_number,
            total,
            answered: self.answered_count(catalog),
            percent: normalized_percentile(question_number as u32, total as u32),
        }
    }

    pub fn is_complete(&self, catalog: &ItemCatalog) -> bool {
        self.answered_count(catalog) == catalog.len()
    }

    /// Unanswered item ids in catalog order.
    pub fn missing_items<'a>(&self, catalog: &'a ItemCatalog) -> Vec<&'a str> {
        catalog
            .all_items()
            .iter()
            .filter(|item| !self.responses.contains(&item.id))
            .map(|item| item.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Factor, Keying};
    use pretty_assertions::assert_eq;

    fn small_catalog() -> ItemCatalog {
        let items = Factor::ALL
            .iter()
            .map(|f| AssessmentItem::new(f.as_str(), "text", *f, Keying::Positive))
            .collect();
        ItemCatalog::new(items).unwrap()
    }

    #[test]
    fn test_answer_advances_until_last() {
        let catalog = small_catalog();
        let mut session = AssessmentSession::new();

        for _ in 0..4 {
            assert_eq!(session.answer(&catalog, 4), Ok(AnswerOutcome::Advanced));
        }
        assert_eq!(session.current_index(), 4);
        assert_eq!(session.answer(&catalog, 2), Ok(AnswerOutcome::Completed));
        assert_eq!(session.current_index(), 4);
        assert!(session.is_complete(&catalog));
    }

    #[test]
    fn test_last_item_with_gaps_awaits_remaining() {
        let catalog = small_catalog();
        let snapshot = SessionSnapshot {
            current_question: 4,
            ..Default::default()
        };
        let mut session = AssessmentSession::restore(&catalog, snapshot);

        assert_eq!(session.answer(&catalog, 5), Ok(AnswerOutcome::AwaitingRemaining));
        assert_eq!(
            session.missing_items(&catalog),
            vec!["openness", "conscientiousness", "extraversion", "agreeableness"]
        );
    }

    #[test]
    fn test_invalid_rating_rejected() {
        let catalog = small_catalog();
        let mut session = AssessmentSession::new();
        assert_eq!(session.answer(&catalog, 6), Err(SessionError::InvalidRating(6)));
        assert_eq!(session.current_index(), 0);
        assert!(session.responses().is_empty());
    }

    #[test]
    fn test_paused_session_rejects_answers() {
        let catalog = small_catalog();
        let mut session = AssessmentSession::new();
        assert!(session.toggle_pause());
        assert_eq!(session.answer(&catalog, 3), Err(SessionError::Paused));
        assert!(!session.toggle_pause());
        assert_eq!(session.answer(&catalog, 3), Ok(AnswerOutcome::Advanced));
    }

    #[test]
    fn test_navigation_bounds() {
        let catalog = small_catalog();
        let mut session = AssessmentSession::new();

        assert!(!session.previous());
        assert_eq!(session.next(&catalog), None, "unanswered item blocks next");

        session.answer(&catalog, 3).unwrap();
        assert!(session.previous());
        assert_eq!(session.current_rating(&catalog), Some(3));
        assert_eq!(session.next(&catalog), Some(AnswerOutcome::Advanced));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_next_on_last_item_reports_completion() {
        let catalog = small_catalog();
        let mut session = AssessmentSession::new();
        for _ in 0..5 {
            session.answer(&catalog, 4).unwrap();
        }
        assert_eq!(session.current_index(), 4);

        assert_eq!(session.next(&catalog), Some(AnswerOutcome::Completed));
        assert_eq!(session.current_index(), 4);
    }

    #[test]
    fn test_next_on_last_item_with_gaps_awaits_remaining() {
        let catalog = small_catalog();
        let snapshot: SessionSnapshot =
            serde_json::from_str(r#"{"responses": {"stability": 3}, "currentQuestion": 4}"#)
                .unwrap();
        let mut session = AssessmentSession::restore(&catalog, snapshot);

        assert_eq!(session.next(&catalog), Some(AnswerOutcome::AwaitingRemaining));
        assert_eq!(session.current_index(), 4);
    }

    #[test]
    fn test_progress_percent() {
        let catalog = small_catalog();
        let mut session = AssessmentSession::new();
        assert_eq!(
            session.progress(&catalog),
            Progress {
                question_number: 1,
                total: 5,
                answered: 0,
                percent: 20
            }
        );
        session.answer(&catalog, 1).unwrap();
        session.answer(&catalog, 1).unwrap();
        let progress = session.progress(&catalog);
        assert_eq!(progress.question_number, 3);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.percent, 60);
    }

    #[test]
    fn test_snapshot_json_and_restore_clamps() {
        let catalog = small_catalog();
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"responses": {"openness": 2}, "currentQuestion": 42, "paused": true}"#,
        )
        .unwrap();

        let session = AssessmentSession::restore(&catalog, snapshot);
        assert_eq!(session.current_index(), 4);
        assert!(session.is_paused());
        assert_eq!(session.responses().get("openness"), Some(2));

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["currentQuestion"], 4);
        assert_eq!(json["responses"]["openness"], 2);
    }
}
