use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    FlashcardItem, FlashcardSession, QuizOutcome, QuizProgressSnapshot, QuizQuestion, QuizSession,
};
use crate::repositories::ProgressRepository;
use crate::services::outcome_service::OutcomeService;

struct QuizSessionSlot {
    session: QuizSession,
    advance_timer: Option<tokio::task::JoinHandle<()>>,
}

type QuizSessionMap = Arc<RwLock<HashMap<Uuid, QuizSessionSlot>>>;

/// Holds every live quiz and flashcard run. Quiz reveals carry a one-shot
/// timer that advances the session after the configured delay; the timer
/// task owns clones of the shared state it needs, and deleting a session
/// aborts its pending timer.
///
/// Progress snapshots are written after every quiz transition and cleared on
/// completion; completed sessions stay in the map until deleted so the
/// result screen can still read them.
pub struct SessionService {
    quiz_sessions: QuizSessionMap,
    flashcard_sessions: RwLock<HashMap<Uuid, FlashcardSession>>,
    outcomes: Arc<OutcomeService>,
    progress: Arc<dyn ProgressRepository>,
    reveal_delay: Duration,
}

impl SessionService {
    pub fn new(
        outcomes: Arc<OutcomeService>,
        progress: Arc<dyn ProgressRepository>,
        reveal_delay: Duration,
    ) -> Self {
        Self {
            quiz_sessions: Arc::new(RwLock::new(HashMap::new())),
            flashcard_sessions: RwLock::new(HashMap::new()),
            outcomes,
            progress,
            reveal_delay,
        }
    }

    pub async fn start_quiz(
        &self,
        user_id: &str,
        topic: &str,
        questions: Vec<QuizQuestion>,
    ) -> QuizSession {
        let session = QuizSession::new(user_id, topic, questions);
        if !session.is_complete() {
            self.persist_snapshot(user_id, &session.snapshot()).await;
        }

        self.quiz_sessions.write().await.insert(
            session.id,
            QuizSessionSlot {
                session: session.clone(),
                advance_timer: None,
            },
        );
        session
    }

    pub async fn get_quiz_session(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> AppResult<QuizSession> {
        let sessions = self.quiz_sessions.read().await;
        let slot = sessions
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session not found: {}", session_id)))?;
        check_owner(&slot.session.user_id, user_id)?;
        Ok(slot.session.clone())
    }

    /// Lock in an answer. On the first answer for the current question this
    /// persists the revealed snapshot and only then arms the auto-advance
    /// timer, so the timer can never advance past an unpersisted state.
    /// Repeat selections return the unchanged session with no verdict.
    pub async fn submit_answer(
        &self,
        session_id: Uuid,
        user_id: &str,
        option: &str,
    ) -> AppResult<(QuizSession, Option<bool>)> {
        let (session, verdict, snapshot) = {
            let mut sessions = self.quiz_sessions.write().await;
            let slot = sessions.get_mut(&session_id).ok_or_else(|| {
                AppError::NotFound(format!("Quiz session not found: {}", session_id))
            })?;
            check_owner(&slot.session.user_id, user_id)?;

            let verdict = slot.session.select_answer(option);
            let snapshot = verdict.map(|_| slot.session.snapshot());
            (slot.session.clone(), verdict, snapshot)
        };

        if let Some(snapshot) = snapshot {
            self.persist_snapshot(user_id, &snapshot).await;

            let mut sessions = self.quiz_sessions.write().await;
            if let Some(slot) = sessions.get_mut(&session_id) {
                slot.advance_timer = Some(self.schedule_auto_advance(session_id));
            }
        }

        Ok((session, verdict))
    }

    pub async fn delete_quiz_session(&self, session_id: Uuid, user_id: &str) -> AppResult<()> {
        let mut sessions = self.quiz_sessions.write().await;
        let slot = sessions
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session not found: {}", session_id)))?;
        check_owner(&slot.session.user_id, user_id)?;

        if let Some(slot) = sessions.remove(&session_id) {
            if let Some(timer) = slot.advance_timer {
                timer.abort();
            }
        }
        Ok(())
    }

    /// The user's saved mid-quiz position, if an interrupted run left one.
    pub async fn quiz_progress(&self, user_id: &str) -> AppResult<Option<QuizProgressSnapshot>> {
        self.progress.load(user_id).await
    }

    pub async fn start_flashcards(
        &self,
        user_id: &str,
        topic: &str,
        difficulty: &str,
        cards: Vec<FlashcardItem>,
    ) -> FlashcardSession {
        let session = FlashcardSession::new(user_id, topic, difficulty, cards);
        self.flashcard_sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    pub async fn get_flashcard_session(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> AppResult<FlashcardSession> {
        let sessions = self.flashcard_sessions.read().await;
        let session = sessions.get(&session_id).ok_or_else(|| {
            AppError::NotFound(format!("Flashcard session not found: {}", session_id))
        })?;
        check_owner(&session.user_id, user_id)?;
        Ok(session.clone())
    }

    pub async fn flip_card(&self, session_id: Uuid, user_id: &str) -> AppResult<FlashcardSession> {
        let mut sessions = self.flashcard_sessions.write().await;
        let session = sessions.get_mut(&session_id).ok_or_else(|| {
            AppError::NotFound(format!("Flashcard session not found: {}", session_id))
        })?;
        check_owner(&session.user_id, user_id)?;

        session.flip();
        Ok(session.clone())
    }

    /// Mark the current card and advance. The completing mark records the
    /// run's outcome before returning.
    pub async fn mark_card(
        &self,
        session_id: Uuid,
        user_id: &str,
        known: bool,
    ) -> AppResult<FlashcardSession> {
        let session = {
            let mut sessions = self.flashcard_sessions.write().await;
            let session = sessions.get_mut(&session_id).ok_or_else(|| {
                AppError::NotFound(format!("Flashcard session not found: {}", session_id))
            })?;
            check_owner(&session.user_id, user_id)?;

            if session.complete {
                return Err(AppError::ValidationError(
                    "The flashcard run is already complete".to_string(),
                ));
            }
            if !session.mark(known) {
                return Err(AppError::ValidationError(
                    "Flip the card to its back before marking it".to_string(),
                ));
            }
            session.clone()
        };

        if session.complete {
            self.outcomes
                .record_flashcard_outcome(session.outcome())
                .await;
        }
        Ok(session)
    }

    pub async fn next_card(&self, session_id: Uuid, user_id: &str) -> AppResult<FlashcardSession> {
        let mut sessions = self.flashcard_sessions.write().await;
        let session = sessions.get_mut(&session_id).ok_or_else(|| {
            AppError::NotFound(format!("Flashcard session not found: {}", session_id))
        })?;
        check_owner(&session.user_id, user_id)?;

        session.next();
        Ok(session.clone())
    }

    pub async fn previous_card(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> AppResult<FlashcardSession> {
        let mut sessions = self.flashcard_sessions.write().await;
        let session = sessions.get_mut(&session_id).ok_or_else(|| {
            AppError::NotFound(format!("Flashcard session not found: {}", session_id))
        })?;
        check_owner(&session.user_id, user_id)?;

        session.previous();
        Ok(session.clone())
    }

    pub async fn delete_flashcard_session(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> AppResult<()> {
        let mut sessions = self.flashcard_sessions.write().await;
        let session = sessions.get(&session_id).ok_or_else(|| {
            AppError::NotFound(format!("Flashcard session not found: {}", session_id))
        })?;
        check_owner(&session.user_id, user_id)?;

        sessions.remove(&session_id);
        Ok(())
    }

    /// Abort every pending auto-advance timer and drop all live sessions.
    /// Called once at server shutdown.
    pub async fn shutdown(&self) {
        let mut sessions = self.quiz_sessions.write().await;
        for (_, slot) in sessions.drain() {
            if let Some(timer) = slot.advance_timer {
                timer.abort();
            }
        }
        self.flashcard_sessions.write().await.clear();
    }

    fn schedule_auto_advance(&self, session_id: Uuid) -> tokio::task::JoinHandle<()> {
        let sessions = Arc::clone(&self.quiz_sessions);
        let outcomes = Arc::clone(&self.outcomes);
        let progress = Arc::clone(&self.progress);
        let delay = self.reveal_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            advance_after_reveal(&sessions, &outcomes, &progress, session_id).await;
        })
    }

    async fn persist_snapshot(&self, user_id: &str, snapshot: &QuizProgressSnapshot) {
        if let Err(err) = self.progress.store(user_id, snapshot).await {
            log::warn!("Failed to persist quiz progress: {}", err);
        }
    }
}

fn check_owner(session_user: &str, user_id: &str) -> AppResult<()> {
    if session_user != user_id {
        return Err(AppError::Unauthorized(
            "You can only access your own sessions".to_string(),
        ));
    }
    Ok(())
}

enum AfterReveal {
    Continue(String, QuizProgressSnapshot),
    Finished(QuizOutcome),
}

/// The timer body: move the session off its revealed answer, then persist
/// the new position or, after the last question, record the outcome and
/// clear the saved progress.
async fn advance_after_reveal(
    sessions: &RwLock<HashMap<Uuid, QuizSessionSlot>>,
    outcomes: &OutcomeService,
    progress: &Arc<dyn ProgressRepository>,
    session_id: Uuid,
) {
    let step = {
        let mut sessions = sessions.write().await;
        let slot = match sessions.get_mut(&session_id) {
            Some(slot) => slot,
            None => return,
        };
        slot.session.advance();
        slot.advance_timer = None;

        if slot.session.is_complete() {
            AfterReveal::Finished(slot.session.outcome())
        } else {
            AfterReveal::Continue(slot.session.user_id.clone(), slot.session.snapshot())
        }
    };

    match step {
        AfterReveal::Continue(user_id, snapshot) => {
            if let Err(err) = progress.store(&user_id, &snapshot).await {
                log::warn!("Failed to persist quiz progress: {}", err);
            }
        }
        AfterReveal::Finished(outcome) => {
            let user_id = outcome.user_id.clone();
            outcomes.record_quiz_outcome(outcome).await;
            if let Err(err) = progress.clear(&user_id).await {
                log::warn!("Failed to clear quiz progress: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{AssessmentOutcome, CardSide, QuizPhase};
    use crate::test_utils::fakes::{InMemoryOutcomeRepository, InMemoryProgressRepository};
    use crate::test_utils::fixtures::{test_cards, test_questions};

    fn service(
        delay_ms: u64,
    ) -> (
        SessionService,
        Arc<InMemoryOutcomeRepository>,
        Arc<InMemoryProgressRepository>,
    ) {
        let outcome_repo = Arc::new(InMemoryOutcomeRepository::default());
        let progress_repo = Arc::new(InMemoryProgressRepository::default());
        let service = SessionService::new(
            Arc::new(OutcomeService::new(outcome_repo.clone())),
            progress_repo.clone(),
            Duration::from_millis(delay_ms),
        );
        (service, outcome_repo, progress_repo)
    }

    #[tokio::test]
    async fn starting_a_quiz_persists_the_initial_snapshot() {
        let (service, _, progress) = service(25);

        let session = service
            .start_quiz("leerder-1", "Water", test_questions(3))
            .await;

        assert_eq!(session.phase, QuizPhase::AwaitingAnswer);
        let snapshot = progress.snapshots.read().unwrap()["leerder-1"].clone();
        assert_eq!(snapshot.topic, "Water");
        assert_eq!(snapshot.question_index, 0);

        let fetched = service
            .get_quiz_session(session.id, "leerder-1")
            .await
            .unwrap();
        assert_eq!(fetched.id, session.id);
    }

    #[tokio::test]
    async fn first_answer_scores_and_repeat_answers_are_ignored() {
        let (service, _, _) = service(500);
        let session = service
            .start_quiz("leerder-1", "Water", test_questions(2))
            .await;

        let (revealed, verdict) = service
            .submit_answer(session.id, "leerder-1", "A")
            .await
            .unwrap();
        assert_eq!(verdict, Some(true));
        assert_eq!(revealed.phase, QuizPhase::Revealed);
        assert_eq!(revealed.score, 1);

        let (unchanged, verdict) = service
            .submit_answer(session.id, "leerder-1", "B")
            .await
            .unwrap();
        assert_eq!(verdict, None);
        assert_eq!(unchanged.score, 1);
        assert_eq!(unchanged.answers.len(), 1);
    }

    #[tokio::test]
    async fn timer_advances_to_the_next_question() {
        let (service, _, progress) = service(25);
        let session = service
            .start_quiz("leerder-1", "Water", test_questions(2))
            .await;

        service
            .submit_answer(session.id, "leerder-1", "A")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;

        let advanced = service
            .get_quiz_session(session.id, "leerder-1")
            .await
            .unwrap();
        assert_eq!(advanced.phase, QuizPhase::AwaitingAnswer);
        assert_eq!(advanced.current_index, 1);

        let snapshot = progress.snapshots.read().unwrap()["leerder-1"].clone();
        assert_eq!(snapshot.question_index, 1);
    }

    #[tokio::test]
    async fn completing_the_quiz_records_an_outcome_and_clears_progress() {
        let (service, outcomes, progress) = service(25);
        let session = service
            .start_quiz("leerder-1", "Water", test_questions(1))
            .await;

        let (_, verdict) = service
            .submit_answer(session.id, "leerder-1", "B")
            .await
            .unwrap();
        assert_eq!(verdict, Some(false));
        tokio::time::sleep(Duration::from_millis(150)).await;

        let finished = service
            .get_quiz_session(session.id, "leerder-1")
            .await
            .unwrap();
        assert_eq!(finished.phase, QuizPhase::Complete);

        let recorded = outcomes.outcomes.read().unwrap();
        assert_eq!(recorded.len(), 1);
        match &recorded[0] {
            AssessmentOutcome::Quiz(outcome) => {
                assert_eq!(outcome.score, 0);
                assert_eq!(outcome.total_questions, 1);
                assert_eq!(outcome.topic, "Water");
            }
            other => panic!("expected quiz outcome, got {:?}", other),
        }
        assert!(progress.snapshots.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sessions_are_private_to_their_owner() {
        let (service, _, _) = service(500);
        let session = service
            .start_quiz("leerder-1", "Water", test_questions(1))
            .await;

        let err = service
            .get_quiz_session(session.id, "leerder-2")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let err = service
            .submit_answer(session.id, "leerder-2", "A")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unknown_sessions_are_not_found() {
        let (service, _, _) = service(25);

        let err = service
            .get_quiz_session(Uuid::new_v4(), "leerder-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .flip_card(Uuid::new_v4(), "leerder-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn deleting_a_session_aborts_its_pending_advance() {
        let (service, outcomes, progress) = service(200);
        let session = service
            .start_quiz("leerder-1", "Water", test_questions(1))
            .await;

        service
            .submit_answer(session.id, "leerder-1", "A")
            .await
            .unwrap();
        service
            .delete_quiz_session(session.id, "leerder-1")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert!(outcomes.outcomes.read().unwrap().is_empty());
        // The abandoned run's snapshot stays behind for resume.
        assert!(progress.snapshots.read().unwrap().contains_key("leerder-1"));
        let err = service
            .get_quiz_session(session.id, "leerder-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn marking_requires_the_back_of_the_card() {
        let (service, outcomes, _) = service(25);
        let session = service
            .start_flashcards("leerder-1", "Water", "Maklik", test_cards("Water", "Maklik", 2))
            .await;

        let err = service
            .mark_card(session.id, "leerder-1", true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        service.flip_card(session.id, "leerder-1").await.unwrap();
        let marked = service
            .mark_card(session.id, "leerder-1", true)
            .await
            .unwrap();
        assert_eq!(marked.current_index, 1);
        assert_eq!(marked.side, CardSide::Front);
        assert!(outcomes.outcomes.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn completing_a_flashcard_run_records_the_tallies() {
        let (service, outcomes, _) = service(25);
        let session = service
            .start_flashcards("leerder-1", "Water", "Maklik", test_cards("Water", "Maklik", 2))
            .await;

        service.flip_card(session.id, "leerder-1").await.unwrap();
        service.mark_card(session.id, "leerder-1", true).await.unwrap();
        service.flip_card(session.id, "leerder-1").await.unwrap();
        let finished = service
            .mark_card(session.id, "leerder-1", false)
            .await
            .unwrap();
        assert!(finished.complete);

        let recorded = outcomes.outcomes.read().unwrap();
        assert_eq!(recorded.len(), 1);
        match &recorded[0] {
            AssessmentOutcome::Flashcard(outcome) => {
                assert_eq!(outcome.total_cards, 2);
                assert_eq!(outcome.known_cards, 1);
                assert_eq!(outcome.unknown_cards, 1);
                assert_eq!(outcome.difficulty, "Maklik");
            }
            other => panic!("expected flashcard outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn free_navigation_never_marks_or_completes() {
        let (service, outcomes, _) = service(25);
        let session = service
            .start_flashcards("leerder-1", "Water", "Maklik", test_cards("Water", "Maklik", 2))
            .await;

        let at_last = service.next_card(session.id, "leerder-1").await.unwrap();
        assert_eq!(at_last.current_index, 1);
        let still_last = service.next_card(session.id, "leerder-1").await.unwrap();
        assert_eq!(still_last.current_index, 1);

        let back = service
            .previous_card(session.id, "leerder-1")
            .await
            .unwrap();
        assert_eq!(back.current_index, 0);
        assert!(!back.complete);
        assert!(back.known.is_empty() && back.unknown.is_empty());
        assert!(outcomes.outcomes.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn flipping_twice_restores_the_front() {
        let (service, _, _) = service(25);
        let session = service
            .start_flashcards("leerder-1", "Water", "Maklik", test_cards("Water", "Maklik", 1))
            .await;

        let flipped = service.flip_card(session.id, "leerder-1").await.unwrap();
        assert_eq!(flipped.side, CardSide::Back);
        let restored = service.flip_card(session.id, "leerder-1").await.unwrap();
        assert_eq!(restored.side, CardSide::Front);
    }

    #[tokio::test]
    async fn marking_a_completed_run_is_rejected() {
        let (service, outcomes, _) = service(25);
        let session = service
            .start_flashcards("leerder-1", "Water", "Maklik", test_cards("Water", "Maklik", 1))
            .await;

        service.flip_card(session.id, "leerder-1").await.unwrap();
        service.mark_card(session.id, "leerder-1", true).await.unwrap();

        let err = service
            .mark_card(session.id, "leerder-1", false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(outcomes.outcomes.read().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn shutdown_clears_live_sessions() {
        let (service, _, _) = service(500);
        let quiz = service
            .start_quiz("leerder-1", "Water", test_questions(1))
            .await;
        service
            .submit_answer(quiz.id, "leerder-1", "A")
            .await
            .unwrap();

        service.shutdown().await;

        let err = service
            .get_quiz_session(quiz.id, "leerder-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
