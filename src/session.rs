use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

use crate::cell::ElementCell;
use crate::dataset::ElementTable;
use crate::detail::ElementDetail;
use crate::dispatch::{Action, ActionKind, DispatchTable};
use crate::filter::FilterState;
use crate::grid::{self, GridSlot};
use crate::modal::{ModalId, Modals};
use crate::quiz::{QuizError, QuizPhase, QuizQuestion, QuizSettings, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Feedback waiting to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl From<&Verdict> for Notice {
    fn from(verdict: &Verdict) -> Self {
        let kind = match verdict {
            Verdict::Correct => NoticeKind::Success,
            Verdict::Incorrect { .. } => NoticeKind::Failure,
        };

        Self {
            kind,
            message: verdict.message(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("no handler registered for {0:?}")]
    UnhandledAction(ActionKind),
}

/// Everything the page shows, held as plain data.
///
/// Actions are applied through the session's [`DispatchTable`]; the front-end only
/// reflects this state and never keeps its own copy of visibility flags.
#[derive(Debug)]
pub struct Session {
    table: ElementTable,
    grid: Vec<GridSlot>,
    filter: FilterState,
    modals: Modals,
    detail: Option<ElementDetail>,
    quiz: QuizPhase,
    notice: Option<Notice>,
    settings: QuizSettings,
    rng: StdRng,
    handlers: DispatchTable,
}

impl Session {
    pub fn new(table: ElementTable, settings: QuizSettings) -> Self {
        Self::with_rng(table, settings, StdRng::from_entropy())
    }

    pub fn with_rng(table: ElementTable, settings: QuizSettings, rng: StdRng) -> Self {
        let grid = grid::build_grid(&table);

        Self {
            table,
            grid,
            filter: FilterState::default(),
            modals: Modals::default(),
            detail: None,
            quiz: QuizPhase::Idle,
            notice: None,
            settings,
            rng,
            handlers: DispatchTable::default(),
        }
    }

    pub fn with_handlers(mut self, handlers: DispatchTable) -> Self {
        self.handlers = handlers;
        self
    }

    /// Applies `action` with the handler registered for its kind.
    pub fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        let kind = action.kind();
        let handler = self
            .handlers
            .handler(kind)
            .ok_or(SessionError::UnhandledAction(kind))?;

        log::debug!("dispatching {:?}", action);
        handler(self, action)
    }

    pub fn table(&self) -> &ElementTable {
        &self.table
    }

    pub fn grid(&self) -> &[GridSlot] {
        &self.grid
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.table.categories()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_visible(&self, cell: &ElementCell) -> bool {
        self.filter.is_visible(cell)
    }

    pub fn visible_cells(&self) -> impl Iterator<Item = &ElementCell> {
        grid::cells(&self.grid).filter(|cell| self.filter.is_visible(cell))
    }

    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    pub fn detail(&self) -> Option<&ElementDetail> {
        self.detail.as_ref()
    }

    pub fn quiz(&self) -> &QuizPhase {
        &self.quiz
    }

    pub fn question(&self) -> Option<&QuizQuestion> {
        self.quiz.question()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Hands pending feedback to the caller, leaving none behind.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

pub(crate) fn apply_search(session: &mut Session, action: Action) -> Result<(), SessionError> {
    let kind = action.kind();
    let Action::Search(query) = action else {
        return Err(SessionError::UnhandledAction(kind));
    };

    session.filter = std::mem::take(&mut session.filter).with_query(&query);
    Ok(())
}

pub(crate) fn apply_category(session: &mut Session, action: Action) -> Result<(), SessionError> {
    let kind = action.kind();
    let Action::FilterCategory(category) = action else {
        return Err(SessionError::UnhandledAction(kind));
    };

    session.filter = std::mem::take(&mut session.filter).with_category(category);
    Ok(())
}

pub(crate) fn show_element(session: &mut Session, action: Action) -> Result<(), SessionError> {
    let kind = action.kind();
    let Action::ShowElement(number) = action else {
        return Err(SessionError::UnhandledAction(kind));
    };

    match session.table.by_number(number) {
        Some(element) => {
            session.detail = Some(ElementDetail::from_element(element));
            session.modals.open(ModalId::ElementDetail);
        }
        None => log::warn!("ignoring detail request for unknown element {}", number),
    }

    Ok(())
}

pub(crate) fn close_modal(session: &mut Session, action: Action) -> Result<(), SessionError> {
    let kind = action.kind();
    let Action::CloseModal(id) = action else {
        return Err(SessionError::UnhandledAction(kind));
    };

    session.modals.close(id);
    if id == ModalId::Quiz {
        session.quiz = QuizPhase::Idle;
    }

    Ok(())
}

pub(crate) fn start_quiz(session: &mut Session, action: Action) -> Result<(), SessionError> {
    if action != Action::StartQuiz {
        return Err(SessionError::UnhandledAction(action.kind()));
    }

    session.quiz = QuizPhase::start(&mut session.rng, session.table.elements(), session.settings)?;
    session.notice = None;
    session.modals.open(ModalId::Quiz);
    Ok(())
}

pub(crate) fn answer_quiz(session: &mut Session, action: Action) -> Result<(), SessionError> {
    let kind = action.kind();
    let Action::Answer(label) = action else {
        return Err(SessionError::UnhandledAction(kind));
    };

    let phase = std::mem::take(&mut session.quiz);
    let outcome = phase.answer(
        &label,
        &mut session.rng,
        session.table.elements(),
        session.settings,
    );

    let (next, verdict) = match outcome {
        Ok(result) => result,
        Err(error) => {
            session.modals.close(ModalId::Quiz);
            return Err(error.into());
        }
    };

    if let Some(verdict) = &verdict {
        log::debug!("quiz answer {:?} scored {:?}", label, verdict);
        session.notice = Some(Notice::from(verdict));
    }

    if next == QuizPhase::Idle {
        session.modals.close(ModalId::Quiz);
    }
    session.quiz = next;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Phase};
    use crate::filter::CategoryFilter;

    fn element(number: u32, symbol: &str, name: &str, col: u8, category: &str) -> Element {
        Element {
            number,
            symbol: symbol.to_string(),
            name: name.to_string(),
            row: 2,
            col,
            category: category.to_string(),
            state: Phase::Solid,
            mass: f64::from(number) * 2.0,
            electron: format!("config-{number}"),
            discovered: "1800".to_string(),
            discoverer: "Someone".to_string(),
        }
    }

    fn session(seed: u64) -> Session {
        let table = ElementTable::new(vec![
            element(3, "Li", "Lithium", 1, "alkali-metal"),
            element(4, "Be", "Beryllium", 2, "alkaline-earth-metal"),
            element(5, "B", "Boron", 13, "metalloid"),
            element(6, "C", "Carbon", 14, "nonmetal"),
            element(7, "N", "Nitrogen", 15, "nonmetal"),
        ]);

        Session::with_rng(table, QuizSettings::default(), StdRng::seed_from_u64(seed))
    }

    fn visible_symbols(session: &Session) -> Vec<String> {
        session
            .visible_cells()
            .map(|cell| cell.symbol.clone())
            .collect()
    }

    #[test]
    fn starts_with_everything_visible_and_closed() {
        let session = session(1);

        assert_eq!(visible_symbols(&session).len(), 5);
        assert!(!session.modals().is_open(ModalId::ElementDetail));
        assert!(!session.modals().is_open(ModalId::Quiz));
        assert_eq!(session.quiz(), &QuizPhase::Idle);
    }

    #[test]
    fn search_and_category_both_apply() {
        let mut session = session(1);

        session
            .dispatch(Action::FilterCategory(CategoryFilter::from_token("nonmetal")))
            .expect("category filter should apply");
        assert_eq!(visible_symbols(&session), vec!["C", "N"]);

        session
            .dispatch(Action::Search("carb".to_string()))
            .expect("search should apply");
        assert_eq!(visible_symbols(&session), vec!["C"]);

        session
            .dispatch(Action::FilterCategory(CategoryFilter::All))
            .expect("category filter should apply");
        assert_eq!(visible_symbols(&session), vec!["C"]);

        session
            .dispatch(Action::Search(String::new()))
            .expect("search should apply");
        assert_eq!(visible_symbols(&session).len(), 5);
    }

    #[test]
    fn showing_an_element_opens_detail() {
        let mut session = session(1);

        session
            .dispatch(Action::ShowElement(6))
            .expect("detail should open");

        let detail = session.detail().expect("detail should be populated");
        assert_eq!(detail.name, "Carbon");
        assert_eq!(detail.mass, "12 u");
        assert_eq!(detail.electron, "config-6");
        assert!(session.modals().is_open(ModalId::ElementDetail));

        session
            .dispatch(Action::CloseModal(ModalId::ElementDetail))
            .expect("detail should close");
        assert!(!session.modals().is_open(ModalId::ElementDetail));
    }

    #[test]
    fn unknown_element_is_ignored() {
        let mut session = session(1);

        session
            .dispatch(Action::ShowElement(99))
            .expect("unknown element should be ignored");

        assert!(session.detail().is_none());
        assert!(!session.modals().is_open(ModalId::ElementDetail));
    }

    #[test]
    fn correct_answer_keeps_quiz_open() {
        let mut session = session(4);
        session.dispatch(Action::StartQuiz).expect("quiz should start");
        let answer = session.question().expect("question pending").answer.clone();

        session
            .dispatch(Action::Answer(answer))
            .expect("answer should be scored");

        assert!(session.modals().is_open(ModalId::Quiz));
        assert!(session.question().is_some());
        assert_eq!(
            session.take_notice(),
            Some(Notice {
                kind: NoticeKind::Success,
                message: "Correct!".to_string()
            })
        );
        assert!(session.notice().is_none());
    }

    #[test]
    fn wrong_answer_closes_quiz() {
        let mut session = session(5);
        session.dispatch(Action::StartQuiz).expect("quiz should start");
        let question = session.question().expect("question pending").clone();
        let wrong = question
            .options
            .iter()
            .find(|option| **option != question.answer)
            .expect("distractor should exist")
            .clone();

        session
            .dispatch(Action::Answer(wrong))
            .expect("answer should be scored");

        assert!(!session.modals().is_open(ModalId::Quiz));
        assert_eq!(session.quiz(), &QuizPhase::Idle);
        let notice = session.take_notice().expect("feedback should be pending");
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(
            notice.message,
            format!("Wrong! The correct answer was {}.", question.answer)
        );
    }

    #[test]
    fn closing_quiz_returns_to_idle() {
        let mut session = session(6);
        session.dispatch(Action::StartQuiz).expect("quiz should start");

        session
            .dispatch(Action::CloseModal(ModalId::Quiz))
            .expect("quiz should close");

        assert_eq!(session.quiz(), &QuizPhase::Idle);
        assert!(!session.modals().is_open(ModalId::Quiz));
    }

    #[test]
    fn quiz_fails_cleanly_on_small_dataset() {
        let table = ElementTable::new(vec![
            element(1, "H", "Hydrogen", 1, "nonmetal"),
            element(2, "He", "Helium", 18, "noble-gas"),
        ]);
        let mut session =
            Session::with_rng(table, QuizSettings::default(), StdRng::seed_from_u64(7));

        let error = session
            .dispatch(Action::StartQuiz)
            .expect_err("two names cannot fill four options");

        assert_eq!(
            error,
            SessionError::Quiz(QuizError::InsufficientUniqueNames {
                required: 4,
                unique: 2
            })
        );
        assert!(!session.modals().is_open(ModalId::Quiz));
    }

    #[test]
    fn unregistered_action_is_reported() {
        let mut session = session(1).with_handlers(DispatchTable::empty());

        let error = session
            .dispatch(Action::StartQuiz)
            .expect_err("empty table handles nothing");

        assert_eq!(error, SessionError::UnhandledAction(ActionKind::StartQuiz));
    }

    #[test]
    fn handlers_are_looked_up_at_dispatch_time() {
        let mut handlers = DispatchTable::default();
        handlers.register(ActionKind::ShowElement, |session, _action| {
            session.modals.open(ModalId::Quiz);
            Ok(())
        });
        let mut session = session(1).with_handlers(handlers);

        session
            .dispatch(Action::ShowElement(3))
            .expect("custom handler should run");

        assert!(session.modals().is_open(ModalId::Quiz));
        assert!(session.detail().is_none());
    }

    #[test]
    fn mismatched_handler_reports_action_kind() {
        let mut handlers = DispatchTable::default();
        handlers.register(ActionKind::StartQuiz, apply_search);
        let mut session = session(1).with_handlers(handlers);

        let error = session
            .dispatch(Action::StartQuiz)
            .expect_err("search handler rejects quiz action");

        assert_eq!(error, SessionError::UnhandledAction(ActionKind::StartQuiz));
    }
}
