use std::collections::HashMap;

use crate::filter::CategoryFilter;
use crate::modal::ModalId;
use crate::session::{self, Session, SessionError};

/// User event, identified by what it acts on rather than by a bound closure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// The search box changed to the given text.
    Search(String),
    FilterCategory(CategoryFilter),
    /// An element cell was clicked; carries the atomic number.
    ShowElement(u32),
    CloseModal(ModalId),
    StartQuiz,
    /// A quiz option with the given label was chosen.
    Answer(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Search,
    FilterCategory,
    ShowElement,
    CloseModal,
    StartQuiz,
    Answer,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Search(_) => ActionKind::Search,
            Action::FilterCategory(_) => ActionKind::FilterCategory,
            Action::ShowElement(_) => ActionKind::ShowElement,
            Action::CloseModal(_) => ActionKind::CloseModal,
            Action::StartQuiz => ActionKind::StartQuiz,
            Action::Answer(_) => ActionKind::Answer,
        }
    }
}

pub type Handler = fn(&mut Session, Action) -> Result<(), SessionError>;

/// Maps each kind of action to the handler that applies it to a session.
#[derive(Debug, Clone)]
pub struct DispatchTable {
    handlers: HashMap<ActionKind, Handler>,
}

impl DispatchTable {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Installs `handler` for `kind`, returning the handler it replaces.
    pub fn register(&mut self, kind: ActionKind, handler: Handler) -> Option<Handler> {
        self.handlers.insert(kind, handler)
    }

    pub fn handler(&self, kind: ActionKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(ActionKind::Search, session::apply_search);
        table.register(ActionKind::FilterCategory, session::apply_category);
        table.register(ActionKind::ShowElement, session::show_element);
        table.register(ActionKind::CloseModal, session::close_modal);
        table.register(ActionKind::StartQuiz, session::start_quiz);
        table.register(ActionKind::Answer, session::answer_quiz);
        table
    }
}
