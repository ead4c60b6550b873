pub mod cell;
pub mod config;
pub mod dataset;
pub mod demo;
pub mod detail;
pub mod dispatch;
pub mod element;
pub mod filter;
pub mod grid;
pub mod modal;
pub mod quiz;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use cell::{ElementCell, SymbolTone};
pub use config::{CONFIG_GLOBAL, DEFAULT_OPTION_COUNT, ExplorerConfig, MAX_DISTRACTOR_DRAWS};
pub use dataset::{DatasetError, ElementTable};
pub use demo::{BUILTIN_DATASET, builtin_table};
pub use detail::ElementDetail;
pub use dispatch::{Action, ActionKind, DispatchTable, Handler};
pub use element::{Element, Phase};
pub use filter::{CategoryFilter, FilterState};
pub use grid::{
    FootnoteMarker, GRID_COLS, GRID_ROWS, GridSlot, PLACEHOLDER_CLASS, SlotContent, build_grid,
};
pub use modal::{ModalId, ModalVisibility, Modals};
pub use quiz::{QuizError, QuizPhase, QuizQuestion, QuizSettings, Verdict, generate_question};
pub use session::{Notice, NoticeKind, Session, SessionError};
