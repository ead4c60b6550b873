use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::config::{DEFAULT_OPTION_COUNT, MAX_DISTRACTOR_DRAWS};
use crate::element::Element;

/// Knobs for question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    /// Number of answer options, the correct one included.
    pub option_count: usize,
    /// Random distractor draws attempted before filling from the unused names.
    pub max_draws: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
            max_draws: MAX_DISTRACTOR_DRAWS,
        }
    }
}

/// A single symbol-recognition question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Symbol of the target element, shown as the question.
    pub symbol: String,
    /// Name of the target element.
    pub answer: String,
    /// Unique answer labels in display order. Contains `answer` exactly once.
    pub options: Vec<String>,
}

impl QuizQuestion {
    pub fn prompt(&self) -> String {
        format!("Which element has the symbol {}?", self.symbol)
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }

    pub fn is_correct(&self, label: &str) -> bool {
        label == self.answer
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("cannot build a question from an empty dataset")]
    EmptyDataset,
    #[error("option count must be at least 2")]
    OptionCountTooSmall,
    #[error("requires at least {required} unique element names but only {unique} available")]
    InsufficientUniqueNames { required: usize, unique: usize },
}

/// Builds one question: a random target plus distinct random distractor names.
///
/// Distractors are drawn uniformly, rejecting names already offered. After
/// `settings.max_draws` draws the remaining slots are filled from the names not yet
/// offered, so generation always terminates. Options are shuffled uniformly.
///
/// # Errors
/// * [`QuizError::OptionCountTooSmall`] if fewer than two options are requested.
/// * [`QuizError::EmptyDataset`] if `elements` is empty.
/// * [`QuizError::InsufficientUniqueNames`] if the dataset holds fewer distinct names
///   than the requested option count.
pub fn generate_question<R: Rng + ?Sized>(
    rng: &mut R,
    elements: &[Element],
    settings: QuizSettings,
) -> Result<QuizQuestion, QuizError> {
    if settings.option_count < 2 {
        return Err(QuizError::OptionCountTooSmall);
    }

    let target = elements.choose(rng).ok_or(QuizError::EmptyDataset)?;

    let mut seen = HashSet::new();
    let unique_names: Vec<&str> = elements
        .iter()
        .map(|element| element.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect();

    if unique_names.len() < settings.option_count {
        return Err(QuizError::InsufficientUniqueNames {
            required: settings.option_count,
            unique: unique_names.len(),
        });
    }

    let mut options = vec![target.name.clone()];
    let mut draws = 0;

    while options.len() < settings.option_count && draws < settings.max_draws {
        draws += 1;

        if let Some(candidate) = elements.choose(rng) {
            if !options.contains(&candidate.name) {
                options.push(candidate.name.clone());
            }
        }
    }

    if options.len() < settings.option_count {
        log::debug!(
            "distractor draws exhausted after {} attempts, filling from unused names",
            draws
        );

        let mut unused: Vec<&str> = unique_names
            .into_iter()
            .filter(|name| !options.iter().any(|option| option == name))
            .collect();
        unused.shuffle(rng);

        let missing = settings.option_count - options.len();
        options.extend(unused.into_iter().take(missing).map(str::to_string));
    }

    options.shuffle(rng);

    Ok(QuizQuestion {
        symbol: target.symbol.clone(),
        answer: target.name.clone(),
        options,
    })
}

/// Outcome of answering a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { answer: String },
}

impl Verdict {
    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => "Correct!".to_string(),
            Verdict::Incorrect { answer } => {
                format!("Wrong! The correct answer was {}.", answer)
            }
        }
    }
}

/// Quiz lifecycle: idle, or waiting for an answer to a question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Idle,
    AwaitingAnswer(QuizQuestion),
}

impl QuizPhase {
    pub fn question(&self) -> Option<&QuizQuestion> {
        match self {
            QuizPhase::Idle => None,
            QuizPhase::AwaitingAnswer(question) => Some(question),
        }
    }

    /// Enters `AwaitingAnswer` with a freshly generated question.
    pub fn start<R: Rng + ?Sized>(
        rng: &mut R,
        elements: &[Element],
        settings: QuizSettings,
    ) -> Result<Self, QuizError> {
        generate_question(rng, elements, settings).map(QuizPhase::AwaitingAnswer)
    }

    /// Scores `label` against the pending question.
    ///
    /// A correct answer moves straight on to a new question; an incorrect one returns to
    /// `Idle`. Answering while idle changes nothing and yields no verdict.
    pub fn answer<R: Rng + ?Sized>(
        self,
        label: &str,
        rng: &mut R,
        elements: &[Element],
        settings: QuizSettings,
    ) -> Result<(Self, Option<Verdict>), QuizError> {
        let question = match self {
            QuizPhase::Idle => return Ok((QuizPhase::Idle, None)),
            QuizPhase::AwaitingAnswer(question) => question,
        };

        if question.is_correct(label) {
            let next = QuizPhase::start(rng, elements, settings)?;
            Ok((next, Some(Verdict::Correct)))
        } else {
            Ok((
                QuizPhase::Idle,
                Some(Verdict::Incorrect {
                    answer: question.answer,
                }),
            ))
        }
    }
}
