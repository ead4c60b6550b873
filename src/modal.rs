use std::fmt;

/// Modal panels known to the page, addressed by their DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    ElementDetail,
    Quiz,
}

impl ModalId {
    pub fn dom_id(self) -> &'static str {
        match self {
            ModalId::ElementDetail => "element-modal",
            ModalId::Quiz => "quiz-modal",
        }
    }

    pub fn content_id(self) -> &'static str {
        match self {
            ModalId::ElementDetail => "modal-content",
            ModalId::Quiz => "quiz-content",
        }
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
}

impl ModalVisibility {
    /// Layout class reflecting the visibility flag.
    pub fn class(self) -> &'static str {
        match self {
            ModalVisibility::Hidden => "hidden",
            ModalVisibility::Shown => "flex",
        }
    }
}

/// Visibility of every modal. Modals never affect one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modals {
    detail: ModalVisibility,
    quiz: ModalVisibility,
}

impl Modals {
    pub fn open(&mut self, id: ModalId) {
        log::debug!("opening modal {id}");
        *self.slot(id) = ModalVisibility::Shown;
    }

    pub fn close(&mut self, id: ModalId) {
        log::debug!("closing modal {id}");
        *self.slot(id) = ModalVisibility::Hidden;
    }

    pub fn visibility(&self, id: ModalId) -> ModalVisibility {
        match id {
            ModalId::ElementDetail => self.detail,
            ModalId::Quiz => self.quiz,
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.visibility(id) == ModalVisibility::Shown
    }

    fn slot(&mut self, id: ModalId) -> &mut ModalVisibility {
        match id {
            ModalId::ElementDetail => &mut self.detail,
            ModalId::Quiz => &mut self.quiz,
        }
    }
}
