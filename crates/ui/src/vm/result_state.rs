use std::collections::BTreeMap;

/// The collapsible sections of the results page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Summary,
    Audio,
    Flashcards,
    Quiz,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Summary,
        SectionKind::Audio,
        SectionKind::Flashcards,
        SectionKind::Quiz,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Audio => "Audio Summary",
            SectionKind::Flashcards => "Flashcards",
            SectionKind::Quiz => "Quiz Questions",
        }
    }

    /// Stable DOM id of the section header button.
    #[must_use]
    pub fn toggle_id(self) -> &'static str {
        match self {
            SectionKind::Summary => "results-toggle-summary",
            SectionKind::Audio => "results-toggle-audio",
            SectionKind::Flashcards => "results-toggle-flashcards",
            SectionKind::Quiz => "results-toggle-quiz",
        }
    }

    const fn slot(self) -> usize {
        match self {
            SectionKind::Summary => 0,
            SectionKind::Audio => 1,
            SectionKind::Flashcards => 2,
            SectionKind::Quiz => 3,
        }
    }
}

/// Expanded/collapsed flag per section. Everything starts expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionVisibility([bool; 4]);

impl Default for SectionVisibility {
    fn default() -> Self {
        Self([true; 4])
    }
}

impl SectionVisibility {
    #[must_use]
    pub fn is_expanded(&self, kind: SectionKind) -> bool {
        self.0[kind.slot()]
    }

    #[must_use]
    pub fn toggled(mut self, kind: SectionKind) -> Self {
        let slot = kind.slot();
        self.0[slot] = !self.0[slot];
        self
    }
}

/// Which flashcards currently show their answer, keyed by position.
///
/// Entries are only ever added or flipped; a missing entry reads as the
/// question side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFlipState(BTreeMap<usize, bool>);

impl CardFlipState {
    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.0.get(&index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.0.clone();
        let flipped = !self.is_flipped(index);
        next.insert(index, flipped);
        Self(next)
    }

    #[cfg(test)]
    fn flipped_count(&self) -> usize {
        self.0.values().filter(|flipped| **flipped).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultIntent {
    ToggleSection(SectionKind),
    ToggleCard(usize),
}

/// Local interaction state of one mounted results page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultViewState {
    pub sections: SectionVisibility,
    pub flipped: CardFlipState,
}

impl ResultViewState {
    #[must_use]
    pub fn reduce(&self, intent: ResultIntent) -> Self {
        match intent {
            ResultIntent::ToggleSection(kind) => Self {
                sections: self.sections.toggled(kind),
                flipped: self.flipped.clone(),
            },
            ResultIntent::ToggleCard(index) => Self {
                sections: self.sections,
                flipped: self.flipped.toggled(index),
            },
        }
    }
}
