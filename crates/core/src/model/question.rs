use crate::model::ids::{OPTION_COUNT, OptionIndex, QUESTION_COUNT, QuestionIndex};

/// Points awarded per step of progress; question `k` is worth `(k + 1) * POINTS_PER_STEP`.
pub const POINTS_PER_STEP: u32 = 1_000;

/// A single multiple-choice prompt from the fixed question table.
///
/// `reward_label` is display text for the prize tier. It is not used when
/// computing the score; see [`points_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    text: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct: OptionIndex,
    reward_label: &'static str,
}

impl Question {
    const fn new(
        text: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct: OptionIndex,
        reward_label: &'static str,
    ) -> Self {
        Self {
            text,
            options,
            correct,
            reward_label,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn options(&self) -> &[&'static str; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: OptionIndex) -> &'static str {
        self.options[index.as_usize()]
    }

    #[must_use]
    pub fn correct(&self) -> OptionIndex {
        self.correct
    }

    #[must_use]
    pub fn correct_option(&self) -> &'static str {
        self.option(self.correct)
    }

    #[must_use]
    pub fn is_correct(&self, answer: OptionIndex) -> bool {
        answer == self.correct
    }

    #[must_use]
    pub fn reward_label(&self) -> &'static str {
        self.reward_label
    }
}

/// The compiled-in question table, ordered by increasing difficulty.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question::new(
        "¿Cuál es el símbolo universal de la paz?",
        ["Una rosa", "Una paloma", "Un corazón", "Una estrella"],
        OptionIndex::B,
        "$1,000",
    ),
    Question::new(
        "¿Quién fue el líder de la resistencia no violenta en la India?",
        [
            "Nelson Mandela",
            "Martin Luther King Jr.",
            "Mahatma Gandhi",
            "Dalai Lama",
        ],
        OptionIndex::C,
        "$2,000",
    ),
    Question::new(
        "¿Cuál es el Día Internacional de la Paz?",
        [
            "21 de septiembre",
            "1 de enero",
            "25 de diciembre",
            "10 de diciembre",
        ],
        OptionIndex::A,
        "$5,000",
    ),
    Question::new(
        "¿Qué organización internacional fue creada para mantener la paz mundial?",
        ["UNESCO", "ONU", "Cruz Roja", "UNICEF"],
        OptionIndex::B,
        "$10,000",
    ),
    Question::new(
        "¿Quién dijo 'La paz no es la ausencia de conflicto, sino la presencia de justicia'?",
        [
            "Martin Luther King Jr.",
            "Nelson Mandela",
            "Mahatma Gandhi",
            "Mother Teresa",
        ],
        OptionIndex::A,
        "$25,000",
    ),
    Question::new(
        "¿Cuál de estos es un principio fundamental de la cultura de paz?",
        ["Competencia", "Tolerancia", "Individualismo", "Dominación"],
        OptionIndex::B,
        "$50,000",
    ),
    Question::new(
        "¿En qué año se firmó la Declaración Universal de los Derechos Humanos?",
        ["1945", "1948", "1950", "1953"],
        OptionIndex::B,
        "$100,000",
    ),
    Question::new(
        "¿Cuál es el objetivo principal de la mediación en conflictos?",
        ["Ganar", "Castigar", "Reconciliar", "Competir"],
        OptionIndex::C,
        "$500,000",
    ),
    Question::new(
        "¿Qué significa 'Ubuntu' en la filosofía africana de paz?",
        [
            "Yo soy porque nosotros somos",
            "La fuerza hace el derecho",
            "Cada uno por sí mismo",
            "El poder sobre otros",
        ],
        OptionIndex::A,
        "$1,000,000",
    ),
];

/// Looks up a question by position.
#[must_use]
pub fn question(index: QuestionIndex) -> &'static Question {
    &QUESTIONS[index.as_usize()]
}

/// Points for correctly answering the question at `index`.
#[must_use]
pub fn points_for(index: QuestionIndex) -> u32 {
    (u32::from(index.value()) + 1) * POINTS_PER_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_indices() -> impl Iterator<Item = QuestionIndex> {
        (0..QUESTION_COUNT as u8).map(|value| QuestionIndex::new(value).unwrap())
    }

    #[test]
    fn every_question_has_four_options_and_a_valid_answer() {
        for question in &QUESTIONS {
            assert_eq!(question.options().len(), 4);
            assert!(question.correct().as_usize() < 4);
            assert!(!question.text().is_empty());
            assert!(question.options().iter().all(|option| !option.is_empty()));
        }
    }

    #[test]
    fn points_escalate_with_position() {
        let points: Vec<u32> = all_indices().map(points_for).collect();
        assert_eq!(
            points,
            vec![1_000, 2_000, 3_000, 4_000, 5_000, 6_000, 7_000, 8_000, 9_000]
        );
        assert_eq!(points.iter().sum::<u32>(), 45_000);
    }

    #[test]
    fn reward_labels_are_cosmetic() {
        assert_eq!(question(QuestionIndex::FIRST).reward_label(), "$1,000");
        assert_eq!(question(QuestionIndex::LAST).reward_label(), "$1,000,000");
        assert_ne!(points_for(QuestionIndex::LAST), 1_000_000);
    }

    #[test]
    fn correct_option_text_matches_index() {
        let first = question(QuestionIndex::FIRST);
        assert_eq!(first.correct_option(), "Una paloma");
        assert!(first.is_correct(OptionIndex::B));
        assert!(!first.is_correct(OptionIndex::A));

        let last = question(QuestionIndex::LAST);
        assert_eq!(last.correct_option(), "Yo soy porque nosotros somos");
    }
}
