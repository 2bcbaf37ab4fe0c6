use std::collections::HashSet;

use crate::film::FilmStill;

/// Number of option labels every still must offer.
pub const OPTION_COUNT: usize = 4;

/// Points awarded for a correct answer, multiplied by the current level.
pub const BASE_POINTS: u32 = 10;

/// Delay before the session advances to the next still after a submission.
pub const ADVANCE_DELAY_MS: u64 = 2000;

/// Outcome of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Visual state of one option control after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

/// What a submission did to the session, plus how each option control
/// should be marked until the next still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReport {
    pub verdict: Verdict,
    /// Points this submission added (zero on a mismatch).
    pub points_awarded: u32,
    /// Score after the submission.
    pub score: u32,
    /// Level after the submission.
    pub level: u32,
    /// One mark per option, parallel to the still's option order. Exactly
    /// one entry is [`OptionMark::Correct`].
    pub marks: Vec<OptionMark>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("session requires at least one film still")]
    EmptyDeck,
    #[error("still \"{title}\" must offer exactly {expected} options but has {actual}")]
    WrongOptionCount {
        title: String,
        expected: usize,
        actual: usize,
    },
    #[error("still \"{title}\" repeats the option \"{option}\"")]
    DuplicateOption { title: String, option: String },
    #[error("still \"{title}\" does not list its own title among the options")]
    MissingAnswerOption { title: String },
    #[error("\"{label}\" is not one of the current options")]
    UnknownOption { label: String },
}

/// Cyclic trivia session over a fixed deck of stills.
///
/// The current index wraps modulo the deck size on [`GameSession::advance`],
/// so the session never terminates and the index can never leave range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    stills: Vec<FilmStill>,
    current_index: usize,
    score: u32,
    level: u32,
}

impl GameSession {
    /// Builds a session over `stills`, validating the whole deck up front.
    ///
    /// # Errors
    /// * [`GameError::EmptyDeck`] if no stills are provided.
    /// * [`GameError::WrongOptionCount`], [`GameError::DuplicateOption`] or
    ///   [`GameError::MissingAnswerOption`] if any still breaks the option
    ///   invariants.
    pub fn new(stills: Vec<FilmStill>) -> Result<Self, GameError> {
        if stills.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        for still in &stills {
            validate_still(still)?;
        }

        Ok(Self {
            stills,
            current_index: 0,
            score: 0,
            level: 1,
        })
    }

    pub fn current(&self) -> &FilmStill {
        &self.stills[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn still_count(&self) -> usize {
        self.stills.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Scores `selected` against the current still.
    ///
    /// A match adds `BASE_POINTS * level` to the score and then raises the
    /// level by one; a mismatch changes neither. The returned report marks
    /// the selected control and always marks the true answer as correct,
    /// so a wrong pick shows both at once.
    ///
    /// # Errors
    /// Returns [`GameError::UnknownOption`] when `selected` is not among
    /// the current still's options.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerReport, GameError> {
        let still = &self.stills[self.current_index];

        if !still.has_option(selected) {
            return Err(GameError::UnknownOption {
                label: selected.to_string(),
            });
        }

        let correct = selected == still.answer;
        let points_awarded = if correct { BASE_POINTS * self.level } else { 0 };

        let marks = still
            .options
            .iter()
            .map(|option| {
                if *option == still.answer {
                    OptionMark::Correct
                } else if option == selected {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Neutral
                }
            })
            .collect();

        let verdict = if correct {
            self.score += points_awarded;
            self.level += 1;
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        Ok(AnswerReport {
            verdict,
            points_awarded,
            score: self.score,
            level: self.level,
            marks,
        })
    }

    /// Moves to the next still, wrapping back to the first after the last.
    pub fn advance(&mut self) -> &FilmStill {
        self.current_index = (self.current_index + 1) % self.stills.len();
        self.current()
    }
}

fn validate_still(still: &FilmStill) -> Result<(), GameError> {
    if still.options.len() != OPTION_COUNT {
        return Err(GameError::WrongOptionCount {
            title: still.answer.clone(),
            expected: OPTION_COUNT,
            actual: still.options.len(),
        });
    }

    let mut seen = HashSet::new();
    for option in &still.options {
        if !seen.insert(option.as_str()) {
            return Err(GameError::DuplicateOption {
                title: still.answer.clone(),
                option: option.clone(),
            });
        }
    }

    if !still.has_option(&still.answer) {
        return Err(GameError::MissingAnswerOption {
            title: still.answer.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::ShotAnalysis;

    fn analysis() -> ShotAnalysis {
        ShotAnalysis {
            lighting: "Low key".to_string(),
            composition: "Leading lines".to_string(),
            color: "Desaturated".to_string(),
            camera: "Wide shot".to_string(),
        }
    }

    fn still(answer: &str, options: &[&str]) -> FilmStill {
        FilmStill {
            image: format!("images/{}.jpg", answer.to_lowercase().replace(' ', "")),
            answer: answer.to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
            analysis: analysis(),
        }
    }

    fn sample_deck() -> Vec<FilmStill> {
        vec![
            still(
                "Pulp Fiction",
                &["Pulp Fiction", "The Matrix", "The Shining", "Blade Runner"],
            ),
            still(
                "The Matrix",
                &["Pulp Fiction", "The Matrix", "Fight Club", "Blade Runner"],
            ),
            still(
                "The Shining",
                &["The Shining", "Heat", "Fight Club", "Alien"],
            ),
        ]
    }

    #[test]
    fn correct_answer_scores_by_level() {
        let mut session = GameSession::new(sample_deck()).expect("deck should validate");

        let first = session
            .submit_answer("Pulp Fiction")
            .expect("option is offered");

        assert_eq!(first.verdict, Verdict::Correct);
        assert_eq!(first.points_awarded, 10);
        assert_eq!(first.score, 10);
        assert_eq!(first.level, 2);

        session.advance();
        let second = session
            .submit_answer("The Matrix")
            .expect("option is offered");

        assert_eq!(second.points_awarded, 20);
        assert_eq!(second.score, 30);
        assert_eq!(second.level, 3);
    }

    #[test]
    fn wrong_answer_leaves_score_and_level_untouched() {
        let mut session = GameSession::new(sample_deck()).expect("deck should validate");

        let report = session
            .submit_answer("Blade Runner")
            .expect("option is offered");

        assert_eq!(report.verdict, Verdict::Incorrect);
        assert_eq!(report.points_awarded, 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn wrong_answer_marks_selected_and_true_answer() {
        let mut session = GameSession::new(sample_deck()).expect("deck should validate");

        let report = session
            .submit_answer("The Shining")
            .expect("option is offered");

        // Options: Pulp Fiction, The Matrix, The Shining, Blade Runner.
        assert_eq!(
            report.marks,
            vec![
                OptionMark::Correct,
                OptionMark::Neutral,
                OptionMark::Incorrect,
                OptionMark::Neutral,
            ]
        );
    }

    #[test]
    fn every_report_carries_exactly_one_correct_mark() {
        let mut session = GameSession::new(sample_deck()).expect("deck should validate");

        for selected in ["Pulp Fiction", "The Matrix"] {
            let report = session.submit_answer(selected).expect("option is offered");
            let correct_marks = report
                .marks
                .iter()
                .filter(|mark| **mark == OptionMark::Correct)
                .count();

            assert_eq!(correct_marks, 1);
        }
    }

    #[test]
    fn advance_wraps_around_the_deck() {
        let mut session = GameSession::new(sample_deck()).expect("deck should validate");

        assert_eq!(session.advance().answer, "The Matrix");
        assert_eq!(session.advance().answer, "The Shining");
        assert_eq!(session.advance().answer, "Pulp Fiction");
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut session = GameSession::new(sample_deck()).expect("deck should validate");

        let error = session
            .submit_answer("Goodfellas")
            .expect_err("label is not offered");

        assert_eq!(
            error,
            GameError::UnknownOption {
                label: "Goodfellas".to_string(),
            }
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn empty_deck_is_rejected() {
        let error = GameSession::new(Vec::new()).expect_err("empty deck");

        assert_eq!(error, GameError::EmptyDeck);
    }

    #[test]
    fn wrong_option_count_is_rejected() {
        let deck = vec![still("Alien", &["Alien", "Heat", "Se7en"])];

        let error = GameSession::new(deck).expect_err("three options only");

        assert!(matches!(
            error,
            GameError::WrongOptionCount {
                expected: OPTION_COUNT,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let deck = vec![still("Alien", &["Alien", "Heat", "Heat", "Se7en"])];

        let error = GameSession::new(deck).expect_err("duplicate label");

        assert!(matches!(
            error,
            GameError::DuplicateOption { option, .. } if option == "Heat"
        ));
    }

    #[test]
    fn missing_answer_option_is_rejected() {
        let deck = vec![still("Alien", &["Heat", "Se7en", "Jaws", "Rocky"])];

        let error = GameSession::new(deck).expect_err("answer absent from options");

        assert!(matches!(
            error,
            GameError::MissingAnswerOption { title } if title == "Alien"
        ));
    }
}
