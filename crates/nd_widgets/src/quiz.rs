use std::time::Duration;

use nd_core::Article;
use nd_inference::generators::quiz::{points_for_correct, rating};
use nd_inference::generators::{generate_quiz, QuizQuestion};
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::tasks::{Shared, TaskSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct { points: u32, streak: u32 },
    Wrong { correct_index: usize },
    TimedOut { correct_index: usize },
}

/// Timed multiple-choice quiz. The clock only runs while the current
/// question is unanswered.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    time_limit: u32,
    current: usize,
    selected: Option<usize>,
    answered: bool,
    complete: bool,
    score: usize,
    streak: u32,
    total_points: u32,
    time_left: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>, time_limit: u32) -> Self {
        Self {
            questions,
            time_limit,
            current: 0,
            selected: None,
            answered: false,
            complete: false,
            score: 0,
            streak: 0,
            total_points: 0,
            time_left: time_limit,
        }
    }

    pub fn for_article(article: &Article, time_limit: u32) -> Self {
        Self::new(generate_quiz(article), time_limit)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.complete {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_clock_running(&self) -> bool {
        !self.answered && !self.complete && !self.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn answer(&mut self, index: usize) -> Option<AnswerOutcome> {
        if !self.is_clock_running() {
            return None;
        }
        let question = self.questions.get(self.current)?;
        if index >= question.options.len() {
            return None;
        }
        let correct_index = question.correct_index;

        self.selected = Some(index);
        self.answered = true;
        if index == correct_index {
            let points = points_for_correct(self.time_left, self.streak);
            self.score += 1;
            self.streak += 1;
            self.total_points += points;
            Some(AnswerOutcome::Correct {
                points,
                streak: self.streak,
            })
        } else {
            self.streak = 0;
            Some(AnswerOutcome::Wrong { correct_index })
        }
    }

    /// One second off the clock. Returns the timeout when it hits zero.
    pub fn tick(&mut self) -> Option<AnswerOutcome> {
        if !self.is_clock_running() {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }
        self.answered = true;
        self.streak = 0;
        let correct_index = self.questions.get(self.current)?.correct_index;
        Some(AnswerOutcome::TimedOut { correct_index })
    }

    /// Moves to the next question. Returns false once the quiz is complete.
    pub fn next(&mut self) -> bool {
        if self.complete {
            return false;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.answered = false;
            self.time_left = self.time_limit;
            true
        } else {
            self.complete = true;
            false
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new(std::mem::take(&mut self.questions), self.time_limit);
    }

    /// Percent of the quiz done, counting the current question once answered.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let done = self.current + usize::from(self.answered);
        done as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn rating(&self) -> Option<&'static str> {
        self.complete.then(|| rating(self.score, self.questions.len()))
    }
}

/// Drives a shared [`QuizSession`] with a one-second ticker. The ticker stops
/// by itself once the question is answered and is restarted by [`QuizClock::next`].
#[derive(Debug)]
pub struct QuizClock {
    quiz: Shared<QuizSession>,
    tasks: TaskSet,
}

impl QuizClock {
    pub fn start(quiz: QuizSession) -> Self {
        let mut clock = Self {
            quiz: Shared::new(quiz),
            tasks: TaskSet::new("quiz clock"),
        };
        clock.run_ticker();
        clock
    }

    fn run_ticker(&mut self) {
        self.tasks.cancel_all();
        let quiz = self.quiz.clone();
        self.tasks.spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let running = quiz.with(|quiz| {
                    if let Some(outcome) = quiz.tick() {
                        let number = quiz.current_index() + 1;
                        debug!("⏰ Question {} timed out: {:?}", number, outcome);
                    }
                    quiz.is_clock_running()
                });
                if !running {
                    break;
                }
            }
        });
    }

    pub fn snapshot(&self) -> QuizSession {
        self.quiz.lock().clone()
    }

    pub fn answer(&mut self, index: usize) -> Option<AnswerOutcome> {
        let outcome = self.quiz.with(|quiz| quiz.answer(index));
        if outcome.is_some() {
            self.tasks.cancel_all();
        }
        outcome
    }

    pub fn next(&mut self) -> bool {
        let advanced = self.quiz.with(QuizSession::next);
        if advanced {
            self.run_ticker();
        }
        advanced
    }

    pub fn restart(&mut self) {
        self.quiz.with(QuizSession::restart);
        self.run_ticker();
    }

    pub fn stop(&mut self) {
        self.tasks.cancel_all();
    }
}
