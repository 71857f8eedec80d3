use nd_core::{Article, Error, Result};
use nd_inference::generators::{generate_poll, Poll, PollOption};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollResult {
    pub id: String,
    pub text: String,
    pub votes: u32,
    pub percent: u32,
    pub selected: bool,
}

/// One reader's pass through a poll: pick an option, then vote once.
#[derive(Debug, Clone)]
pub struct PollSession {
    poll: Poll,
    selected: Option<String>,
    voted: bool,
}

impl PollSession {
    pub fn new(poll: Poll) -> Self {
        Self {
            poll,
            selected: None,
            voted: false,
        }
    }

    pub fn for_article(article: &Article) -> Self {
        Self::new(generate_poll(article))
    }

    pub fn question(&self) -> &str {
        &self.poll.question
    }

    pub fn options(&self) -> &[PollOption] {
        &self.poll.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn has_voted(&self) -> bool {
        self.voted
    }

    pub fn select(&mut self, option_id: &str) -> Result<()> {
        if self.voted {
            return Err(Error::Widget("vote already cast".to_string()));
        }
        if !self.poll.options.iter().any(|option| option.id == option_id) {
            return Err(Error::Widget(format!("unknown poll option: {}", option_id)));
        }
        self.selected = Some(option_id.to_string());
        Ok(())
    }

    pub fn vote(&mut self) -> Result<&PollOption> {
        if self.voted {
            return Err(Error::Widget("vote already cast".to_string()));
        }
        let selected = self
            .selected
            .as_deref()
            .ok_or_else(|| Error::Widget("select an option before voting".to_string()))?;
        let option = self
            .poll
            .options
            .iter_mut()
            .find(|option| option.id == selected)
            .ok_or_else(|| Error::Widget(format!("unknown poll option: {}", selected)))?;
        option.votes += 1;
        self.voted = true;
        Ok(&*option)
    }

    pub fn total_votes(&self) -> u32 {
        self.poll.options.iter().map(|option| option.votes).sum()
    }

    /// Share of the total per option, rounded half-up.
    pub fn percentages(&self) -> Vec<(String, u32)> {
        let total = self.total_votes();
        self.poll
            .options
            .iter()
            .map(|option| (option.id.clone(), percent(option.votes, total)))
            .collect()
    }

    pub fn results(&self) -> Vec<PollResult> {
        let total = self.total_votes();
        self.poll
            .options
            .iter()
            .map(|option| PollResult {
                id: option.id.clone(),
                text: option.text.clone(),
                votes: option.votes,
                percent: percent(option.votes, total),
                selected: self.selected.as_deref() == Some(option.id.as_str()),
            })
            .collect()
    }
}

fn percent(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(votes) * 100.0 / f64::from(total)).round() as u32
}
