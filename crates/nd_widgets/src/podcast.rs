use std::sync::Arc;

use nd_core::{Article, Error, Result, WidgetConfig};
use nd_inference::generators::podcast::AUDIENCE_NAME;
use nd_inference::generators::{expert_reply, podcast_script, PodcastLine, Speaker};
use rand::rngs::StdRng;
use rand::Rng;
use tokio::sync::Notify;
use tracing::{debug, info};

use crate::speech::{utterance_for, SpeechSynthesizer};
use crate::tasks::{jittered, rng_from_seed, Shared, TaskSet};

const LISTENER_RANGE: std::ops::Range<u32> = 50..250;

#[derive(Debug)]
struct PodcastState {
    script: Vec<PodcastLine>,
    revealed: usize,
    playing: bool,
    audience: Vec<PodcastLine>,
    asked: usize,
    closed: bool,
}

impl PodcastState {
    fn finished(&self) -> bool {
        self.revealed >= self.script.len()
    }
}

/// A scripted live show: lines appear one by one while playing and the
/// audience can ask questions at any time.
pub struct PodcastSession {
    article: Article,
    state: Shared<PodcastState>,
    rng: Shared<StdRng>,
    speech: Arc<dyn SpeechSynthesizer>,
    script_tasks: TaskSet,
    reply_tasks: TaskSet,
    finished: Arc<Notify>,
    listeners: u32,
    config: WidgetConfig,
}

impl PodcastSession {
    pub fn new(
        article: &Article,
        speech: Arc<dyn SpeechSynthesizer>,
        config: &WidgetConfig,
    ) -> Self {
        let mut rng = rng_from_seed(config.seed);
        let listeners = rng.gen_range(LISTENER_RANGE);
        Self {
            article: article.clone(),
            state: Shared::new(PodcastState {
                script: podcast_script(article),
                revealed: 0,
                playing: false,
                audience: Vec::new(),
                asked: 0,
                closed: false,
            }),
            rng: Shared::new(rng),
            speech,
            script_tasks: TaskSet::new("podcast script"),
            reply_tasks: TaskSet::new("podcast replies"),
            finished: Arc::new(Notify::new()),
            listeners,
            config: config.clone(),
        }
    }

    pub fn listeners(&self) -> u32 {
        self.listeners
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().playing
    }

    pub fn is_speaking(&self) -> bool {
        let state = self.state.lock();
        state.playing && !state.finished()
    }

    pub fn is_finished(&self) -> bool {
        self.state.lock().finished()
    }

    /// Script lines revealed so far followed by the audience exchange.
    pub fn transcript(&self) -> Vec<PodcastLine> {
        let state = self.state.lock();
        state.script[..state.revealed]
            .iter()
            .chain(state.audience.iter())
            .cloned()
            .collect()
    }

    pub fn start(&mut self) -> Result<()> {
        let fresh = self.state.with(|state| {
            if state.closed {
                return Err(Error::Widget("podcast is closed".to_string()));
            }
            if state.finished() {
                return Ok(None);
            }
            state.playing = true;
            Ok(Some(state.revealed == 0))
        })?;
        let Some(fresh) = fresh else {
            debug!("Podcast already finished");
            return Ok(());
        };
        info!("🎧 Live: {} ({} listening)", self.article.title, self.listeners);

        if fresh {
            reveal_next(&self.state, self.speech.as_ref(), &self.finished);
        }
        self.schedule_script();
        Ok(())
    }

    fn schedule_script(&mut self) {
        self.script_tasks.cancel_all();
        let state = self.state.clone();
        let rng = self.rng.clone();
        let speech = self.speech.clone();
        let finished = self.finished.clone();
        let base = self.config.podcast_line_delay_ms;
        let jitter = self.config.podcast_line_jitter_ms;
        self.script_tasks.spawn(async move {
            loop {
                if !state.with(|state| state.playing && !state.closed && !state.finished()) {
                    break;
                }
                let delay = rng.with(|rng| jittered(rng, base, jitter));
                tokio::time::sleep(delay).await;
                if !state.with(|state| state.playing && !state.closed) {
                    break;
                }
                reveal_next(&state, speech.as_ref(), &finished);
            }
        });
    }

    pub fn pause(&mut self) {
        self.state.with(|state| state.playing = false);
        self.script_tasks.cancel_all();
        self.speech.cancel();
        debug!("⏸️ Podcast paused");
    }

    pub fn ask(&mut self, question: &str) -> Result<()> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::Widget("question is empty".to_string()));
        }
        let seq = self.state.with(|state| {
            if state.closed {
                return Err(Error::Widget("podcast is closed".to_string()));
            }
            state.asked += 1;
            let seq = state.asked;
            state.audience.push(PodcastLine::new(
                format!("aud-{}", seq),
                Speaker::Audience,
                AUDIENCE_NAME,
                question,
            ));
            Ok(seq)
        })?;

        let reply = expert_reply(&self.article, question, format!("resp-{}", seq));
        let state = self.state.clone();
        let speech = self.speech.clone();
        let delay = self.config.podcast_reply_delay();
        self.reply_tasks.schedule(delay, move || {
            let posted = state.with(|state| {
                if state.closed {
                    return false;
                }
                state.audience.push(reply.clone());
                true
            });
            if posted {
                speech.speak(utterance_for(&reply, &speech.voices()));
            }
        });
        Ok(())
    }

    /// Resolves once every script line has been revealed or the show closed.
    pub async fn wait_until_finished(&self) {
        loop {
            let notified = self.finished.notified();
            if self.state.with(|state| state.finished() || state.closed) {
                return;
            }
            notified.await;
        }
    }

    pub fn close(&mut self) {
        self.state.with(|state| {
            state.closed = true;
            state.playing = false;
        });
        let cancelled = self.script_tasks.cancel_all() + self.reply_tasks.cancel_all();
        self.speech.cancel();
        self.finished.notify_waiters();
        info!("🎧 Podcast closed ({} pending task(s) cancelled)", cancelled);
    }
}

fn reveal_next(state: &Shared<PodcastState>, speech: &dyn SpeechSynthesizer, finished: &Notify) {
    let (line, done) = state.with(|state| {
        let line = state.script.get(state.revealed).cloned();
        if line.is_some() {
            state.revealed += 1;
        }
        if state.finished() {
            state.playing = false;
        }
        (line, state.finished())
    });
    if let Some(line) = line {
        speech.speak(utterance_for(&line, &speech.voices()));
    }
    if done {
        finished.notify_waiters();
    }
}

impl std::fmt::Debug for PodcastSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PodcastSession")
            .field("article", &self.article.id)
            .field("listeners", &self.listeners)
            .finish()
    }
}
