use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use nd_core::{Article, Catalog, WidgetConfig};
use nd_inference::{create_responder, AssistantMode};
use nd_widgets::{
    AnswerOutcome, ChatSession, GroupChatSession, PodcastSession, PollSession, QuizClock,
    QuizSession, TracingSpeech,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

const CLOCK_POLL: Duration = Duration::from_millis(200);
const ROOM_POLL: Duration = Duration::from_millis(500);

fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

enum QuizInput {
    Line(Option<String>),
    TimedOut,
}

async fn question_timed_out(clock: &QuizClock) {
    loop {
        tokio::time::sleep(CLOCK_POLL).await;
        if clock.snapshot().is_answered() {
            return;
        }
    }
}

pub async fn quiz(article: &Article, config: &WidgetConfig) -> Result<()> {
    let mut clock = QuizClock::start(QuizSession::for_article(article, config.quiz_time_limit));
    let mut lines = stdin_lines();
    println!("Quiz: {}\n", article.title);

    loop {
        let quiz = clock.snapshot();
        let Some(question) = quiz.current_question() else {
            break;
        };
        println!(
            "Question {}/{} ({}s): {}",
            quiz.current_index() + 1,
            quiz.len(),
            quiz.time_left(),
            question.question
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let outcome = loop {
            let input = tokio::select! {
                line = lines.next_line() => QuizInput::Line(line?),
                _ = question_timed_out(&clock) => QuizInput::TimedOut,
            };
            match input {
                QuizInput::Line(None) => {
                    clock.stop();
                    return Ok(());
                }
                QuizInput::Line(Some(line)) => {
                    let choice = line.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1));
                    match choice.and_then(|index| clock.answer(index)) {
                        Some(outcome) => break outcome,
                        None => println!("Pick a number between 1 and {}", question.options.len()),
                    }
                }
                QuizInput::TimedOut => {
                    break AnswerOutcome::TimedOut {
                        correct_index: question.correct_index,
                    }
                }
            }
        };

        match outcome {
            AnswerOutcome::Correct { points, streak } => {
                println!("✅ Correct! +{} points (streak {})", points, streak)
            }
            AnswerOutcome::Wrong { correct_index } => {
                println!("❌ Wrong, the answer was: {}", question.options[correct_index])
            }
            AnswerOutcome::TimedOut { correct_index } => {
                println!("⏰ Time's up! The answer was: {}", question.options[correct_index])
            }
        }
        println!("   {}\n", question.explanation);
        clock.next();
    }

    let quiz = clock.snapshot();
    println!(
        "{} You scored {}/{} with {} points.",
        quiz.rating().unwrap_or_default(),
        quiz.score(),
        quiz.len(),
        quiz.total_points()
    );
    Ok(())
}

enum PodcastInput {
    Question(Option<String>),
    Finished,
    Interrupted,
}

pub async fn podcast(article: &Article, config: &WidgetConfig) -> Result<()> {
    let mut podcast = PodcastSession::new(article, Arc::new(TracingSpeech::new()), config);
    let mut lines = stdin_lines();
    let mut stdin_open = true;
    podcast.start()?;
    println!(
        "🎧 {} listening. Type a question and press enter, Ctrl-C to leave.",
        podcast.listeners()
    );

    loop {
        let input = tokio::select! {
            line = lines.next_line(), if stdin_open => PodcastInput::Question(line?),
            _ = podcast.wait_until_finished() => PodcastInput::Finished,
            _ = tokio::signal::ctrl_c() => PodcastInput::Interrupted,
        };
        match input {
            PodcastInput::Question(Some(question)) => {
                if let Err(err) = podcast.ask(&question) {
                    println!("{}", err);
                }
            }
            PodcastInput::Question(None) => stdin_open = false,
            PodcastInput::Finished => {
                // leave time for the last audience reply
                tokio::time::sleep(config.podcast_reply_delay()).await;
                break;
            }
            PodcastInput::Interrupted => break,
        }
    }
    podcast.close();

    println!();
    for line in podcast.transcript() {
        println!("{} [{}]: {}\n", line.initials(), line.name, line.content);
    }
    Ok(())
}

pub async fn chat(
    catalog: &Catalog,
    article: Option<&Article>,
    config: &WidgetConfig,
) -> Result<()> {
    let mut session = match article {
        Some(article) => ChatSession::open_with_article(catalog, article, config)?,
        None => ChatSession::new(create_responder(catalog, None, AssistantMode::default()), config),
    };
    info!("💬 Chatting with {}", session.assistant_name());

    if session.is_loading() {
        session.wait_for_reply().await;
        print_reply(&session);
    }

    let mut lines = stdin_lines();
    loop {
        print!("> ");
        // prompt only; a failed flush loses nothing
        let _ = std::io::Write::flush(&mut std::io::stdout());
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = line.trim();
        if command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Err(err) = session.submit(&line) {
            println!("{}", err);
            continue;
        }
        session.wait_for_reply().await;
        print_reply(&session);
    }
    session.close();
    Ok(())
}

pub async fn poll(article: &Article) -> Result<()> {
    let mut poll = PollSession::for_article(article);
    println!("🗳️ {}", poll.question());
    for (i, option) in poll.options().iter().enumerate() {
        println!("  {}) {}", i + 1, option.text);
    }

    let mut lines = stdin_lines();
    while !poll.has_voted() {
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        let choice = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| poll.options().get(index))
            .map(|option| option.id.clone());
        let Some(option_id) = choice else {
            println!("Pick a number between 1 and {}", poll.options().len());
            continue;
        };
        poll.select(&option_id)?;
        poll.vote()?;
    }

    println!("\n{} votes", poll.total_votes());
    for result in poll.results() {
        let marker = if result.selected { "✔" } else { " " };
        println!("{} {:>3}% {} ({})", marker, result.percent, result.text, result.votes);
    }
    Ok(())
}

enum RoomInput {
    Line(Option<String>),
    Refresh,
    Interrupted,
}

pub async fn group_chat(article: &Article, config: &WidgetConfig) -> Result<()> {
    let mut room = GroupChatSession::new(article, config);
    room.open();
    println!("👥 {} online. Type to post, Ctrl-C to leave.\n", room.online_count());

    let mut lines = stdin_lines();
    let mut stdin_open = true;
    let mut shown = 0;
    let mut refresh = tokio::time::interval(ROOM_POLL);
    loop {
        let messages = room.messages();
        for message in &messages[shown..] {
            println!(
                "{} [{}] {}: {}",
                message.avatar, message.timestamp, message.user, message.content
            );
        }
        shown = messages.len();

        let input = tokio::select! {
            line = lines.next_line(), if stdin_open => RoomInput::Line(line?),
            _ = refresh.tick() => RoomInput::Refresh,
            _ = tokio::signal::ctrl_c() => RoomInput::Interrupted,
        };
        match input {
            RoomInput::Line(Some(text)) => {
                if let Err(err) = room.send(&text) {
                    println!("{}", err);
                }
            }
            RoomInput::Line(None) => stdin_open = false,
            RoomInput::Refresh => {}
            RoomInput::Interrupted => break,
        }
    }
    room.close();
    Ok(())
}

fn print_reply(session: &ChatSession) {
    if let Some(reply) = session.last_reply() {
        println!("{}\n", reply.content);
    }
}
