use nd_core::{Article, Category};
use serde::Serialize;

/// Seconds allowed per question.
pub const QUESTION_TIME_LIMIT: u32 = 15;

pub const BASE_POINTS: u32 = 10;
pub const TIME_BONUS_PER_SECOND: u32 = 2;
pub const STREAK_BONUS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    fn new(question: &str, options: [&str; 4], correct_index: usize, explanation: &str) -> Self {
        Self {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            explanation: explanation.to_string(),
        }
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Points for a correct answer given the seconds left on the clock and the
/// number of consecutive correct answers before this one.
pub fn points_for_correct(time_left: u32, streak: u32) -> u32 {
    BASE_POINTS
        .saturating_add(time_left.saturating_mul(TIME_BONUS_PER_SECOND))
        .saturating_add(streak.saturating_mul(STREAK_BONUS))
}

pub fn rating(score: usize, total: usize) -> &'static str {
    if score == total {
        "🏆 Perfect!"
    } else if score >= 2 {
        "⭐ Great job!"
    } else {
        "📚 Keep learning!"
    }
}

/// Three questions for the article's category.
pub fn generate_quiz(article: &Article) -> Vec<QuizQuestion> {
    match article.category {
        Category::Environment => vec![
            QuizQuestion::new(
                "What is the primary goal of major climate agreements?",
                [
                    "Increase fossil fuel use",
                    "Reduce carbon emissions",
                    "Promote nuclear energy only",
                    "Eliminate all industry",
                ],
                1,
                "Climate agreements primarily aim to reduce carbon emissions to combat global warming.",
            ),
            QuizQuestion::new(
                "Which energy source is considered renewable?",
                ["Coal", "Natural gas", "Solar", "Oil"],
                2,
                "Solar energy is a renewable source that doesn't deplete natural resources.",
            ),
            QuizQuestion::new(
                "What is a carbon pricing mechanism?",
                [
                    "A tax on carbon emissions",
                    "A subsidy for oil",
                    "A discount on gas",
                    "None of the above",
                ],
                0,
                "Carbon pricing puts a financial cost on emissions to incentivize reductions.",
            ),
        ],
        Category::Technology => vec![
            QuizQuestion::new(
                "What does 'antitrust regulation' primarily aim to prevent?",
                ["Data breaches", "Monopolistic practices", "Software bugs", "Cyber attacks"],
                1,
                "Antitrust laws prevent companies from dominating markets unfairly.",
            ),
            QuizQuestion::new(
                "What is 'data portability'?",
                [
                    "Moving servers physically",
                    "Users taking their data between platforms",
                    "Encrypting all data",
                    "Deleting user accounts",
                ],
                1,
                "Data portability allows users to transfer their data between different services.",
            ),
            QuizQuestion::new(
                "What does 'self-preferencing' mean in tech?",
                [
                    "Users preferring one app",
                    "Platforms favoring their own products",
                    "Better UI design",
                    "Faster loading times",
                ],
                1,
                "Self-preferencing is when platforms give unfair advantage to their own products in search or rankings.",
            ),
        ],
        Category::Business => vec![
            QuizQuestion::new(
                "What does a 'rate cut' by the central bank typically lead to?",
                [
                    "Higher borrowing costs",
                    "Lower borrowing costs",
                    "No change in economy",
                    "Currency appreciation",
                ],
                1,
                "Rate cuts reduce borrowing costs, encouraging spending and investment.",
            ),
            QuizQuestion::new(
                "What does CPI stand for?",
                [
                    "Central Price Index",
                    "Consumer Price Index",
                    "Cost Per Investment",
                    "Commercial Price Indicator",
                ],
                1,
                "The Consumer Price Index measures the average change in prices paid by consumers.",
            ),
            QuizQuestion::new(
                "What happens when inflation 'cools'?",
                [
                    "Prices rise faster",
                    "Price increases slow down",
                    "Economy crashes",
                    "Unemployment spikes",
                ],
                1,
                "Cooling inflation means the rate of price increases is slowing down.",
            ),
        ],
        _ => vec![
            QuizQuestion::new(
                "Based on this article, what sector is most directly affected?",
                [article.category.as_str(), "Agriculture", "Mining", "Telecommunications"],
                0,
                &format!("The {} sector is the primary focus of this article.", article.category),
            ),
            QuizQuestion::new(
                "What is the best way to stay informed about developing stories?",
                [
                    "Ignore the news",
                    "Follow multiple credible sources",
                    "Only read headlines",
                    "Rely on social media",
                ],
                1,
                "Following multiple credible sources provides a balanced and thorough understanding.",
            ),
            QuizQuestion::new(
                "Why is context important when reading news?",
                [
                    "It isn't important",
                    "It helps understand implications",
                    "It makes articles longer",
                    "It confuses readers",
                ],
                1,
                "Context helps readers understand the broader significance and implications of events.",
            ),
        ],
    }
}
