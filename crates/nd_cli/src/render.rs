use std::fmt::Write;

use nd_core::feed::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use nd_core::{Article, FeedLayout};
use nd_inference::ArticleInsights;

fn headline(article: &Article) -> String {
    format!(
        "[{}] {} ({}, {} min read) #{}",
        article.category, article.title, article.author, article.read_time, article.id
    )
}

pub fn feed(layout: &FeedLayout<'_>) -> String {
    let Some(featured) = layout.featured else {
        return format!("{}\n{}\n", EMPTY_STATE_TITLE, EMPTY_STATE_HINT);
    };

    let mut out = String::new();
    let _ = writeln!(out, "★ {}", headline(featured));
    let _ = writeln!(out, "  {}", featured.excerpt);
    if !layout.grid.is_empty() {
        let _ = writeln!(out, "\nLatest");
        for article in &layout.grid {
            let _ = writeln!(out, "  {}", headline(article));
        }
    }
    if !layout.more.is_empty() {
        let _ = writeln!(out, "\nMore stories");
        for article in &layout.more {
            let _ = writeln!(out, "  {}", headline(article));
        }
    }
    out
}

pub fn article(article: &Article) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", article.title);
    let _ = writeln!(
        out,
        "{} · {} · {} · {} min read\n",
        article.category, article.author, article.published_at, article.read_time
    );
    let _ = writeln!(out, "{}\n", article.excerpt);
    for paragraph in article.paragraphs() {
        let _ = writeln!(out, "{}\n", paragraph);
    }
    out
}

pub fn insights(insights: &ArticleInsights) -> String {
    let mut out = String::from("Summary\n");
    for point in &insights.summary {
        let _ = writeln!(out, "  • {}", point);
    }
    let _ = writeln!(out, "\nKeywords\n  {}", insights.keywords.join(", "));
    let _ = writeln!(out, "\nFuture scope");
    for line in &insights.future_scope {
        let _ = writeln!(out, "  → {}", line);
    }
    if !insights.related.is_empty() {
        let _ = writeln!(out, "\nRelated");
        for related in &insights.related {
            let _ = writeln!(
                out,
                "  #{} {} ({} min read)",
                related.id, related.title, related.read_time
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::FeedQuery;
    use nd_storage::BuiltinSource;

    #[test]
    fn test_feed_marks_featured_story() {
        let catalog = BuiltinSource::catalog().unwrap();
        let out = feed(&catalog.feed(&FeedQuery::new()));
        assert!(out.starts_with("★ [Environment]"));
        assert!(out.contains("\nLatest\n"));
        assert!(out.contains("\nMore stories\n"));
    }

    #[test]
    fn test_empty_feed_shows_hint() {
        let catalog = BuiltinSource::catalog().unwrap();
        let out = feed(&catalog.feed(&FeedQuery::new().text("zeppelin")));
        assert_eq!(out, "No articles found\nTry adjusting your search or category filter.\n");
    }

    #[test]
    fn test_insights_sections() {
        let catalog = BuiltinSource::catalog().unwrap();
        let article = catalog.get("3").unwrap();
        let out = insights(&ArticleInsights::build(&catalog, article));
        assert!(out.starts_with("Summary\n"));
        assert!(out.contains("\nRelated\n  #9 "));
    }
}
