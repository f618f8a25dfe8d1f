use newsdesk_core::{AppViewModel, ArticleCardView, Category, PageEntry, ResultsStatus};

use super::constants::*;
use super::viewport::TerminalViewport;

/// Lines each card occupies, in render order. Feeds the viewport layout.
pub fn card_heights(view: &AppViewModel) -> Vec<usize> {
    if view.status != ResultsStatus::Results {
        return Vec::new();
    }
    view.articles.iter().map(|card| card_lines(card).len()).collect()
}

pub fn render(view: &AppViewModel, viewport: &TerminalViewport, notice: Option<&str>) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "newsdesk | {} | {}",
        WELCOME_TITLE,
        WELCOME_TAGLINES.join(" ")
    ));
    out.push(filter_line(view));
    out.push(String::new());

    match view.status {
        ResultsStatus::Idle => out.push("Starting up...".to_string()),
        ResultsStatus::Loading => out.push("Loading news...".to_string()),
        ResultsStatus::Empty => out.push("No articles found.".to_string()),
        ResultsStatus::Error => {
            let reason = view
                .error
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "unknown error".to_string());
            out.push(format!("Could not load news: {reason}."));
            out.push("Pick a page or type `retry` to try again.".to_string());
        }
        ResultsStatus::Results => {
            if let Some(kind) = view.error {
                out.push(format!("! Could not refresh ({kind}); showing previous results."));
            }
            let content: Vec<String> = view.articles.iter().flat_map(card_lines).collect();
            let window = viewport.visible_lines();
            let end = window.end.min(content.len());
            let start = window.start.min(end);
            out.extend(content[start..end].iter().cloned());
            if end < content.len() {
                out.push(format!("  ({} more lines, `j` to scroll)", content.len() - end));
            }
        }
    }

    out.push(String::new());
    out.push(pagination_line(view));
    if let Some(notice) = notice {
        out.push(notice.to_string());
    }
    out.join("\n")
}

fn filter_line(view: &AppViewModel) -> String {
    let categories: Vec<String> = Category::ALL
        .iter()
        .map(|cat| {
            if *cat == view.category && view.search_query.is_empty() {
                format!("[{}]", cat.label())
            } else {
                cat.label().to_string()
            }
        })
        .collect();
    if view.search_query.is_empty() {
        format!("Category: {}", categories.join(" "))
    } else {
        format!(
            "Search: \"{}\" (category {} paused)",
            view.search_query,
            view.category.label()
        )
    }
}

pub fn pagination_line(view: &AppViewModel) -> String {
    let mut parts = Vec::with_capacity(view.pagination.len() + 2);
    parts.push(if view.prev_enabled {
        "< Prev".to_string()
    } else {
        "  ----".to_string()
    });
    for entry in &view.pagination {
        parts.push(match entry {
            PageEntry::Page(n) if *n == view.page => format!("[{n}]"),
            PageEntry::Page(n) => n.to_string(),
            PageEntry::Ellipsis => "...".to_string(),
        });
    }
    parts.push("Next >".to_string());
    parts.join(" ")
}

fn card_lines(card: &ArticleCardView) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{:>2}. {}", card.index + 1, card.title));
    for line in wrap(&card.description, CARD_WIDTH - 4) {
        lines.push(format!("    {line}"));
    }
    let mut meta = Vec::new();
    if let Some(source) = &card.source_name {
        meta.push(source.clone());
    }
    if let Some(published) = &card.published_at {
        meta.push(published.clone());
    }
    if card.image.is_some() {
        meta.push("image".to_string());
    }
    if !meta.is_empty() {
        lines.push(format!("    {}", meta.join(" | ")));
    }
    match &card.host {
        Some(host) => lines.push(format!("    Read more ({host}): {}", card.url)),
        None => lines.push(format!("    Read more: {}", card.url)),
    }
    lines.push(String::new());

    if card.revealed {
        lines
    } else {
        lines.into_iter().map(|line| mask(&line)).collect()
    }
}

fn mask(line: &str) -> String {
    line.chars()
        .map(|ch| if ch.is_whitespace() { ch } else { UNREVEALED_FILL })
        .collect()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
