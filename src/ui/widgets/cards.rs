use crate::canvas::{BlockContent, ContentBlock, UnifiedSummary};
use crate::sources::{AiResponse, TwitterItem, WebItem, YouTubeItem};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Everything needed to draw one block as a bordered card.
#[derive(Debug, Clone)]
pub struct CardView {
    pub title: String,
    pub accent: Color,
    pub lines: Vec<Line<'static>>,
}

pub fn card_view(block: &ContentBlock, width: usize) -> CardView {
    let width = width.max(8);
    match &block.content {
        BlockContent::Twitter(tweet) => twitter_card(tweet, width),
        BlockContent::YouTube(video) => youtube_card(video, width),
        BlockContent::Web(article) => web_card(article, width),
        BlockContent::AiResponse(resp) => ai_card(resp, &block.source, width),
        BlockContent::Unified(unified) => unified_card(unified, width),
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn wrapped(text: &str, width: usize, max_lines: usize, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, width)
        .into_iter()
        .take(max_lines)
        .map(|line| Line::from(Span::styled(line.into_owned(), style)))
        .collect()
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn bold() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn twitter_card(tweet: &TwitterItem, width: usize) -> CardView {
    let mut lines = wrapped(&tweet.content, width, 3, Style::default().fg(Color::White));
    lines.push(Line::from(vec![
        Span::styled(format!("♥ {}  ", tweet.likes), Style::default().fg(Color::Red)),
        Span::styled(
            format!("⟳ {}  ", tweet.retweets),
            Style::default().fg(Color::Green),
        ),
        Span::styled(tweet.timestamp.format("%Y-%m-%d").to_string(), dim()),
    ]));
    if let Some(url) = &tweet.url {
        lines.push(Line::from(Span::styled(url.clone(), dim())));
    }

    CardView {
        title: format!(" @{} ", tweet.username),
        accent: Color::Blue,
        lines,
    }
}

fn youtube_card(video: &YouTubeItem, width: usize) -> CardView {
    let mut lines = wrapped(&video.title, width, 2, bold());
    lines.push(Line::from(vec![
        Span::styled(
            format!("▶ {} views  ", group_thousands(video.views)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("⏱ {}", video.duration),
            Style::default().fg(Color::Yellow),
        ),
    ]));

    CardView {
        title: format!(" {} ", video.channel),
        accent: Color::Red,
        lines,
    }
}

fn web_card(article: &WebItem, width: usize) -> CardView {
    let mut lines = wrapped(&article.title, width, 1, bold());
    lines.extend(wrapped(&article.snippet, width, 2, Style::default().fg(Color::Gray)));
    lines.push(Line::from(Span::styled(
        article.url.clone(),
        Style::default().fg(Color::Cyan),
    )));

    CardView {
        title: format!(" {} ", article.domain),
        accent: Color::Green,
        lines,
    }
}

fn ai_card(resp: &AiResponse, source: &str, width: usize) -> CardView {
    let mut lines = wrapped(&resp.summary, width, 1, bold());
    lines.extend(wrapped(&resp.content, width, 3, Style::default().fg(Color::White)));

    let sources = if resp.sources.is_empty() {
        "no sources".to_string()
    } else {
        resp.sources.join(", ")
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:.0}% confidence  ", resp.confidence * 100.0),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(sources, dim()),
    ]));

    let accent = if resp.confidence == 0.0 {
        Color::LightRed
    } else {
        Color::Magenta
    };

    CardView {
        title: format!(" {} ", source),
        accent,
        lines,
    }
}

fn unified_card(unified: &UnifiedSummary, width: usize) -> CardView {
    let mut lines = wrapped(&format!("Query: {}", unified.query), width, 2, bold());
    lines.extend(wrapped(&unified.summary, width, 2, Style::default().fg(Color::White)));
    lines.push(Line::from(Span::styled(
        unified.metadata.timestamp.format("%H:%M:%S").to_string(),
        dim(),
    )));

    CardView {
        title: " Unified Agent ".to_string(),
        accent: Color::Yellow,
        lines,
    }
}
