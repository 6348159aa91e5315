// Plain-text card preview, shared by the TUI and the text rasterizer
use crate::constants::PREVIEW_MIN_WIDTH;
use crate::deck::Card;

/// Draws one card as a boxed block of `width` columns.
///
/// Body lines break every `chars_per_line` glyphs, the same estimate the
/// paginator used, capped at the box width. Columns are counted in chars;
/// wide glyphs are not measured.
pub fn render_card_lines(
    card: &Card<'_>,
    width: usize,
    chars_per_line: usize,
) -> Vec<String> {
    let width = width.max(PREVIEW_MIN_WIDTH);
    let inner = width - 4;
    let wrap_at = chars_per_line.clamp(1, inner);
    let mut body = Vec::new();
    match card {
        Card::Cover {
            title,
            subtitle,
            tag,
        } => {
            body.push(align_right(subtitle, inner));
            body.push(String::new());
            if !tag.is_empty() {
                body.push(truncate(&format!("[ {tag} ]"), inner));
                body.push(String::new());
            }
            body.extend(wrap(title, inner));
            body.push("=".repeat(inner.min(8)));
        }
        Card::Content {
            index,
            total,
            title,
            subtitle,
            tag,
            text,
        } => {
            body.push(truncate(&format!("{subtitle} | {title}"), inner));
            body.push("-".repeat(inner));
            for line in text.split('\n') {
                body.extend(wrap(line, wrap_at));
            }
            body.push(String::new());
            let counter = format!("{index}/{total}");
            let room = inner.saturating_sub(counter.chars().count() + 1);
            let left = truncate(&format!("* {tag}"), room);
            body.push(format!("{left:<room$} {counter}"));
        }
    }

    let border = format!("+{}+", "-".repeat(width - 2));
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(border.clone());
    for line in body {
        let pad = inner.saturating_sub(line.chars().count());
        out.push(format!("| {line}{} |", " ".repeat(pad)));
    }
    out.push(border);
    out
}

pub fn render_card(
    card: &Card<'_>,
    width: usize,
    chars_per_line: usize,
) -> String {
    let mut s = render_card_lines(card, width, chars_per_line).join("\n");
    s.push('\n');
    s
}

fn wrap(
    line: &str,
    width: usize,
) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|c| c.iter().collect())
        .collect()
}

fn truncate(
    s: &str,
    width: usize,
) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

fn align_right(
    s: &str,
    width: usize,
) -> String {
    let s = truncate(s, width);
    format!("{s:>width$}")
}
