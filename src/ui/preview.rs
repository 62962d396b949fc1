//! Line-oriented markdown rendering for the preview pane.
//!
//! Covers what notes actually use: ATX headings, bullet/ordered/task lists,
//! block quotes, fenced code, rules, and inline bold/italic/code/links.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{Palette, ACCENT};

const RULE_WIDTH: usize = 40;

pub fn render_markdown(source: &str, palette: &Palette) -> Vec<Line<'static>> {
    let base = Style::default().fg(palette.text);
    let mut lines = Vec::new();
    let mut in_fence = false;

    for raw in source.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            lines.push(Line::from(Span::styled(
                format!("  {}", raw),
                Style::default().fg(palette.code),
            )));
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            let mut style = base.add_modifier(Modifier::BOLD);
            if level <= 2 {
                style = style.fg(ACCENT);
            }
            if level == 1 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            lines.push(Line::from(inline_spans(text, style, palette)));
            continue;
        }

        if is_rule(trimmed) {
            lines.push(Line::from(Span::styled(
                "─".repeat(RULE_WIDTH),
                Style::default().fg(palette.border),
            )));
            continue;
        }

        if let Some(text) = trimmed.strip_prefix('>') {
            let style = base.fg(palette.muted).add_modifier(Modifier::ITALIC);
            let mut spans = vec![Span::styled("│ ", Style::default().fg(palette.border))];
            spans.extend(inline_spans(text.trim_start(), style, palette));
            lines.push(Line::from(spans));
            continue;
        }

        let indent = " ".repeat(raw.len() - trimmed.len());
        if let Some((marker, text)) = list_item(trimmed) {
            let mut spans = vec![Span::styled(
                format!("{}{}", indent, marker),
                Style::default().fg(ACCENT),
            )];
            spans.extend(inline_spans(text, base, palette));
            lines.push(Line::from(spans));
            continue;
        }

        lines.push(Line::from(inline_spans(raw, base, palette)));
    }

    lines
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|ch| *ch == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() {
        return Some((level, ""));
    }
    rest.strip_prefix(' ').map(|text| (level, text.trim()))
}

fn is_rule(line: &str) -> bool {
    let compact: String = line.chars().filter(|ch| !ch.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|marker| compact.chars().all(|ch| ch == *marker))
}

/// Display marker and remaining text for a list line.
fn list_item(line: &str) -> Option<(String, &str)> {
    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            if let Some(text) = rest.strip_prefix("[ ] ") {
                return Some(("☐ ".to_string(), text));
            }
            if let Some(text) = rest
                .strip_prefix("[x] ")
                .or_else(|| rest.strip_prefix("[X] "))
            {
                return Some(("☑ ".to_string(), text));
            }
            return Some(("• ".to_string(), rest));
        }
    }

    let digits = line.chars().take_while(|ch| ch.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(text) = line[digits..].strip_prefix(". ") {
            return Some((format!("{}. ", &line[..digits]), text));
        }
    }
    None
}

fn inline_spans(text: &str, base: Style, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    let flush = |plain: &mut String, spans: &mut Vec<Span<'static>>| {
        if !plain.is_empty() {
            spans.push(Span::styled(std::mem::take(plain), base));
        }
    };

    while !rest.is_empty() {
        if let Some((inner, after)) = delimited(rest, "`", "`") {
            flush(&mut plain, &mut spans);
            spans.push(Span::styled(inner.to_string(), base.fg(palette.code)));
            rest = after;
            continue;
        }
        if let Some((inner, after)) = delimited(rest, "**", "**") {
            flush(&mut plain, &mut spans);
            spans.push(Span::styled(
                inner.to_string(),
                base.add_modifier(Modifier::BOLD),
            ));
            rest = after;
            continue;
        }
        if let Some((inner, after)) = delimited(rest, "*", "*") {
            flush(&mut plain, &mut spans);
            spans.push(Span::styled(
                inner.to_string(),
                base.add_modifier(Modifier::ITALIC),
            ));
            rest = after;
            continue;
        }
        if let Some((label, after)) = link(rest) {
            flush(&mut plain, &mut spans);
            spans.push(Span::styled(
                label.to_string(),
                base.fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            ));
            rest = after;
            continue;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            plain.push(ch);
        }
        rest = chars.as_str();
    }

    flush(&mut plain, &mut spans);
    spans
}

/// `open inner close` at the start of `text`, with non-empty `inner`.
fn delimited<'a>(text: &'a str, open: &str, close: &str) -> Option<(&'a str, &'a str)> {
    let after_open = text.strip_prefix(open)?;
    let end = after_open.find(close)?;
    if end == 0 {
        return None;
    }
    Some((&after_open[..end], &after_open[end + close.len()..]))
}

/// `[label](url)` at the start of `text`.
fn link(text: &str) -> Option<(&str, &str)> {
    let after_open = text.strip_prefix('[')?;
    let label_end = after_open.find("](")?;
    let after_label = &after_open[label_end + 2..];
    let url_end = after_label.find(')')?;
    Some((&after_open[..label_end], &after_label[url_end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn render(source: &str) -> Vec<String> {
        render_markdown(source, &Palette::dark())
            .iter()
            .map(text_of)
            .collect()
    }

    #[test]
    fn strips_heading_markers() {
        assert_eq!(render("# New Note\n\nStart writing..."), vec![
            "New Note",
            "",
            "Start writing..."
        ]);
    }

    #[test]
    fn renders_lists_and_tasks() {
        assert_eq!(
            render("- one\n- [ ] todo\n- [x] done\n2. two"),
            vec!["• one", "☐ todo", "☑ done", "2. two"]
        );
    }

    #[test]
    fn code_fences_are_kept_verbatim() {
        assert_eq!(render("```\n# not a heading\n```"), vec!["  # not a heading"]);
    }

    #[test]
    fn inline_markup_is_removed() {
        assert_eq!(
            render("some **bold**, *italic*, `code` and [a link](https://x.y)"),
            vec!["some bold, italic, code and a link"]
        );
    }

    #[test]
    fn hashtag_without_space_is_plain_text() {
        assert_eq!(render("#tag"), vec!["#tag"]);
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(render("2 * 3 = 6"), vec!["2 * 3 = 6"]);
    }
}
