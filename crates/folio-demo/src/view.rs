#![forbid(unsafe_code)]

//! Card layout as styled lines, and drawing them with crossterm.
//!
//! [`card_lines`] is pure so layout can be tested without a terminal;
//! [`draw`] queues the lines centred on any writer.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor::MoveTo, queue, terminal};
use folio::Rgb;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Background the glow is composited over.
pub const BACKGROUND: Rgb = Rgb::new(0x18, 0x18, 0x1b);
const MUTED: Rgb = Rgb::new(0xa1, 0xa1, 0xaa);
const CURSOR: &str = "▏";
const PICTURE_INNER: usize = 16;

/// How colours are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    TrueColor,
    Ansi256,
}

impl ColorMode {
    /// Truecolor when `COLORTERM` advertises it, 256 colours otherwise.
    #[must_use]
    pub fn detect<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match get_env("COLORTERM").map(|v| v.to_ascii_lowercase()) {
            Some(v) if v.contains("truecolor") || v.contains("24bit") => Self::TrueColor,
            _ => Self::Ansi256,
        }
    }

    fn color(self, rgb: Rgb) -> Color {
        match self {
            Self::TrueColor => Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            Self::Ansi256 => Color::AnsiValue(rgb.to_ansi256()),
        }
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
        }
    }

    fn colored(text: impl Into<String>, fg: Rgb) -> Self {
        Self {
            text: text.into(),
            fg: Some(fg),
            bold: false,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One row of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Display width in terminal cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.width()).sum()
    }

    /// Text without styling.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Lay out the whole card.
#[must_use]
pub fn card_lines(app: &App) -> Vec<Line> {
    let card = app.card();
    let tr = app.translator();
    let profile = card.current_profile();
    let state = card.state();
    let gradient = card.gradient();
    let glow_color = card.glow().composite_over(BACKGROUND);

    let mut lines = Vec::new();

    let stem = profile
        .image_ref()
        .path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    let label = fit(&stem, PICTURE_INNER);
    let rule = "─".repeat(PICTURE_INNER);
    lines.push(Line::new(vec![Span::colored(format!("╭{rule}╮"), glow_color)]));
    lines.push(Line::new(vec![
        Span::colored("│", glow_color),
        Span::colored(label, profile.border_color()),
        Span::colored("│", glow_color),
    ]));
    lines.push(Line::new(vec![Span::colored(format!("╰{rule}╯"), glow_color)]));
    lines.push(Line::default());

    lines.push(Line::new(vec![Span::colored(tr.t("profile.greeting"), MUTED)]));

    let full_name = profile.name().graphemes(true).count();
    let mut name: Vec<Span> = state
        .displayed_name()
        .graphemes(true)
        .enumerate()
        .map(|(i, g)| Span::colored(g, gradient.sample_cell(i, full_name)).bold())
        .collect();
    name.push(cursor_span(state.show_name_cursor(), gradient.to));
    lines.push(Line::new(name));

    let mut handle = vec![Span::colored("@", MUTED), Span::plain(state.displayed_handle())];
    handle.push(cursor_span(state.show_handle_cursor(), gradient.to));
    lines.push(Line::new(handle));

    let status = if state.typing_complete() {
        tr.t("profile.done")
    } else {
        tr.t("profile.typing")
    };
    lines.push(Line::new(vec![Span::colored(status, MUTED)]));
    lines.push(Line::default());

    lines.push(button_line(app));
    lines.push(Line::default());

    let tech = app.icons().tech().names().join(" · ");
    lines.push(Line::new(vec![Span::plain(tr.t("sections.tech")).bold()]));
    lines.push(Line::new(vec![Span::colored(tech, gradient.from)]));
    let social = app.icons().social().names().join(" · ");
    lines.push(Line::new(vec![Span::plain(tr.t("sections.social")).bold()]));
    lines.push(Line::new(vec![Span::colored(social, gradient.to)]));
    lines.push(Line::default());

    let hint = tr.t_with(
        "app.hint",
        &[
            ("switch", tr.t("profile.switch")),
            ("hover", tr.t("profile.hover")),
            ("language", tr.t("app.language")),
            ("restart", tr.t("profile.restart")),
            ("quit", tr.t("app.quit")),
        ],
    );
    lines.push(Line::new(vec![Span::colored(hint, MUTED)]));
    lines.push(Line::new(vec![Span::colored(
        format!("{}: {}", tr.t("app.language"), tr.locale()),
        MUTED,
    )]));
    lines
}

fn cursor_span(visible: bool, color: Rgb) -> Span {
    if visible {
        Span::colored(CURSOR, color)
    } else {
        Span::plain(" ")
    }
}

/// The switch button shrinks while a switch is in progress.
fn button_line(app: &App) -> Line {
    let card = app.card();
    let (glyph, pad) = if card.is_spinning() {
        ("◐", (2.0 * card.button_scale()).floor() as usize)
    } else {
        ("⟳", 2)
    };
    let padding = " ".repeat(pad);
    let text = format!(
        "[{padding}{glyph} {}{padding}]",
        app.translator().t("profile.switch")
    );
    Line::new(vec![Span::colored(text, card.current_profile().border_color()).bold()])
}

/// Truncate or centre-pad `text` to exactly `width` cells.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    let left = (width - used) / 2;
    format!("{}{out}{}", " ".repeat(left), " ".repeat(width - used - left))
}

/// Clear the screen and draw `lines` centred in a `cols` × `rows` area.
pub fn draw<W: Write>(
    out: &mut W,
    lines: &[Line],
    (cols, rows): (u16, u16),
    mode: ColorMode,
) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let top = usize::from(rows).saturating_sub(lines.len()) / 2;
    for (row, line) in lines.iter().enumerate() {
        let y = top + row;
        if y >= usize::from(rows) {
            break;
        }
        let x = usize::from(cols).saturating_sub(line.width()) / 2;
        queue!(out, MoveTo(x as u16, y as u16))?;
        for span in &line.spans {
            if let Some(fg) = span.fg {
                queue!(out, SetForegroundColor(mode.color(fg)))?;
            }
            if span.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&span.text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 6), "  ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("日本語", 5).width(), 5);
    }

    #[test]
    fn color_mode_detection() {
        assert_eq!(
            ColorMode::detect(|_| Some("truecolor".into())),
            ColorMode::TrueColor
        );
        assert_eq!(ColorMode::detect(|_| None), ColorMode::Ansi256);
    }

    #[test]
    fn line_width_counts_cells() {
        let line = Line::new(vec![Span::plain("ab"), Span::plain("日")]);
        assert_eq!(line.width(), 4);
        assert_eq!(line.plain(), "ab日");
    }
}
