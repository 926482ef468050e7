use std::borrow::Cow;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::MenuState;

/// Key hint shown under the options.
pub const HINT: &str = "↑/↓ move · Enter select · Esc cancel";

/// Printed after Escape.
pub const CANCEL_NOTICE: &str = "Selection cancelled.";

/// How the selected line is marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// Prefix drawn before the selected label; other labels get the same
    /// width of spaces.
    pub marker: String,

    /// Optional foreground color for the selected line.
    pub color: Option<Color>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker: "> ".to_string(),
            color: None,
        }
    }
}

/// Clear the console and draw the whole menu.
///
/// A width of zero means the terminal did not report one; nothing is
/// truncated then.
///
/// Lines end in `\r\n` because the terminal is in raw mode while the menu
/// is up.
pub fn draw_frame<W: Write, S: AsRef<str>>(
    out: &mut W,
    state: &MenuState<'_, S>,
    style: &RenderStyle,
    width: Option<u16>,
) -> io::Result<()> {
    let max = width.filter(|&cols| cols > 0).map(usize::from);
    let pad = " ".repeat(style.marker.width());

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write_line(out, &fit_width(state.title(), max))?;
    write_line(out, "")?;

    for (index, option) in state.options().iter().enumerate() {
        if index == state.selected() {
            let line = format!("{}{}", style.marker, option.as_ref());
            queue!(out, SetAttribute(Attribute::Reverse))?;
            if let Some(color) = style.color {
                queue!(out, SetForegroundColor(color))?;
            }
            write!(out, "{}", fit_width(&line, max))?;
            queue!(out, SetAttribute(Attribute::Reset))?;
            write_line(out, "")?;
        } else {
            let line = format!("{}{}", pad, option.as_ref());
            write_line(out, &fit_width(&line, max))?;
        }
    }

    write_line(out, "")?;
    write_line(out, &fit_width(HINT, max))?;
    out.flush()
}

/// Print a one-line notice below the menu.
pub fn write_notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_line(out, message)?;
    out.flush()
}

fn write_line<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}\r\n")
}

/// Truncate `text` to at most `max` display columns, ending in `…` when cut.
pub fn fit_width(text: &str, max: Option<usize>) -> Cow<'_, str> {
    let Some(max) = max else {
        return Cow::Borrowed(text);
    };
    if text.width() <= max {
        return Cow::Borrowed(text);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }

    let budget = max - 1;
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    Cow::Owned(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Key;

    fn render(
        state: &MenuState<'_, &str>,
        style: &RenderStyle,
        width: Option<u16>,
    ) -> vt100::Parser {
        let mut buf = Vec::new();
        draw_frame(&mut buf, state, style, width).unwrap();
        let mut parser = vt100::Parser::new(24, 80, 0);
        parser.process(&buf);
        parser
    }

    #[test]
    fn test_frame_layout() {
        let options = ["Alpha", "Beta", "Gamma"];
        let state = MenuState::new(&options, "Pick one", false);
        let parser = render(&state, &RenderStyle::default(), None);

        let expected = format!("Pick one\n\n> Alpha\n  Beta\n  Gamma\n\n{HINT}");
        assert_eq!(parser.screen().contents(), expected);
    }

    #[test]
    fn test_selected_line_is_reversed() {
        let options = ["Alpha", "Beta", "Gamma"];
        let mut state = MenuState::new(&options, "Pick one", false);
        state.apply(Key::Down);
        let parser = render(&state, &RenderStyle::default(), None);
        let screen = parser.screen();

        // Rows: title, blank, then one per option.
        assert!(!screen.cell(2, 2).unwrap().inverse());
        assert!(screen.cell(3, 2).unwrap().inverse());
        assert!(!screen.cell(4, 2).unwrap().inverse());
        assert_eq!(screen.cell(3, 0).unwrap().contents(), ">");
    }

    #[test]
    fn test_redraw_replaces_previous_frame() {
        let options = ["Alpha", "Beta"];
        let mut state = MenuState::new(&options, "Pick", false);
        let mut buf = Vec::new();
        draw_frame(&mut buf, &state, &RenderStyle::default(), None).unwrap();
        state.apply(Key::Down);
        draw_frame(&mut buf, &state, &RenderStyle::default(), None).unwrap();

        let mut parser = vt100::Parser::new(24, 80, 0);
        parser.process(&buf);
        let expected = format!("Pick\n\n  Alpha\n> Beta\n\n{HINT}");
        assert_eq!(parser.screen().contents(), expected);
    }

    #[test]
    fn test_custom_marker_and_color() {
        let options = ["one", "two"];
        let state = MenuState::new(&options, "t", false);
        let style = RenderStyle {
            marker: "=> ".to_string(),
            color: Some(Color::Green),
        };
        let parser = render(&state, &style, None);
        let screen = parser.screen();

        assert_eq!(screen.contents(), format!("t\n\n=> one\n   two\n\n{HINT}"));
        assert_ne!(screen.cell(2, 3).unwrap().fgcolor(), vt100::Color::Default);
        assert_eq!(screen.cell(3, 3).unwrap().fgcolor(), vt100::Color::Default);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let options = ["a very long option label"];
        let state = MenuState::new(&options, "title", false);
        let parser = render(&state, &RenderStyle::default(), Some(10));
        let contents = parser.screen().contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[2], "> a very …");
    }

    #[test]
    fn test_zero_width_draws_full_frame() {
        let options = ["Alpha", "Beta"];
        let state = MenuState::new(&options, "Pick one", false);
        let parser = render(&state, &RenderStyle::default(), Some(0));

        let expected = format!("Pick one\n\n> Alpha\n  Beta\n\n{HINT}");
        assert_eq!(parser.screen().contents(), expected);
        assert!(parser.screen().cell(2, 2).unwrap().inverse());
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("short", Some(10)), "short");
        assert_eq!(fit_width("exactly10!", Some(10)), "exactly10!");
        assert_eq!(fit_width("longer than ten", Some(10)), "longer th…");
        assert_eq!(fit_width("anything", None), "anything");
        assert_eq!(fit_width("anything", Some(0)), "");
    }

    #[test]
    fn test_fit_width_counts_wide_chars() {
        // Each CJK char takes two columns.
        assert_eq!(fit_width("日本語テキスト", Some(7)), "日本語…");
    }

    #[test]
    fn test_write_notice() {
        let mut buf = Vec::new();
        write_notice(&mut buf, CANCEL_NOTICE).unwrap();
        assert_eq!(buf, b"Selection cancelled.\r\n");
    }
}
