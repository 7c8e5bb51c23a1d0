//! Type-aware cell rendering.
//!
//! Pure mapping from a field type and an interpreted cell value to one
//! styled line. No terminal state is touched here; the TUI feeds these
//! lines into its table rows and the tests can assert on span content.

use crate::api::models::{CellValue, FieldType, SelectOption};
use crate::grid::colors::{chip_background, chip_foreground};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Filled check for true, outline box for false.
const CHECK_TRUE: &str = "☑";
const CHECK_FALSE: &str = "☐";

/// Render one cell. An empty value renders an empty cell for every type.
pub fn render_cell(field_type: FieldType, value: &CellValue) -> Line<'static> {
    match value {
        CellValue::Empty => Line::default(),
        CellValue::Bool(b) => {
            let glyph = if *b { CHECK_TRUE } else { CHECK_FALSE };
            Line::from(Span::raw(glyph))
        }
        CellValue::Text(s) => match field_type {
            FieldType::LongText => Line::from(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            )),
            _ => Line::from(Span::raw(s.clone())),
        },
        CellValue::Select(option) => Line::from(chip_span(option)),
        CellValue::MultiSelect(options) => {
            let mut spans = Vec::with_capacity(options.len() * 2);
            for (i, option) in options.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(chip_span(option));
            }
            Line::from(spans)
        }
        CellValue::Files(files) => {
            let mut spans = Vec::with_capacity(files.len() * 2);
            for (i, file) in files.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!("[{}]", file.visible_name),
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        }
        CellValue::Other(s) => Line::from(Span::raw(s.clone())),
    }
}

/// Truncate a rendered line to `max_width` terminal cells, appending an
/// ellipsis when anything was cut. Span styles survive the cut.
pub fn truncate_line(line: &Line<'_>, max_width: usize) -> Line<'static> {
    let total: usize = line
        .spans
        .iter()
        .map(|s| unicode_width::UnicodeWidthStr::width(s.content.as_ref()))
        .sum();
    if total <= max_width {
        let spans: Vec<Span<'static>> = line
            .spans
            .iter()
            .map(|s| Span::styled(s.content.to_string(), s.style))
            .collect();
        return Line::from(spans);
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0usize;
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len());

    'outer: for span in &line.spans {
        let mut kept = String::new();
        for ch in span.content.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if width + char_width > budget {
                if !kept.is_empty() {
                    spans.push(Span::styled(kept, span.style));
                }
                break 'outer;
            }
            kept.push(ch);
            width += char_width;
        }
        spans.push(Span::styled(kept, span.style));
    }

    spans.push(Span::raw("…"));
    Line::from(spans)
}

/// One colored label chip for a select option.
fn chip_span(option: &SelectOption) -> Span<'static> {
    Span::styled(
        format!(" {} ", option.value),
        Style::default()
            .bg(chip_background(option.color))
            .fg(chip_foreground(option.color)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ChoiceColor;

    fn option(value: &str, color: ChoiceColor) -> SelectOption {
        SelectOption {
            id: 1,
            value: value.to_string(),
            color,
        }
    }

    #[test]
    fn empty_value_renders_empty_cell_for_every_type() {
        let types = [
            FieldType::Boolean,
            FieldType::Date,
            FieldType::Text,
            FieldType::LongText,
            FieldType::SingleSelect,
            FieldType::MultipleSelect,
            FieldType::File,
            FieldType::Unknown,
        ];
        for field_type in types {
            let line = render_cell(field_type, &CellValue::Empty);
            assert!(line.spans.is_empty(), "{field_type:?} should render empty");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let value = CellValue::Select(option("Urgent", ChoiceColor::DarkRed));
        let a = render_cell(FieldType::SingleSelect, &value);
        let b = render_cell(FieldType::SingleSelect, &value);
        assert_eq!(a, b);
    }

    #[test]
    fn boolean_uses_filled_and_outline_glyphs() {
        let yes = render_cell(FieldType::Boolean, &CellValue::Bool(true));
        let no = render_cell(FieldType::Boolean, &CellValue::Bool(false));
        assert_eq!(yes.spans[0].content, CHECK_TRUE);
        assert_eq!(no.spans[0].content, CHECK_FALSE);
    }

    #[test]
    fn dark_red_chip_has_light_text() {
        let value = CellValue::Select(option("Urgent", ChoiceColor::DarkRed));
        let line = render_cell(FieldType::SingleSelect, &value);
        assert_eq!(line.spans[0].style.fg, Some(Color::White));
    }

    #[test]
    fn light_blue_chip_has_dark_text() {
        let value = CellValue::Select(option("Idea", ChoiceColor::LightBlue));
        let line = render_cell(FieldType::SingleSelect, &value);
        assert_eq!(line.spans[0].style.fg, Some(Color::Black));
    }

    #[test]
    fn multi_select_preserves_array_order() {
        let value = CellValue::MultiSelect(vec![
            option("b", ChoiceColor::Blue),
            option("a", ChoiceColor::Green),
        ]);
        let line = render_cell(FieldType::MultipleSelect, &value);
        assert_eq!(line.spans[0].content, " b ");
        assert_eq!(line.spans[2].content, " a ");
    }

    #[test]
    fn long_text_is_styled_distinctly_from_text() {
        let value = CellValue::Text("many words".to_string());
        let plain = render_cell(FieldType::Text, &value);
        let long = render_cell(FieldType::LongText, &value);
        assert_eq!(plain.spans[0].style, Style::default());
        assert!(long.spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn truncation_keeps_short_lines_intact() {
        let line = Line::from(Span::raw("short"));
        let truncated = truncate_line(&line, 10);
        assert_eq!(truncated.spans[0].content, "short");
    }

    #[test]
    fn truncation_cuts_at_display_width_with_ellipsis() {
        let line = Line::from(Span::raw("abcdefghij"));
        let truncated = truncate_line(&line, 5);
        assert_eq!(truncated.spans[0].content, "abcd");
        assert_eq!(truncated.spans.last().unwrap().content, "…");
    }

    #[test]
    fn truncation_preserves_chip_styles() {
        let value = CellValue::MultiSelect(vec![
            option("first", ChoiceColor::Blue),
            option("second", ChoiceColor::Green),
        ]);
        let line = render_cell(FieldType::MultipleSelect, &value);
        let truncated = truncate_line(&line, 6);
        assert_eq!(truncated.spans[0].style, line.spans[0].style);
        assert_eq!(truncated.spans.last().unwrap().content, "…");
    }

    #[test]
    fn unrecognized_type_falls_back_to_string_form() {
        let value = CellValue::Other("3.14".to_string());
        let line = render_cell(FieldType::Unknown, &value);
        assert_eq!(line.spans[0].content, "3.14");
    }
}
