use crate::app::state::*;
use crate::exam::model::QuestionKind;
use crate::exam::reveal::{self, OptionStyle};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Question;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let session = &state.session;
    let question = session.current_question();
    let number = session.catalog().number_of(&question.id).unwrap_or(0);
    let kind_icon = match question.kind {
        QuestionKind::Listening => "♪",
        QuestionKind::Reading => "¶",
    };

    let mut title = vec![Span::styled(
        format!(
            " Question {} of {} · {} {} ",
            number,
            session.catalog().question_count(),
            kind_icon,
            question.kind.label()
        ),
        Theme::title(),
    )];
    if session.is_flagged(&question.id) {
        title.push(Span::styled(
            " ⚑ flagged ",
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let mut lines: Vec<Line> = Vec::new();

    if state.config.ui.show_passage {
        if let Some(ref passage) = question.passage {
            lines.push(Line::from(Span::styled(
                passage.as_str(),
                Style::default()
                    .fg(Theme::TEXT_SECONDARY)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(Span::styled(
        question.prompt.as_str(),
        Theme::title(),
    )));
    lines.push(Line::from(""));

    let show_cursor = focused && !session.show_answer();
    for (i, (text, style)) in question
        .options
        .iter()
        .zip(reveal::option_styles(session, question))
        .enumerate()
    {
        let pointer = if show_cursor && i == state.option_cursor {
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL))
        } else {
            Span::raw("  ")
        };
        let mut spans = vec![
            pointer,
            Span::styled(format!("{}) ", i + 1), Theme::muted()),
            Span::styled(text.as_str(), Theme::option(style)),
        ];
        let suffix = match style {
            OptionStyle::Default => None,
            OptionStyle::Selected => Some(("  ● your answer", Theme::option(style))),
            OptionStyle::Correct => Some(("  ✓", Theme::option(style))),
            OptionStyle::IncorrectSelected => Some(("  ✗ your answer", Theme::option(style))),
        };
        if let Some((label, style)) = suffix {
            spans.push(Span::styled(label, style.remove_modifier(Modifier::CROSSED_OUT)));
        }
        lines.push(Line::from(spans));
    }

    if session.show_answer() {
        lines.push(Line::from(""));
        if session.answer_for(&question.id).is_none() {
            lines.push(Line::from(Span::styled(
                "Not answered",
                Style::default().fg(Theme::ACCENT_AMBER),
            )));
        }
        if let Some(ref explanation) = question.explanation {
            lines.push(Line::from(vec![
                Span::styled(
                    "Why: ",
                    Style::default()
                        .fg(Theme::ACCENT_LAVENDER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(explanation.as_str(), Theme::text()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if session.show_answer() {
            "n/p move · f flag · r back to answering · q quit"
        } else {
            "1-9/Enter answer · n/p move · f flag · [ ] parts · r results · q quit"
        },
        Theme::muted(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
