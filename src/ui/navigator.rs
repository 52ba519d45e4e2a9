use crate::app::state::*;
use crate::exam::progress::{self, QuestionStatus};
use crate::ui::theme::Theme;
use crate::ui::{display_width, truncate};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Navigator;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Questions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner_width = area.width.saturating_sub(2) as usize;
    let columns = state.config.ui.grid_columns.max(1);
    let mut lines: Vec<Line> = Vec::new();

    for part in progress::grid(&state.session) {
        let counter = format!(" {}/{}", part.progress.answered, part.progress.total);
        let marker = if part.is_current { "▸ " } else { "  " };
        let title_width = inner_width.saturating_sub(display_width(&counter) + display_width(marker));
        let title_style = if part.is_current {
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT_SECONDARY)
        };
        let counter_style = if part.progress.is_complete() {
            Style::default().fg(Theme::ACCENT_GREEN)
        } else {
            Theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(truncate(&part.title, title_width), title_style),
            Span::styled(counter, counter_style),
        ]));

        for row in part.cells.chunks(columns) {
            let mut spans = vec![Span::raw("  ")];
            for cell in row {
                let mut style = Theme::question_cell(cell.status);
                if cell.is_current {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(Span::styled(format!("{:>3} ", cell.number), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    lines.push(legend());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn legend() -> Line<'static> {
    let entry = |status: QuestionStatus, label: &'static str| {
        vec![
            Span::styled("  ", Theme::question_cell(status)),
            Span::styled(format!(" {} ", label), Theme::muted()),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(entry(QuestionStatus::Answered, "done"));
    spans.extend(entry(QuestionStatus::Flagged, "flag"));
    spans.extend(entry(QuestionStatus::Current, "now"));
    Line::from(spans)
}
