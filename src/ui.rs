use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use numo::backdrop::{Backdrop, X_RANGE, Y_RANGE};
use numo::games::GameKind;
use numo::quiz::{CurrentQuestion, Outcome, Phase, Quiz};

use crate::{App, AppState};

const CARD_WIDTH: u16 = 62;
/// Glyphs deeper than this get the dim modifier.
const DEPTH_DIM: f64 = -9.0;

fn title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn correct_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

fn incorrect_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn locked_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(backdrop) = &self.backdrop {
            render_backdrop(backdrop, palette_for(self), area, buf);
        }
        match self.state {
            AppState::Menu => render_menu(self, area, buf),
            AppState::Playing => {
                if let Some(quiz) = &self.quiz {
                    render_quiz(quiz, area, buf);
                }
            }
        }
    }
}

/// Ornament colors per theme, taken from each game's accent palette.
fn palette_for(app: &App) -> &'static [Color; 8] {
    let theme = match (&app.state, &app.quiz) {
        (AppState::Playing, Some(quiz)) => quiz.kind().theme(),
        _ => "menu",
    };
    match theme {
        "matching" => &[
            Color::Rgb(6, 182, 212),
            Color::Rgb(34, 211, 238),
            Color::Rgb(14, 165, 233),
            Color::Rgb(56, 189, 248),
            Color::Rgb(8, 145, 178),
            Color::Rgb(103, 232, 249),
            Color::Rgb(34, 211, 238),
            Color::Rgb(6, 182, 212),
        ],
        "comparison" => &[
            Color::Rgb(99, 102, 241),
            Color::Rgb(129, 140, 248),
            Color::Rgb(139, 92, 246),
            Color::Rgb(167, 139, 250),
            Color::Rgb(79, 70, 229),
            Color::Rgb(196, 181, 253),
            Color::Rgb(99, 102, 241),
            Color::Rgb(139, 92, 246),
        ],
        "fillblank" => &[
            Color::Rgb(16, 185, 129),
            Color::Rgb(52, 211, 153),
            Color::Rgb(20, 184, 166),
            Color::Rgb(45, 212, 191),
            Color::Rgb(5, 150, 105),
            Color::Rgb(153, 246, 228),
            Color::Rgb(16, 185, 129),
            Color::Rgb(20, 184, 166),
        ],
        "truefalse" => &[
            Color::Rgb(217, 70, 239),
            Color::Rgb(244, 114, 182),
            Color::Rgb(232, 121, 249),
            Color::Rgb(251, 113, 133),
            Color::Rgb(162, 28, 175),
            Color::Rgb(240, 171, 252),
            Color::Rgb(236, 72, 153),
            Color::Rgb(217, 70, 239),
        ],
        _ => &[
            Color::Rgb(99, 102, 241),
            Color::Rgb(139, 92, 246),
            Color::Rgb(6, 182, 212),
            Color::Rgb(14, 165, 233),
            Color::Rgb(34, 211, 238),
            Color::Rgb(129, 140, 248),
            Color::Rgb(167, 139, 250),
            Color::Rgb(56, 189, 248),
        ],
    }
}

/// Project the glyph field onto the terminal area. Depth only dims; the
/// field has no perspective worth simulating at cell resolution.
fn render_backdrop(backdrop: &Backdrop, palette: &[Color; 8], area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for glyph in &backdrop.glyphs {
        let fx = (glyph.pos[0] - X_RANGE.0) / (X_RANGE.1 - X_RANGE.0);
        let fy = (glyph.pos[1] - Y_RANGE.0) / (Y_RANGE.1 - Y_RANGE.0);
        let x = area.x + (fx * f64::from(area.width - 1)).round() as u16;
        let y = area.y + (fy * f64::from(area.height - 1)).round() as u16;
        if let Some(cell) = buf.cell_mut((x, y)) {
            let mut style = Style::default().fg(palette[glyph.color_index % palette.len()]);
            if glyph.pos[2] < DEPTH_DIM {
                style = style.add_modifier(Modifier::DIM);
            }
            cell.set_char(glyph.symbol);
            cell.set_style(style);
        }
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Clear a centered card and render the lines inside a rounded border.
/// `extra_height` reserves room for lines known to wrap.
fn card(title: &str, lines: Vec<Line>, extra_height: u16, area: Rect, buf: &mut Buffer) {
    let height = lines.len() as u16 + 2 + extra_height;
    let rect = centered_rect(CARD_WIDTH, height, area);
    Clear.render(rect, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(title_style());
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block)
        .render(rect, buf);
}

fn render_menu(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⭐ Score: {}", app.session.score),
            selected_style(),
        ))
        .centered(),
        Line::from(""),
    ];

    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let marker = if app.menu_cursor == i { "▶ " } else { "  " };
        let style = if app.menu_cursor == i {
            selected_style()
        } else {
            Style::default()
        };
        lines.push(
            Line::from(Span::styled(
                format!("{marker}{}. {}", i + 1, kind.title()),
                style,
            ))
            .centered(),
        );
    }

    lines.push(Line::from(""));
    if let Some((kind, report)) = &app.session.last_report {
        let summary = if report.points > 0 {
            format!("Last game: {} · +{} ⭐", kind.title(), report.points)
        } else {
            format!("Last game: {} · left early", kind.title())
        };
        lines.push(Line::from(Span::styled(summary, hint_style())).centered());
        lines.push(Line::from(""));
    }
    lines.push(
        Line::from(Span::styled(
            "↑/↓ choose · enter play · 1-4 quick start · q quit",
            hint_style(),
        ))
        .centered(),
    );

    card("numo · fun with numbers", lines, 0, area, buf);
}

fn render_quiz(quiz: &Quiz, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::from(""), progress_dots(quiz).centered(), Line::from("")];
    let mut extra_height = 0;

    match quiz.current() {
        CurrentQuestion::Comparison(q) => {
            lines.push(Line::from(q.prompt));
            extra_height = q.prompt.width() as u16 / (CARD_WIDTH - 2);
            lines.push(Line::from(""));
            for (i, option) in q.options.iter().enumerate() {
                lines.push(Line::from(format!(
                    "  {}) {option}",
                    (b'a' + i as u8) as char
                )));
            }
            lines.push(Line::from(""));
            if q.numeric_answer.is_some() {
                lines.push(Line::from(Span::styled(
                    format!("  or type it: > {}_", quiz.input()),
                    selected_style(),
                )));
                lines.push(Line::from(""));
                lines.push(hint_line("a-d choose · or type the number, enter · esc back"));
            } else {
                lines.push(hint_line("a-d choose · esc back"));
            }
        }
        CurrentQuestion::FillBlank(q) => {
            lines.push(Line::from(format!("💡 {}", q.hint)).centered());
            lines.push(Line::from(""));
            let blank = if quiz.input().is_empty() {
                "[ ? ]".to_string()
            } else {
                format!("[ {}_ ]", quiz.input())
            };
            let tiles = q
                .tokens
                .iter()
                .map(|t| {
                    if *t == "?" {
                        blank.clone()
                    } else {
                        format!(" {t} ")
                    }
                })
                .join("  ");
            lines.push(Line::from(Span::styled(tiles, title_style())).centered());
            lines.push(Line::from(""));
            lines.push(hint_line("type the missing number, enter to check · esc back"));
        }
        CurrentQuestion::TrueFalse(q) => {
            lines.push(Line::from(q.statement));
            // The statement wraps inside the card borders.
            extra_height = q.statement.width() as u16 / (CARD_WIDTH - 2);
            lines.push(Line::from(""));
            if quiz.awaiting_correction() {
                let prompt = q.correction.map_or("Type the right value", |c| c.prompt);
                lines.push(Line::from(Span::styled(q.explanation, correct_style())));
                lines.push(Line::from(format!("{prompt}:")));
                lines.push(Line::from(Span::styled(
                    format!("  > {}_", quiz.input()),
                    selected_style(),
                )));
                if quiz.correction_error() {
                    lines.push(Line::from(Span::styled(
                        "Not quite, try again!",
                        incorrect_style(),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(hint_line("type digits, enter to check · esc back"));
            } else {
                lines.push(Line::from("  (t) True      (f) False").centered());
                lines.push(Line::from(""));
                if let Phase::Feedback(_) = quiz.phase() {
                    lines.push(Line::from(q.explanation).centered());
                }
                lines.push(hint_line("t true · f false · esc back"));
            }
        }
        CurrentQuestion::Matching(round) => {
            lines.push(Line::from(round.title).centered());
            lines.push(Line::from(Span::styled(round.example, hint_style())).centered());
            lines.push(Line::from(""));
            for (row, pair) in round.pairs.iter().enumerate() {
                let left_locked = quiz.connected().contains(&row);
                let left_style = if left_locked {
                    locked_style()
                } else if quiz.selected_left() == Some(row) {
                    selected_style()
                } else {
                    Style::default()
                };
                let left_text = format!("  {}) {:>3}  ({})", row + 1, pair.left, pair.label);

                let slot = quiz.right_order().get(row).copied().unwrap_or(row);
                let right_pair = &round.pairs[slot];
                let right_style = if quiz.connected().contains(&slot) {
                    locked_style()
                } else {
                    Style::default()
                };
                let right_text =
                    format!("{}) {:>3}", (b'a' + row as u8) as char, right_pair.right);

                lines.push(Line::from(vec![
                    Span::styled(format!("{left_text:<32}"), left_style),
                    Span::styled(right_text, right_style),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(hint_line("1-3 pick a number, a-c its match · esc back"));
        }
    }

    lines.push(feedback_line(quiz));

    let title = format!(
        "{} · {}/{}",
        quiz.kind().title(),
        quiz.index() + 1,
        quiz.question_count()
    );
    card(&title, lines, extra_height, area, buf);
}

/// One dot per question: filled for done, ringed for current, hollow ahead.
fn progress_dots(quiz: &Quiz) -> Line {
    let spans = (0..quiz.question_count())
        .map(|i| {
            let (symbol, style) = match i.cmp(&quiz.index()) {
                std::cmp::Ordering::Less => ("● ", correct_style()),
                std::cmp::Ordering::Equal => ("◉ ", selected_style()),
                std::cmp::Ordering::Greater => ("○ ", hint_style()),
            };
            Span::styled(symbol, style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn feedback_line(quiz: &Quiz) -> Line {
    match quiz.phase() {
        Phase::Feedback(Outcome::Correct) if !quiz.awaiting_correction() => {
            Line::from(Span::styled("✅ Correct!", correct_style())).centered()
        }
        Phase::Feedback(Outcome::Incorrect) => {
            Line::from(Span::styled("❌ Try again!", incorrect_style())).centered()
        }
        _ => Line::from(""),
    }
}

fn hint_line(text: &str) -> Line {
    Line::from(Span::styled(text.to_string(), hint_style())).centered()
}
