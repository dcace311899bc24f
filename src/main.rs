mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Write},
    time::Duration,
};

use numo::{
    backdrop::Backdrop,
    config::{Config, ConfigStore, FileConfigStore},
    games::GameKind,
    quiz::{Answer, Phase, Quiz, QuizMsg},
    runtime::{AppEvent, EventSource, Runner, TerminalEvents},
    session::Session,
    TICK_RATE_MS,
};

/// playful arithmetic quiz tui for young learners
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A playful terminal quiz for young learners: match pairs, compare numbers, fill in missing values, and judge true/false statements, all on top of an animated backdrop."
)]
pub struct Cli {
    /// jump straight into a game instead of the menu
    #[clap(short, long, value_enum)]
    game: Option<GameKind>,

    /// seed for the decorative backdrop (defaults to a per-theme hash)
    #[clap(short, long)]
    seed: Option<u32>,

    /// disable the terminal bell on answer feedback
    #[clap(long)]
    no_sound: bool,

    /// disable the animated backdrop
    #[clap(long)]
    no_backdrop: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Menu,
    Playing,
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub session: Session,
    pub state: AppState,
    pub quiz: Option<Quiz>,
    pub menu_cursor: usize,
    pub backdrop: Option<Backdrop>,
}

impl App {
    pub fn new(cli: &Cli, mut config: Config) -> Self {
        if cli.no_sound {
            config.sound = false;
        }
        if cli.no_backdrop {
            config.backdrop = false;
        }
        if cli.seed.is_some() {
            config.backdrop_seed = cli.seed;
        }

        let mut app = Self {
            config,
            session: Session::new(),
            state: AppState::Menu,
            quiz: None,
            menu_cursor: 0,
            backdrop: None,
        };
        app.set_backdrop_theme("menu");
        if let Some(game) = cli.game {
            app.start_game(game);
        }
        app
    }

    fn set_backdrop_theme(&mut self, theme: &str) {
        self.backdrop = self
            .config
            .backdrop
            .then(|| Backdrop::new(theme, self.config.backdrop_seed));
    }

    pub fn start_game(&mut self, kind: GameKind) {
        self.quiz = Some(Quiz::new(kind, self.config.delays()));
        self.state = AppState::Playing;
        self.set_backdrop_theme(kind.theme());
    }

    pub fn back_to_menu(&mut self) {
        self.quiz = None;
        self.state = AppState::Menu;
        self.set_backdrop_theme("menu");
    }

    /// Feed one message to the running quiz and route its single
    /// completion report to the session.
    pub fn quiz_msg(&mut self, msg: QuizMsg) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        let kind = quiz.kind();
        let report = quiz.update(msg);
        if let Some(report) = report {
            self.session.on_quiz_report(kind, report);
            self.back_to_menu();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config = FileConfigStore::new().load();

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&cli, config);
    let runner = Runner::new(
        TerminalEvents::spawn(),
        Duration::from_millis(TICK_RATE_MS),
    );
    let res = run_app(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                if let Some(backdrop) = app.backdrop.as_mut() {
                    backdrop.advance();
                }
                let counting_down = app
                    .quiz
                    .as_ref()
                    .is_some_and(|q| q.has_pending_transition());
                app.quiz_msg(QuizMsg::Tick);

                // Redraw on ticks only while something is animating.
                if app.backdrop.is_some() || counting_down {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

/// Handle one key event. Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.state {
        AppState::Menu => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                app.menu_cursor = app.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.menu_cursor = (app.menu_cursor + 1).min(GameKind::ALL.len() - 1);
            }
            KeyCode::Enter => {
                app.start_game(GameKind::ALL[app.menu_cursor]);
            }
            KeyCode::Char(c @ '1'..='4') => {
                app.start_game(GameKind::ALL[c as usize - '1' as usize]);
            }
            _ => {}
        },
        AppState::Playing => match key.code {
            // Back out at any point; the quiz reports 0 for the session.
            KeyCode::Esc => app.quiz_msg(QuizMsg::Exit),
            _ => handle_game_key(app, key),
        },
    }

    false
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    let Some(quiz) = app.quiz.as_ref() else {
        return;
    };
    let kind = quiz.kind();
    let awaiting_correction = quiz.awaiting_correction();
    let input = quiz.input().to_string();
    let selected_left = quiz.selected_left();
    let right_order = quiz.right_order().to_vec();
    let had_feedback = matches!(quiz.phase(), Phase::Feedback(_));

    match (kind, key.code) {
        (GameKind::Comparison, KeyCode::Char(c @ 'a'..='d')) => {
            let choice = c as usize - 'a' as usize;
            app.quiz_msg(QuizMsg::Submit(Answer::Choice(choice)));
        }
        // Digits feed the typed-answer box of questions that have one.
        (GameKind::Comparison, KeyCode::Char(c)) if c.is_ascii_digit() => {
            if let Some(q) = app.quiz.as_mut() {
                q.push_digit(c);
            }
        }
        (GameKind::Comparison, KeyCode::Backspace) => {
            if let Some(q) = app.quiz.as_mut() {
                q.pop_digit();
            }
        }
        (GameKind::Comparison, KeyCode::Enter) => {
            app.quiz_msg(QuizMsg::Submit(Answer::Text(input)));
        }
        (GameKind::TrueFalse, _) if awaiting_correction => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(q) = app.quiz.as_mut() {
                    q.push_digit(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(q) = app.quiz.as_mut() {
                    q.pop_digit();
                }
            }
            KeyCode::Enter => app.quiz_msg(QuizMsg::SubmitCorrection(input)),
            _ => {}
        },
        (GameKind::TrueFalse, KeyCode::Char('t')) => {
            app.quiz_msg(QuizMsg::Submit(Answer::Bool(true)));
        }
        (GameKind::TrueFalse, KeyCode::Char('f')) => {
            app.quiz_msg(QuizMsg::Submit(Answer::Bool(false)));
        }
        (GameKind::FillBlank, KeyCode::Char(c)) if c.is_ascii_digit() => {
            if let Some(q) = app.quiz.as_mut() {
                q.push_digit(c);
            }
        }
        (GameKind::FillBlank, KeyCode::Backspace) => {
            if let Some(q) = app.quiz.as_mut() {
                q.pop_digit();
            }
        }
        (GameKind::FillBlank, KeyCode::Enter) => {
            app.quiz_msg(QuizMsg::Submit(Answer::Text(input)));
        }
        (GameKind::Matching, KeyCode::Char(c @ '1'..='9')) => {
            if let Some(q) = app.quiz.as_mut() {
                q.pick_left(c as usize - '1' as usize);
            }
        }
        (GameKind::Matching, KeyCode::Char(c @ 'a'..='z')) => {
            let slot = c as usize - 'a' as usize;
            if let (Some(left), Some(right)) = (selected_left, right_order.get(slot).copied()) {
                app.quiz_msg(QuizMsg::Submit(Answer::Connect { left, right }));
            }
        }
        _ => {}
    }

    // Audible cue when a fresh feedback banner appears; best-effort and
    // never allowed to interrupt play.
    if app.config.sound && !had_feedback {
        if let Some(q) = app.quiz.as_ref() {
            if matches!(q.phase(), Phase::Feedback(_)) {
                ring_bell();
            }
        }
    }
}

fn ring_bell() {
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
