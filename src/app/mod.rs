use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::draw_game;
use crate::{Game, Heading, TICK_MS};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new();
    let mut ticker = Ticker::new(Duration::from_millis(TICK_MS));
    ticker.start();

    loop {
        terminal.draw(|frame| draw_game(frame, &game, !ticker.is_running()))?;

        if event::poll(Duration::from_millis(20))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('p') => ticker.toggle(),
                    code => handle_input(code, &mut game),
                }
            }
        }

        if ticker.due() {
            game.advance_tick();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Up => game.set_direction(Heading::Up),
        KeyCode::Down => game.set_direction(Heading::Down),
        KeyCode::Left => game.set_direction(Heading::Left),
        KeyCode::Right => game.set_direction(Heading::Right),
        // Everything else is silently ignored.
        _ => {}
    }
}

/// Repeating tick schedule with an explicit on/off handle. `due` reports
/// whether a full period has elapsed since the last firing and rearms.
struct Ticker {
    period: Duration,
    last: Instant,
    running: bool,
}

impl Ticker {
    fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
            running: false,
        }
    }

    fn start(&mut self) {
        self.running = true;
        self.last = Instant::now();
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn due(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.last.elapsed() >= self.period {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}
