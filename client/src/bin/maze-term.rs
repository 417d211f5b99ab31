use std::{
    error::Error,
    io::{self, Write},
    process,
    time::{Duration, Instant},
};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;

use client::{animation::Animation, config::Settings, config::ViewConfig, terminal as screen};
use common::maze::MazeMaker;

const TICK: Duration = Duration::from_millis(16); // ~60 FPS.

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;
    let maker = MazeMaker::new(settings.maze)?;
    let mut animation = Animation::new(maker, &settings.view);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    // Restore the terminal before reporting how the animation ended.
    let result = animate(&mut stdout, &mut animation, &settings.view);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn animate(
    out: &mut impl Write,
    animation: &mut Animation,
    view: &ViewConfig,
) -> Result<(), Box<dyn Error>> {
    let mut last_updated = Instant::now();

    loop {
        if event::poll(TICK)? {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Char('r') => animation.restart(),
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        let phase = animation.update(now - last_updated);
        last_updated = now;

        screen::draw(out, &animation.snapshot(), view, phase)?;
    }
}
