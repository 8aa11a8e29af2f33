use std::env;
use std::io;
use std::thread;
use std::time;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeboard::board::Board;
use lifeboard::camera::Camera;
use lifeboard::events::AppEvent;
use lifeboard::events::EngineEvent;
use lifeboard::events::Event;
use lifeboard::io::convert_event;

const FRAMERATE: u32 = 60;
const FRAMETIME: time::Duration =
    time::Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

/// Generations per second while the simulation is running. Stepping is on
/// its own schedule, independent of the frame rate: a redraw never advances
/// the board.
const STEP_RATE: u32 = 20;
const STEP_INTERVAL: time::Duration =
    time::Duration::from_millis(((1f64 / STEP_RATE as f64) * 1_000f64) as u64);

/// Probability that a seeded cell starts alive
const SEED_DENSITY: f64 = 0.6;

/// Set the `LIFE_SEED` environment variable to a u64 for a reproducible run
fn rng_from_env() -> anyhow::Result<StdRng> {
    match env::var("LIFE_SEED") {
        Ok(seed) => {
            let seed = seed.parse().context("LIFE_SEED must be a u64")?;

            Ok(StdRng::seed_from_u64(seed))
        }
        Err(_) => Ok(StdRng::from_entropy()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut rng = rng_from_env()?;

    // Size the board to the terminal, keeping one line for status
    let (cols, rows) = terminal::size()?;
    let (rows, cols) = Camera::fit(cols, rows.saturating_sub(1));

    let mut board = Board::new(rows, cols, SEED_DENSITY, &mut rng)
        .context("terminal too small for a single cell")?;
    let mut cam = Camera::new();

    info!(rows, cols, "starting session");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let res = run(&mut stdout, &mut board, &mut cam, &mut rng);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run(
    stdout: &mut io::Stdout,
    board: &mut Board,
    cam: &mut Camera,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut paused = false;
    let mut last_step = time::Instant::now();

    loop {
        let t = time::Instant::now();

        // Poll input for at most one frame
        let event = if event::poll(FRAMETIME)? {
            convert_event(event::read()?)
        } else {
            None
        };

        match event {
            None => {}
            Some(Event::AppEvent(AppEvent::Exit)) => break,
            Some(Event::AppEvent(AppEvent::TogglePause)) => paused = !paused,
            Some(Event::AppEvent(AppEvent::ToggleGridlines)) => cam.toggle_gridlines(),
            Some(Event::AppEvent(AppEvent::Resize { cols, rows })) => {
                // A resize ends the session and seeds a new board that
                // fits; a board's own dimensions never change.
                let (rows, cols) = Camera::fit(cols, rows.saturating_sub(1));

                *board = Board::new(rows, cols, SEED_DENSITY, rng)
                    .context("terminal too small for a single cell")?;
                last_step = time::Instant::now();
            }
            Some(Event::EngineEvent(EngineEvent::Step)) => board.step(),
            Some(Event::EngineEvent(EngineEvent::Reseed)) => {
                *board = Board::new(board.rows(), board.cols(), SEED_DENSITY, rng)?;
                last_step = time::Instant::now();
            }
        }

        // The step schedule is independent of input and of drawing
        if !paused && last_step.elapsed() >= STEP_INTERVAL {
            board.step();
            last_step = time::Instant::now();
        }

        let frame = cam.draw(board);

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in frame.lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        let status = format!(
            "gen {:>6}  pop {:>6}  {}  [space] pause  [s] step  [r] reseed  [g] grid  [q] quit",
            board.generation(),
            board.population(),
            if paused { "paused " } else { "running" },
        );
        execute!(stdout, style::Print(status))?;

        let time_left = FRAMETIME.saturating_sub(t.elapsed());
        thread::sleep(time_left);
    }

    Ok(())
}
