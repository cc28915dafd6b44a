//! Live countdown display.
//!
//! Owns the engine and the interval: renders a frame per tick, stops
//! permanently once the target is reached, and cancels on Ctrl-C.

use std::io::Write;
use std::time::Duration;

use ferias_core::{Config, CountdownEngine, Event};

use crate::render;

pub fn run(once: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let target = cfg.target_instant()?;
    let calendar = cfg.school_calendar()?;
    // Computed once per session, not per tick.
    let school_days_left = calendar.remaining_from(chrono::Local::now().date_naive());

    let mut engine = CountdownEngine::new(target);

    if once {
        if let Some(event) = engine.tick() {
            emit(&cfg, &engine, school_days_left, json, &event, false)?;
        }
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch_loop(&cfg, &mut engine, school_days_left, json))
}

async fn watch_loop(
    cfg: &Config,
    engine: &mut CountdownEngine,
    school_days_left: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(Duration::from_secs(cfg.countdown.tick_secs.max(1)));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            // The first tick completes immediately, so the board renders
            // before the first full interval elapses.
            _ = interval.tick() => {
                match engine.tick() {
                    Some(event @ Event::CountdownFinished { .. }) => {
                        emit(cfg, engine, school_days_left, json, &event, true)?;
                        // Terminal state: no further ticks needed.
                        break;
                    }
                    Some(event) => emit(cfg, engine, school_days_left, json, &event, true)?,
                    None => break,
                }
            }
            _ = &mut ctrl_c => break,
        }
    }
    Ok(())
}

fn emit(
    cfg: &Config,
    engine: &CountdownEngine,
    school_days_left: u32,
    json: bool,
    event: &Event,
    clear: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }

    let frame = if engine.is_time_up() {
        render::end_view(cfg)
    } else {
        render::board(cfg, engine.remaining(), school_days_left)
    };

    let mut stdout = std::io::stdout();
    if clear {
        write!(stdout, "{}", render::CLEAR)?;
    }
    write!(stdout, "{frame}")?;
    stdout.flush()?;
    Ok(())
}
