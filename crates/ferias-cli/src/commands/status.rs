use ferias_core::{Config, CountdownEngine};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let calendar = cfg.school_calendar()?;
    let school_days_left = calendar.remaining_from(chrono::Local::now().date_naive());

    let mut engine = CountdownEngine::new(cfg.target_instant()?);
    // Tick to bring the remaining time up to date.
    engine.tick();
    let snapshot = engine.snapshot(school_days_left);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
