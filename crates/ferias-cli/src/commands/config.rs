use clap::Subcommand;
use ferias_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Set the countdown target (ISO-8601 local literal)
    SetTarget { target: String },
    /// Set the last day of classes (YYYY-MM-DD)
    SetLastDay { date: String },
    /// Add a closure date (YYYY-MM-DD)
    AddClosure { date: String },
    /// Remove a closure date (YYYY-MM-DD)
    RemoveClosure { date: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let cfg = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetTarget { target } => {
            let mut cfg = Config::load_or_default();
            cfg.countdown.target = target;
            // Reject bad literals before persisting.
            cfg.target_instant()?;
            cfg.save()?;
            println!("target = {}", cfg.countdown.target);
        }
        ConfigAction::SetLastDay { date } => {
            let mut cfg = Config::load_or_default();
            cfg.school.last_day = date;
            cfg.school_calendar()?;
            cfg.save()?;
            println!("last_day = {}", cfg.school.last_day);
        }
        ConfigAction::AddClosure { date } => {
            let mut cfg = Config::load_or_default();
            if !cfg.school.closures.contains(&date) {
                cfg.school.closures.push(date);
            }
            cfg.school_calendar()?;
            cfg.save()?;
            println!("closures = {}", cfg.school.closures.join(", "));
        }
        ConfigAction::RemoveClosure { date } => {
            let mut cfg = Config::load_or_default();
            cfg.school.closures.retain(|d| d != &date);
            cfg.save()?;
            println!("closures = {}", cfg.school.closures.join(", "));
        }
    }
    Ok(())
}
