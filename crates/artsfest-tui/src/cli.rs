//! One-shot commands selected by command-line flags.

use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use artsfest_core::auth::ADMIN_USERNAME;
use artsfest_core::models::TeamStanding;
use artsfest_core::utils::truncate_string;
use artsfest_core::{initialize, AdminSession, Config, FestivalStore, InitOutcome, Scoreboard};
use artsfest_core::{TopPerformer, ValidationError};

pub const USAGE: &str = "\
Usage: artsfest [COMMAND]

Without a command, opens the live scoreboard.

Commands:
  --init                    Seed default data if the store is empty
  --standings               Print team standings for the active event
  --top-performers          Print the top performers for the active event
  --change-admin-password   Change the admin password
  --reset-points            Reset all point rules to 3/2/1
  --help                    Show this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Board,
    Init,
    Standings,
    TopPerformers,
    ChangeAdminPassword,
    ResetPoints,
    Help,
}

impl Command {
    /// Parse arguments (without the program name). Only one flag is accepted.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some(first) = args.first() else {
            return Ok(Command::Board);
        };
        if args.len() > 1 {
            bail!("Expected at most one command, got {}", args.len());
        }
        let command = match first.as_str() {
            "--init" => Command::Init,
            "--standings" => Command::Standings,
            "--top-performers" => Command::TopPerformers,
            "--change-admin-password" => Command::ChangeAdminPassword,
            "--reset-points" => Command::ResetPoints,
            "--help" | "-h" => Command::Help,
            other => bail!("Unknown argument: {}", other),
        };
        Ok(command)
    }
}

pub fn run(command: Command, store: &FestivalStore, config: &Config) -> Result<()> {
    match command {
        Command::Board => Ok(()),
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Init => {
            match initialize(store) {
                InitOutcome::Seeded => println!("Default data written."),
                InitOutcome::AlreadyInitialized => println!("Data already initialized."),
            }
            Ok(())
        }
        Command::Standings => {
            let board = Scoreboard::load(store, config.top_performers_limit);
            print!("{}", format_standings(&board.standings, board.active_event.as_deref()));
            Ok(())
        }
        Command::TopPerformers => {
            let board = Scoreboard::load(store, config.top_performers_limit);
            print!("{}", format_performers(&board.top_performers));
            Ok(())
        }
        Command::ChangeAdminPassword => change_admin_password(store),
        Command::ResetPoints => {
            let admin = login(store)?;
            admin.reset_points()?;
            println!("Points reset to gold 3, silver 2, bronze 1.");
            Ok(())
        }
    }
}

fn prompt_username() -> Result<String> {
    print!("Username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin()
        .read_line(&mut username)
        .context("Failed to read username")?;
    Ok(username.trim().to_string())
}

fn prompt_password(prompt: &str) -> Result<String> {
    rpassword::prompt_password(prompt).context("Failed to read password")
}

fn login(store: &FestivalStore) -> Result<AdminSession<'_>> {
    let username = prompt_username()?;
    let password = prompt_password("Password: ")?;
    Ok(AdminSession::login(store, &username, &password)?)
}

fn change_admin_password(store: &FestivalStore) -> Result<()> {
    let current = prompt_password("Current password: ")?;
    let admin = AdminSession::login(store, ADMIN_USERNAME, &current)
        .map_err(|_| ValidationError::IncorrectPassword)?;
    let new = prompt_password("New password: ")?;
    let confirm = prompt_password("Confirm new password: ")?;
    admin.change_admin_password(&current, &new, &confirm)?;
    println!("Admin password updated.");
    Ok(())
}

fn format_standings(standings: &[TeamStanding], event: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Standings: {}", event.unwrap_or("All events"));
    let _ = writeln!(
        out,
        "{:>3}  {:<24} {:>5} {:>6} {:>6} {:>6}",
        "#", "Team", "Gold", "Silver", "Bronze", "Points"
    );
    for s in standings {
        let _ = writeln!(
            out,
            "{:>3}  {:<24} {:>5} {:>6} {:>6} {:>6}",
            s.rank,
            truncate_string(s.name(), 24),
            s.gold,
            s.silver,
            s.bronze,
            s.total_points
        );
    }
    out
}

fn format_performers(performers: &[TopPerformer]) -> String {
    if performers.is_empty() {
        return "No results yet.\n".to_string();
    }
    let mut out = String::new();
    for p in performers {
        let _ = writeln!(
            out,
            "{:>3}. {:<24} {:<24} {:>4} pts",
            p.id,
            truncate_string(&p.name, 24),
            truncate_string(&p.program, 24),
            p.points
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use artsfest_core::models::Team;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(&[]).unwrap(), Command::Board);
        assert_eq!(Command::parse(&args(&["--init"])).unwrap(), Command::Init);
        assert_eq!(
            Command::parse(&args(&["--top-performers"])).unwrap(),
            Command::TopPerformers
        );
        assert_eq!(
            Command::parse(&args(&["--reset-points"])).unwrap(),
            Command::ResetPoints
        );
        assert!(Command::parse(&args(&["--bogus"])).is_err());
        assert!(Command::parse(&args(&["--init", "--standings"])).is_err());
    }

    #[test]
    fn test_format_standings() {
        let mut alpha = TeamStanding::zeroed(&Team::new("Team Alpha", ""));
        alpha.gold = 1;
        alpha.total_points = 3;
        alpha.rank = 1;
        let text = format_standings(&[alpha], Some("Dance Competition"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Standings: Dance Competition");
        assert!(lines[2].contains("Team Alpha"));
        assert!(lines[2].trim_end().ends_with('3'));
    }

    #[test]
    fn test_format_performers_empty() {
        assert_eq!(format_performers(&[]), "No results yet.\n");
    }

    #[test]
    fn test_init_command_is_idempotent() {
        let store = FestivalStore::in_memory();
        let config = Config::default();
        run(Command::Init, &store, &config).unwrap();
        assert!(store.is_initialized());
        run(Command::Init, &store, &config).unwrap();
        assert_eq!(store.load_teams().len(), 1);
    }
}
