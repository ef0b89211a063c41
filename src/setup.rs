//! Match setup: command-line parsing and the interactive prompts that fill in
//! whatever the command line left out.

use crate::utils::VERSION_TEXT;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Everything needed to start a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSettings {
    pub player_names: Vec<String>,
    pub num_rounds: u32,
    pub seed: Option<u64>,
}

impl MatchSettings {
    pub fn num_players(&self) -> usize {
        self.player_names.len()
    }

    /// Display name of a 1-based player number.
    pub fn name_of(&self, player: usize) -> String {
        player
            .checked_sub(1)
            .and_then(|i| self.player_names.get(i))
            .cloned()
            .unwrap_or_else(|| default_name(player))
    }
}

/// What the command line asked for. Anything left out is prompted for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "flappy-rounds", version = VERSION_TEXT)]
#[command(about = "Turn-based multiplayer Flappy Bird for the terminal", long_about = None)]
#[command(after_help = "Controls: SPACE flap/continue, R restart from results, Q or Esc quit")]
pub struct CliArgs {
    /// Number of players (prompted if omitted, or taken from --name)
    #[arg(short, long, value_name = "N", value_parser = parse_positive)]
    pub players: Option<u32>,

    /// Number of rounds (prompted if omitted)
    #[arg(short, long, value_name = "N", value_parser = parse_positive)]
    pub rounds: Option<u32>,

    /// Player name, repeat once per player
    #[arg(short = 'n', long = "name", value_name = "NAME", value_parser = validate_name)]
    pub names: Vec<String>,

    /// Seed pipe placement for a repeatable match
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Game config JSON (defaults to the platform config dir)
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Write logs to PATH (RUST_LOG sets the level)
    #[arg(long = "log", value_name = "PATH")]
    pub log_path: Option<PathBuf>,
}

impl CliArgs {
    /// Checks across flags that clap cannot express.
    pub fn check(&self) -> Result<(), String> {
        match self.players {
            Some(players) if self.names.len() > players as usize => Err(format!(
                "got {} names for {} players",
                self.names.len(),
                players
            )),
            _ => Ok(()),
        }
    }
}

pub fn default_name(player: usize) -> String {
    format!("Player {}", player)
}

/// Parse a positive count, with the messages players see on bad input.
pub fn parse_positive(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => {
            u32::try_from(n).map_err(|_| format!("Please enter a number up to {}.", u32::MAX))
        }
        Ok(_) => Err("Please enter a positive number.".to_string()),
        Err(_) => Err("Invalid input. Please enter a number.".to_string()),
    }
}

/// Trim a player name; anything but blank is accepted.
pub fn validate_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Please enter a name.".to_string());
    }
    Ok(trimmed.to_string())
}

/// Line-based prompter. Re-asks until the answer validates; end of input is
/// reported as `UnexpectedEof` so the caller can exit.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask<T>(
        &mut self,
        message: &str,
        check: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<T> {
        loop {
            write!(self.output, "{} ", message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "setup cancelled",
                ));
            }

            match check(&line) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    pub fn ask_count(&mut self, message: &str) -> io::Result<u32> {
        self.ask(message, parse_positive)
    }

    pub fn ask_name(&mut self, player: usize) -> io::Result<String> {
        self.ask(&format!("Enter name for Player {}:", player), validate_name)
    }

    /// Fill in what `cli` is missing by prompting. Without `--players` the
    /// names given on the command line fix the player count; with neither,
    /// the count and every name are prompted for.
    pub fn complete(&mut self, cli: &CliArgs) -> io::Result<MatchSettings> {
        let players = match (cli.players, cli.names.len()) {
            (Some(players), _) => players as usize,
            (None, 0) => self.ask_count("Enter number of players:")? as usize,
            (None, named) => named,
        };
        let num_rounds = match cli.rounds {
            Some(rounds) => rounds,
            None => self.ask_count("Enter number of rounds:")?,
        };

        let prompt_names = cli.names.is_empty() && cli.players.is_none();
        let mut player_names = cli.names.clone();
        for player in player_names.len() + 1..=players {
            let name = if prompt_names {
                self.ask_name(player)?
            } else {
                default_name(player)
            };
            player_names.push(name);
        }

        Ok(MatchSettings {
            player_names,
            num_rounds,
            seed: cli.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn parse(list: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("flappy-rounds").chain(list.iter().copied()))
    }

    fn play(list: &[&str]) -> CliArgs {
        parse(list).unwrap()
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("3"), Ok(3));
        assert_eq!(parse_positive("  7\n"), Ok(7));
        assert_eq!(
            parse_positive("0"),
            Err("Please enter a positive number.".to_string())
        );
        assert_eq!(
            parse_positive("-2"),
            Err("Please enter a positive number.".to_string())
        );
        assert_eq!(
            parse_positive("two"),
            Err("Invalid input. Please enter a number.".to_string())
        );
        assert!(parse_positive("99999999999").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Ada \n"), Ok("Ada".to_string()));
        assert_eq!(
            validate_name("Bartholomew Smith"),
            Ok("Bartholomew Smith".to_string())
        );
        assert_eq!(validate_name("   "), Err("Please enter a name.".to_string()));
    }

    #[test]
    fn test_command_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = play(&[
            "--players", "2", "--rounds", "3", "-n", "Ada", "--name", "Linus", "--seed", "42",
        ]);
        assert_eq!(cli.players, Some(2));
        assert_eq!(cli.rounds, Some(3));
        assert_eq!(cli.names, vec!["Ada", "Linus"]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.check(), Ok(()));
    }

    #[test]
    fn test_parse_version_and_help() {
        let version = parse(&["--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
        assert!(version.to_string().contains(VERSION_TEXT));

        assert_eq!(parse(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(play(&[]), CliArgs::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--players"]).is_err());
        assert!(parse(&["--players", "0"]).is_err());
        assert!(parse(&["--rounds", "x"]).is_err());
        assert!(parse(&["--seed", "-1"]).is_err());
        assert!(parse(&["--name", "  "]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn test_more_names_than_players_is_rejected() {
        let cli = play(&["-p", "1", "-n", "A", "-n", "B"]);
        assert_eq!(cli.check(), Err("got 2 names for 1 players".to_string()));
    }

    #[test]
    fn test_prompter_reprompts_until_valid() {
        let input = Cursor::new("abc\n0\n2\n1\nAda\n\nGrace\n");
        let mut output = Vec::new();
        let settings = Prompter::new(input, &mut output)
            .complete(&CliArgs::default())
            .unwrap();

        assert_eq!(settings.player_names, vec!["Ada", "Grace"]);
        assert_eq!(settings.num_rounds, 1);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Invalid input. Please enter a number."));
        assert!(transcript.contains("Please enter a positive number."));
        assert!(transcript.contains("Please enter a name."));
    }

    #[test]
    fn test_prompter_eof_cancels() {
        let mut output = Vec::new();
        let err = Prompter::new(Cursor::new("3\n"), &mut output)
            .complete(&CliArgs::default())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_cli_counts_skip_prompts_and_default_names() {
        let cli = play(&["-p", "3", "-r", "2", "-n", "Ada"]);
        let mut output = Vec::new();
        let settings = Prompter::new(Cursor::new(""), &mut output)
            .complete(&cli)
            .unwrap();

        assert_eq!(settings.player_names, vec!["Ada", "Player 2", "Player 3"]);
        assert_eq!(settings.num_rounds, 2);
        assert!(output.is_empty());
    }

    #[test]
    fn test_names_without_player_count_set_the_count() {
        let cli = play(&["-r", "1", "-n", "Ada", "-n", "Grace", "-n", "Linus"]);
        assert_eq!(cli.check(), Ok(()));

        let mut output = Vec::new();
        let settings = Prompter::new(Cursor::new(""), &mut output)
            .complete(&cli)
            .unwrap();

        assert_eq!(settings.player_names, vec!["Ada", "Grace", "Linus"]);
        assert!(output.is_empty());
    }

    #[test]
    fn test_name_of_falls_back_to_number() {
        let settings = MatchSettings {
            player_names: vec!["Ada".to_string()],
            num_rounds: 1,
            seed: None,
        };
        assert_eq!(settings.name_of(1), "Ada");
        assert_eq!(settings.name_of(2), "Player 2");
        assert_eq!(settings.num_players(), 1);
    }
}
