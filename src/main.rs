mod app;
mod board;
mod command;
mod config;
mod consts;
mod input;
mod pacer;
mod sim;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use rand::{rngs::StdRng, SeedableRng};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: tilesnake [<options>]

Play Snake on a grid of tiles in the terminal

Options:
  -c, --config <FILE>     Read configuration from <FILE>
  -l, --log-file <FILE>   Write log messages to <FILE>
      --seed <INT>        Seed the random placement of food
  -h, --help              Show this help message and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    seed: Option<u64>,
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        if let Some(path) = self.log_file.as_deref().or(config.files.log_file.as_deref()) {
            init_logging(path)?;
        }
        log::info!(
            "{} {} starting on a {}x{} grid",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            config.grid.width,
            config.grid.height
        );
        let terminal = ratatui::init();
        let r = match self.seed {
            Some(seed) => {
                log::info!("Using RNG seed {seed}");
                App::new(config, StdRng::seed_from_u64(seed)).run(terminal)
            }
            None => App::new(config, rand::rng()).run(terminal),
        };
        ratatui::restore();
        r.context("terminal I/O failed")
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(path) = self.config.as_deref() {
            Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        } else if let Some(path) = Config::default_path() {
            Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        file,
    )
    .context("failed to initialize logger")
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run(args)) => match args.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e)
                if e.downcast_ref::<std::io::Error>()
                    .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
            {
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("tilesnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("tilesnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[rstest]
    #[case(&[], Cli::Run(Arguments::default()))]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--seed", "42", "-h"], Cli::Help)]
    #[case(
        &["-c", "snake.toml", "--log-file=snake.log", "--seed", "42"],
        Cli::Run(Arguments {
            config: Some(PathBuf::from("snake.toml")),
            log_file: Some(PathBuf::from("snake.log")),
            seed: Some(42),
        })
    )]
    fn test_parse(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).unwrap(), cli);
    }

    #[rstest]
    #[case(&["--seed", "lots"])]
    #[case(&["--seed"])]
    #[case(&["--speed", "9"])]
    #[case(&["extra"])]
    fn test_parse_error(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn load_explicit_config() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("tilesnake.toml");
        fs_err::write(&path, "[grid]\nwidth = 9\nheight = 7\n").unwrap();
        let args = Arguments {
            config: Some(path),
            ..Arguments::default()
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.grid.width, 9);
        assert_eq!(config.grid.height, 7);
    }

    #[test]
    fn load_explicit_missing_config() {
        let tmpdir = tempfile::tempdir().unwrap();
        let args = Arguments {
            config: Some(tmpdir.path().join("nope.toml")),
            ..Arguments::default()
        };
        assert!(args.load_config().is_err());
    }
}
