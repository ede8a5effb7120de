use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use smartsine::clipboard::{SystemClipboard, copy_once};
use smartsine::config::{Config, Overrides};
use smartsine::format::{self, OutputStyle};
use smartsine::plot::render_plot;
use smartsine::session::Session;
use smartsine::ui::{self, interactive, print_banner};
use smartsine::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a table once and print it
    Generate {
        #[command(flatten)]
        table: TableArgs,
        /// Values per output line
        #[arg(short = 'k', long)]
        per_line: Option<usize>,
        #[arg(long, value_enum)]
        style: Option<OutputStyle>,
        /// Array identifier for C output
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        no_plot: bool,
        /// Also copy the text to the clipboard
        #[arg(long)]
        copy: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Edit, calculate and copy from a prompt menu
    Interactive {
        #[command(flatten)]
        table: TableArgs,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Overrides for the parameter row.
#[derive(Args)]
struct TableArgs {
    /// Number of entries (fractions are truncated)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    entries: Option<f64>,
    /// Amplitude from the centre point
    #[arg(short, long, allow_negative_numbers = true)]
    amplitude: Option<f64>,
    /// DC offset
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<f64>,
    /// Start angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,
    /// End angle in degrees, not sampled
    #[arg(long, allow_negative_numbers = true)]
    end: Option<f64>,
}

impl TableArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            entries: self.entries,
            amplitude: self.amplitude,
            offset: self.offset,
            angle_start_deg: self.start,
            angle_end_deg: self.end,
            ..Overrides::default()
        }
    }
}

impl Commands {
    fn overrides(&self) -> Overrides {
        match self {
            Commands::Generate {
                table,
                per_line,
                style,
                name,
                no_plot,
                ..
            } => Overrides {
                values_per_line: *per_line,
                style: *style,
                array_name: name.clone(),
                no_plot: *no_plot,
                ..table.overrides()
            },
            Commands::Interactive { table, .. } => table.overrides(),
        }
    }

    fn config_path(&self) -> Option<&Path> {
        match self {
            Commands::Generate { config, .. } | Commands::Interactive { config, .. } => {
                config.as_deref()
            }
        }
    }
}

/// Config file (or defaults) with the command-line flags applied on top.
fn resolve_config(command: &Commands) -> anyhow::Result<Config> {
    let config = Config::load_or_default(command.config_path())
        .context("failed to load config")?
        .with_overrides(&command.overrides())
        .context("invalid parameters")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let cfg = resolve_config(&cli.command)?;

    match cli.command {
        Commands::Generate { copy, output, .. } => generate(&cfg, copy, output),
        Commands::Interactive { .. } => {
            print_banner();
            let mut session = Session::new(&cfg);
            interactive::run(&mut session, &cfg.plot)?;
            Ok(())
        }
    }
}

fn generate(cfg: &Config, copy: bool, output: Option<PathBuf>) -> anyhow::Result<()> {
    let table = cfg.params.generate();
    let text = format::render(&table, cfg.style, cfg.values_per_line, &cfg.array_name)
        .context("failed to format table")?;
    tracing::info!(
        "Generated {} entries ({:?} style, {} per line)",
        table.len(),
        cfg.style,
        cfg.values_per_line
    );

    match &output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote table to {}", path.display());
        }
        None => {
            print!("{text}");
            if !text.is_empty() && !text.ends_with('\n') {
                println!();
            }
        }
    }

    // Plot only on a terminal; piped stdout carries the table alone.
    if cfg.plot.enabled && io::stdout().is_terminal() {
        println!("{}", ui::params_table(&cfg.params));
        render_plot(&table.values, &cfg.plot);
    }

    if copy {
        let mut clipboard = SystemClipboard::new()?;
        copy_once(&mut clipboard, &text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use smartsine::{SineError, TableParams};

    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("smartsine").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn sine_error(err: &anyhow::Error) -> &SineError {
        err.downcast_ref::<SineError>()
            .expect("error should carry a SineError")
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "params": {{ "entries": 16, "amplitude": 10, "offset": 1,
                              "angle_start_deg": 5, "angle_end_deg": 50 }},
                 "values_per_line": 4, "style": "json", "array_name": "base" }}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let untouched = resolve_config(&parse(&["generate", "-c", path])).unwrap();
        assert_eq!(untouched.params.entries, 16);
        assert_eq!(untouched.style, OutputStyle::Json);

        let cfg = resolve_config(&parse(&[
            "generate", "-c", path, "-n", "8.9", "-a", "-200", "--offset", "-3",
            "--start", "-90", "--end", "270", "-k", "2", "--style", "c", "--name",
            "lut", "--no-plot",
        ]))
        .unwrap();
        assert_eq!(
            cfg.params,
            TableParams {
                entries: 8,
                amplitude: -200.0,
                offset: -3.0,
                angle_start_deg: -90.0,
                angle_end_deg: 270.0,
            }
        );
        assert_eq!(cfg.values_per_line, 2);
        assert_eq!(cfg.style, OutputStyle::C);
        assert_eq!(cfg.array_name, "lut");
        assert!(!cfg.plot.enabled);

        let interactive =
            resolve_config(&parse(&["interactive", "-c", path, "--end", "360"])).unwrap();
        assert_eq!(interactive.params.angle_end_deg, 360.0);
        assert_eq!(interactive.params.entries, 16);
    }

    #[test]
    fn test_bad_flag_values_rejected() {
        let err = resolve_config(&parse(&["generate", "-a", "inf"])).unwrap_err();
        assert!(matches!(
            sine_error(&err),
            SineError::NonFinite { field: "amplitude", .. }
        ));

        let err = resolve_config(&parse(&["generate", "-n", "5000000"])).unwrap_err();
        assert!(matches!(sine_error(&err), SineError::TooManyEntries(_)));

        let err = resolve_config(&parse(&["generate", "--offset", "1e19"])).unwrap_err();
        assert!(matches!(sine_error(&err), SineError::OutOfRange { .. }));
    }

    #[test]
    fn test_zero_values_per_line_rejected() {
        let err = resolve_config(&parse(&["generate", "-k", "0"])).unwrap_err();
        assert!(matches!(sine_error(&err), SineError::ZeroValuesPerLine));
    }
}
