use clap::{Parser, Subcommand};
use gallerist::{config, generate, output, pipeline};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gallerist")]
#[command(about = "Generate a static photo gallery page with thumbnails")]
#[command(long_about = "\
Generate a static photo gallery page with thumbnails

Every image in the source directory becomes one tile on a single HTML page.
Thumbnails are scaled to fit a square box and, by default, center-cropped.

Gallery structure:

  gallery/
  ├── gallerist.toml        # Optional config (see gen-config)
  ├── template.html         # Page template with {{title}}, {{count}}, {{gallery}}
  ├── index.html            # Generated page
  └── images/
      ├── fulls/            # Source photos (linked from the page)
      │   ├── 010-pier.jpg
      │   └── 020-dunes.jpg
      └── thumbs/           # Generated thumbnails, same file names

Ordering:
  insertion   file name order (default)
  numeric     prefix before the first '-' as a number, largest first

Run 'gallerist gen-config' to generate a documented gallerist.toml and
'gallerist gen-template' for the stock template.")]
#[command(version)]
struct Cli {
    /// Gallery root; configured paths are resolved against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (default: <root>/gallerist.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write thumbnails and render the gallery page
    Build {
        /// Skip thumbnail generation; link to existing thumbnails
        #[arg(long)]
        no_resize: bool,
    },
    /// Validate images and ordering without writing anything
    Check,
    /// Print the ordered image records as JSON
    Scan,
    /// Print a stock gallerist.toml with all options documented
    GenConfig,
    /// Print the stock page template
    GenTemplate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { no_resize } => {
            let mut gallery_config = load_config(&cli.root, cli.config.as_deref())?;
            if no_resize {
                gallery_config.thumbnails.resize = false;
            }

            println!("==> Building {}", cli.root.display());
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_process_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = pipeline::build(&cli.root, &gallery_config, Some(tx));
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;
            let report = result?;

            output::print_records(&report.records);
            output::print_build_summary(&report);
        }
        Command::Check => {
            let gallery_config = load_config(&cli.root, cli.config.as_deref())?;
            println!("==> Checking {}", cli.root.display());
            let records = pipeline::check(&cli.root, &gallery_config)?;
            output::print_records(&records);
            println!("==> Gallery is valid");
        }
        Command::Scan => {
            let gallery_config = load_config(&cli.root, cli.config.as_deref())?;
            let records = pipeline::check(&cli.root, &gallery_config)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenTemplate => {
            print!("{}", generate::stock_template());
        }
    }

    Ok(())
}

/// Load the explicit `--config` file, or `gallerist.toml` from the root.
fn load_config(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<config::GalleryConfig, config::ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(root),
    }
}
