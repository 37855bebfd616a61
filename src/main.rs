use clap::Parser;
use clap::error::ErrorKind;
use import_image::import::{self, ImportOutcome};
use import_image::imaging::RustBackend;
use import_image::prompt::{InquirePrompter, LinePrompter, Prompter};
use import_image::{config, output};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Built once per process; the leak lasts as long as clap's command.
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "import-image")]
#[command(about = "Import an image into a blog post as WebP and print the embed snippet")]
#[command(long_about = "\
Import an image into a blog post as WebP and print the embed snippet

The image is checked, then you pick the post, alt text and snippet type.
Images wider than images.max_width (750px by default) are downsampled.

Layout (defaults, relative to --root):

  src/content/blog/
  ├── fail2ban.mdx                   # Post (slug = file stem)
  └── ssh-server.md
  public/images/blog/
  └── fail2ban/
      └── jail-config.webp           # ← import-image ~/Downloads/Jail_Config.png

Snippet types:
  simple   ![alt](/images/blog/<post>/<image>.webp)
  figure   <Figure src=\"...\" alt=\"...\" caption=\"...\" />   (.mdx posts only)

Run 'import-image --gen-config' to print a documented blog-assets.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Image to import
    #[arg(required_unless_present = "gen_config")]
    source: Option<PathBuf>,

    /// Project root (holds blog-assets.toml, content and public directories)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Print a stock blog-assets.toml with all options documented
    #[arg(long)]
    gen_config: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are not failures; usage errors exit 1.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = e.print();
            return code;
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let Some(source) = cli.source else {
        return Err("missing source image".into());
    };

    let assets_config = config::load_config(&cli.root)?;

    // Terminals get inquire prompts; piped input is read line by line.
    if std::io::stdin().is_terminal() {
        import_with(&assets_config, &cli.root, &source, &mut InquirePrompter::new())
    } else {
        import_with(&assets_config, &cli.root, &source, &mut LinePrompter::stdio())
    }
}

fn import_with(
    assets_config: &config::AssetsConfig,
    root: &Path,
    source: &Path,
    prompter: &mut impl Prompter,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = RustBackend::new();
    match import::run(assets_config, root, source, &backend, prompter)? {
        ImportOutcome::Completed(report) => output::print_import_report(&report),
        ImportOutcome::Cancelled => output::print_cancelled(),
    }
    Ok(())
}
