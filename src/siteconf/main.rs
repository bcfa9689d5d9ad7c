use colored::Colorize;
use siteconf::config::Settings;
use siteconf::error::{Result, SiteconfError};
use siteconf::generate::{generate, Report};
use siteconf::paths::{display_relative, SitePaths, OUTPUT_FILENAME};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;

fn main() {
    let settings = Settings::from_env();
    init_logging(&settings);

    if let Err(e) = run(&settings) {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<()> {
    let raw = args::parse_from(std::env::args_os())?;
    let params = raw.validate()?;

    let paths = SitePaths::resolve(settings)?;
    debug!(
        root = %paths.root.display(),
        template = %paths.template.display(),
        output = %paths.output.display(),
        "resolved site paths"
    );

    let report = generate(&params, &paths)?;
    print_report(&report);
    Ok(())
}

fn init_logging(settings: &Settings) {
    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn print_error(e: &SiteconfError) {
    eprintln!("{} {}", "Error:".red(), e);
    if matches!(
        e,
        SiteconfError::MissingParameters(_) | SiteconfError::Usage(_)
    ) {
        eprintln!();
        eprintln!("{}", args::USAGE);
    }
}

fn print_report(report: &Report) {
    let cwd = std::env::current_dir().unwrap_or_default();
    let data = &report.data;

    println!(
        "{}",
        format!("✓ Successfully generated {}", OUTPUT_FILENAME).green()
    );
    println!(
        "  Template: {}",
        display_relative(&report.template, &cwd).display()
    );
    println!(
        "  Output: {}",
        display_relative(&report.output, &cwd).display()
    );
    println!("  Site: {} ({})", data.site_name, data.site_id);
    println!("  URL: {}", data.site_url);
    println!("  Repo: {}", data.repo_name);
}
