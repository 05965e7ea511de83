//! vmspec CLI
//!
//! Resolves VM launch options and disk descriptors into a launch plan.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use vmspec_core::{EnvSource, LaunchPlan, ValueResolver};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let plan = resolve_plan(&ValueResolver::new(), &cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan(&plan));
    }
    Ok(())
}

fn resolve_plan<E: EnvSource>(resolver: &ValueResolver<E>, cli: &Cli) -> Result<LaunchPlan> {
    if cli.name.is_empty() {
        return Err(CliError::user("image name must not be empty"));
    }

    let plan = LaunchPlan::resolve(resolver, &cli.launch_flags())?;

    // The image builder needs a backing file for every disk
    if let Some(i) = plan.disks.iter().position(|d| d.path.is_empty()) {
        return Err(CliError::user(format!(
            "disk {} has no file: use PATH or file=PATH",
            i
        )));
    }
    Ok(plan)
}

fn render_plan(plan: &LaunchPlan) -> String {
    let ports = if plan.vsock_ports.is_empty() {
        "none".dimmed().to_string()
    } else {
        plan.vsock_ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Launch plan for".bold(), plan.name.cyan()));
    out.push_str(&format!("  cpus:        {}\n", plan.cpus));
    out.push_str(&format!("  mem:         {} MB\n", plan.mem));
    out.push_str(&format!("  accel:       {}\n", plan.accel));
    out.push_str(&format!("  networking:  {}\n", plan.networking));
    out.push_str(&format!("  state:       {}\n", plan.state_dir));
    out.push_str(&format!("  detached:    {}\n", plan.detached));
    out.push_str(&format!("  uefi:        {}\n", plan.uefi));
    out.push_str(&format!("  vsock ports: {}\n", ports));

    if plan.disks.is_empty() {
        out.push_str(&format!("  disks:       {}\n", "none".dimmed()));
    } else {
        out.push_str("  disks:\n");
        for (i, disk) in plan.disks.iter().enumerate() {
            let size = if disk.size == 0 {
                "default size".to_string()
            } else {
                format!("{} MB", disk.size)
            };
            let format = if disk.format.is_empty() {
                "auto"
            } else {
                disk.format.as_str()
            };
            out.push_str(&format!("    [{}] {} ({}, {})\n", i, disk.path.green(), size, format));
        }
    }
    out
}
