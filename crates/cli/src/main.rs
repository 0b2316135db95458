#![deny(unsafe_code)]
//! CLI binary for the backdrop background generator.
//!
//! Subcommands:
//! - `generate` — render the fixed wallpaper set into a directory
//! - `render <style>` — render a single style to one PNG
//! - `list` — print available styles and palette roles

mod error;

use backdrop_core::{Canvas, Palette, Rgb};
use backdrop_styles::batch;
use backdrop_styles::{snapshot, Style, StyleKind};
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "backdrop", about = "Procedural background image generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the fixed wallpaper set into an output directory.
    Generate {
        /// Output directory, created if absent.
        #[arg(short, long, default_value = "wallpapers")]
        out_dir: PathBuf,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = batch::DEFAULT_WIDTH)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = batch::DEFAULT_HEIGHT)]
        height: usize,
    },
    /// Render a single style and write one PNG.
    Render {
        /// Style name (e.g. "waves").
        style: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = batch::DEFAULT_WIDTH)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = batch::DEFAULT_HEIGHT)]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Style parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available styles and palette roles.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let palette = Palette::neutral();
    match cli.command {
        Command::List => {
            let styles = StyleKind::list_styles();
            let roles = Palette::list_roles();
            if cli.json {
                let info = serde_json::json!({
                    "styles": styles,
                    "palette_roles": roles,
                    "palette": palette,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Styles:");
                for name in styles {
                    println!("  {name}");
                }
                println!("Palette roles:");
                println!("  {}", roles.join(", "));
            }
        }
        Command::Render {
            style,
            width,
            height,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let style = StyleKind::from_name(&style, &palette, &params)?;
            let mut canvas = Canvas::new(width, height, Rgb::new(0, 0, 0))?;
            style.paint(&mut canvas);
            snapshot::write_png(&canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "style": style.name(),
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({width}x{height}) -> {}",
                    style.name(),
                    output.display()
                );
            }
        }
        Command::Generate {
            out_dir,
            width,
            height,
        } => {
            // Directory creation failure is fatal: nothing can be written.
            batch::ensure_output_dir(&out_dir)?;

            let jobs = batch::wallpaper_set(&palette);
            let total = jobs.len();
            let mut results = Vec::with_capacity(total);
            let mut failed = 0usize;

            for job in &jobs {
                match batch::render_job(job, width, height, &out_dir) {
                    Ok(path) => {
                        if !cli.json {
                            println!("wrote {}: {}", job.label, path.display());
                        }
                        results.push(serde_json::json!({
                            "file": format!("{}.png", job.file_stem),
                            "label": job.label,
                            "ok": true,
                        }));
                    }
                    // A single failed file does not stop the remaining jobs.
                    Err(e) => {
                        failed += 1;
                        if !cli.json {
                            eprintln!("error: {}.png: {e}", job.file_stem);
                        }
                        results.push(serde_json::json!({
                            "file": format!("{}.png", job.file_stem),
                            "label": job.label,
                            "ok": false,
                            "error": e.to_string(),
                        }));
                    }
                }
            }

            if cli.json {
                let report = serde_json::json!({
                    "out_dir": out_dir.display().to_string(),
                    "width": width,
                    "height": height,
                    "generated": total - failed,
                    "failed": failed,
                    "files": results,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "generated {} of {total} wallpapers ({width}x{height}) in {}",
                    total - failed,
                    out_dir.display()
                );
            }

            if failed > 0 {
                return Err(CliError::Io(format!(
                    "{failed} of {total} wallpapers failed to write"
                )));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
