mod args;
mod types;

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use ansi_term::Colour;
use args::{InputArgs, OutputArgs, ReportArgs, ShellArgs};
use clap::Parser;

use sitepack::{BuildOptions, OutputAsset, Packer};
use sitepack_utils::indexmap::FxIndexMap;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  shell: ShellArgs,

  #[clap(flatten)]
  report: ReportArgs,
}

fn load_env_file(path: &Path) -> anyhow::Result<FxIndexMap<String, String>> {
  let iter = match dotenvy::from_path_iter(path) {
    Ok(iter) => iter,
    // A missing env file is a valid, empty context.
    Err(error) if error.not_found() => return Ok(FxIndexMap::default()),
    Err(error) => return Err(error.into()),
  };

  let mut env_vars = FxIndexMap::default();
  for item in iter {
    let (key, value) = item?;
    env_vars.insert(key, value);
  }
  Ok(env_vars)
}

fn print_emitted_assets(dir: &str, assets: &[OutputAsset]) {
  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for asset in assets {
    let size = format!("{:.2}", asset.content.len() as f64 / 1024.0);
    println!(
      "{}{} {}{} kB",
      dim.paint(format!("{dir}/")),
      color.paint(asset.filename.as_str()),
      dim.paint("size: "),
      size
    );
  }
}

fn main() -> ExitCode {
  let args = Commands::parse();

  let start = Instant::now();

  let env_vars = match load_env_file(&args.input.env_file) {
    Ok(env_vars) => env_vars,
    Err(error) => {
      println!("{} {}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };

  let mode = args.input.mode.or_else(|| std::env::var("ENV").ok());

  let packer = Packer::new(BuildOptions {
    mode,
    env_vars: Some(env_vars),
    dir: args.output.dir,
    filenames: args.output.filenames.map(Into::into),
    title: args.shell.title,
    shell: args.shell.shell.map(Into::into),
    description: args.shell.description,
    keywords: args.shell.keywords,
    author: args.shell.author,
    dev_port: args.output.port,
  });

  if args.report.print_plan {
    match serde_json::to_string_pretty(packer.plan()) {
      Ok(plan) => println!("{plan}"),
      Err(error) => println!("{} {}", Colour::Red.paint("Error:"), error),
    }
  }

  let bundle = match args.output.bundle.map(std::fs::read).transpose() {
    Ok(bundle) => bundle,
    Err(error) => {
      println!("{} failed to read bundle: {}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };

  match packer.write(bundle.as_deref()) {
    Ok(output) => {
      if !args.report.silent {
        // Print warnings
        for warning in &output.warnings {
          println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }

        // Print emitted assets
        if !output.assets.is_empty() {
          print_emitted_assets(&packer.plan().output.dir, &output.assets);
        }
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in errors.errors() {
        println!("{} {}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
