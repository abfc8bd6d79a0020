use clap::{Parser, Subcommand};
use rackmark::{ErrorKind, LabelError, LabelPipelineBuilder, LocationTable};
use std::path::PathBuf;
use std::process::ExitCode;

/// Print warehouse location labels: two per landscape A4 page.
#[derive(Parser, Debug)]
#[command(name = "rackmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every code in the `Ubicaciones` column of a CSV or spreadsheet.
    Generate {
        /// Input table (.csv, .xlsx, .xlsm, .xls or .ods).
        input: PathBuf,
        #[arg(short, long, default_value = "labels.pdf")]
        output: PathBuf,
        /// Directory the font file is loaded from.
        #[arg(long, default_value = "static")]
        resources: PathBuf,
        /// Font file inside the resource directory.
        #[arg(long)]
        font: Option<String>,
        /// Do not search installed fonts when the font file is missing.
        #[arg(long)]
        no_system_fonts: bool,
        /// JSON file overriding sheet geometry and other settings.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write an empty input table with the expected header.
    Template {
        #[arg(short, long, default_value = "plantilla_ubicaciones.csv")]
        output: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), LabelError> {
    match cli.command {
        Command::Generate {
            input,
            output,
            resources,
            font,
            no_system_fonts,
            config,
        } => {
            let mut builder = LabelPipelineBuilder::new()
                .with_resource_dir(&resources)
                .with_system_fonts(!no_system_fonts);
            if let Some(config) = config {
                builder = builder.with_config_file(config)?;
            }
            if let Some(font) = font {
                builder = builder.with_font_resource(font);
            }
            let pipeline = builder.build()?;

            let table = LocationTable::from_path(&input)?;
            let document = pipeline.generate_to_file(&table.rows(), &output)?;
            for notice in &document.notices {
                eprintln!("warning: {}", notice);
            }
            println!(
                "Wrote {} labels on {} pages to {}",
                document.label_count,
                document.page_count,
                output.display()
            );
        }
        Command::Template { output } => {
            rackmark::write_template_csv(&output)?;
            println!("Wrote template to {}", output.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(match err.kind() {
                ErrorKind::InputShape | ErrorKind::EmptyInput => 2,
                ErrorKind::Encoding => 3,
                ErrorKind::Config => 4,
                ErrorKind::Render | ErrorKind::Io => 1,
            })
        }
    }
}
