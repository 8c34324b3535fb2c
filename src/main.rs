use std::path::PathBuf;
use std::process;

use clap::Parser;

use picture_sudoku::batch::{self, BatchConfig, BatchPolicy};
use picture_sudoku::error::Result;
use picture_sudoku::grid::GivenPolicy;
use picture_sudoku::io::document::TextDocument;
use picture_sudoku::io::fetch::BlockingFetcher;
use picture_sudoku::io::input;
use picture_sudoku::io::progress;
use picture_sudoku::io::workbook::Workbook;
use picture_sudoku::render::RenderConfig;
use picture_sudoku::source::DataSource;

/// Generates picture-sudoku puzzle booklets from a workbook of image-coded
/// grids.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    /// Workbook JSON file, or `-` for stdin.
    workbook: String,

    /// Booklet output file.
    #[clap(short, long, default_value = "booklet.txt")]
    output: PathBuf,

    /// Where to write the workbook with the marked template copies. Defaults
    /// to leaving the input untouched.
    #[clap(long)]
    save_workbook: Option<PathBuf>,

    /// Column of the first image formula in each batch row.
    #[clap(long, default_value_t = 4)]
    column_offset: usize,

    /// Which subset of grid values the puzzle shows.
    #[clap(long, arg_enum, default_value = "given")]
    given: GivenPolicy,

    /// What to do with a batch row that has no puzzle name.
    #[clap(long, arg_enum, default_value = "stop")]
    on_unnamed: BatchPolicy,

    /// Use the "may only contain" section titles instead of "must not
    /// contain".
    #[clap(long)]
    inclusive_titles: bool,

    /// Name of the grid template sheet to copy per puzzle.
    #[clap(long, default_value = "Template")]
    template: String,

    /// First batch row (0-indexed) to process.
    #[clap(long, default_value_t = 0)]
    start_row: usize,

    #[clap(long, default_value_t = 60)]
    image_width: u32,

    #[clap(long, default_value_t = 60)]
    image_height: u32,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let json = input::load(&args.workbook)
        .map_err(|e| picture_sudoku::error::Error::collaborator(&args.workbook, e))?;
    let mut workbook = Workbook::from_json(&json)?;

    let config = BatchConfig {
        policy: args.on_unnamed,
        column_offset: args.column_offset,
        given: args.given,
        render: RenderConfig {
            inclusive_titles: args.inclusive_titles,
            image_width: args.image_width,
            image_height: args.image_height,
        },
        template: args.template.clone(),
        start_row: args.start_row,
    };

    let fetcher = BlockingFetcher::new();
    let mut document = TextDocument::new();

    let num_rows = workbook.num_rows().saturating_sub(args.start_row);
    let outcome = progress::with_progress_bar(num_rows as u64, |bar| {
        let result = batch::run_batch(&mut workbook, &mut document, &fetcher, &config, |status| {
            progress::print_above_progress_bar(status);
            bar.inc(1);
        });
        bar.set_message(match &result {
            Ok(outcome) => format!("Rendered {} booklet(s).", outcome.rendered.len()),
            Err(_) => "Failed.".to_string(),
        });
        result
    })?;

    document.save(&args.output)?;
    if let Some(path) = &args.save_workbook {
        let json = workbook.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| picture_sudoku::error::Error::collaborator("workbook save", e))?;
    }

    println!(
        "Wrote {} booklet(s) to {} ({} row(s) skipped).",
        outcome.rendered.len(),
        args.output.display(),
        outcome.skipped
    );

    Ok(())
}
