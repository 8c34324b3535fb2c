//! Batch progress reporting: one bar across the batch rows, with per-puzzle
//! status lines printed above it.

use std::rc::Rc;

use indicatif::ProgressBar;
use indicatif::ProgressStyle;

pub fn with_progress_bar<T, F: FnOnce(Rc<ProgressBar>) -> T>(num_rows: u64, f: F) -> T {
    let bar = Rc::new(ProgressBar::new(num_rows));
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar:cyan/blue} {percent}%\n{wide_msg}"),
    );
    bar.enable_steady_tick(1000);
    bar.set_position(0);
    bar.set_message("Loading workbook...");

    let result = f(bar.clone());

    bar.set_style(ProgressStyle::default_bar().template("[{elapsed_precise}] {msg}"));
    bar.finish();

    result
}

pub fn print_above_progress_bar(output: &str) {
    if output.is_empty() {
        return;
    }

    if atty::is(atty::Stream::Stdout) {
        // We only need to worry about the bar if stdout is going to a tty.

        // Erase the bar (two lines).
        eprint!("\x1b[A\x1b[2K"); // Erase line above.
        eprint!("\x1b[A\x1b[2K"); // Erase line above.
        eprint!("\r"); // Bring cursor to start.

        // Write the output.
        println!("{}", output);

        // Write another newline so that the output is not cleared by the bar.
        eprintln!();
        eprintln!();
    } else {
        println!("{}", output);
    }
}
