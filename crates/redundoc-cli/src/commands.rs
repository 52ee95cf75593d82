use anyhow::Result;
use comfy_table::Table;
use redundoc_check::{Inspector, Settings};
use redundoc_cli::report::{CheckOptions, CheckReport, check_paths};

use crate::cli::CheckArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_check(args: &CheckArgs, settings: &Settings) -> Result<CheckReport> {
    let inspector = Inspector::new(settings);
    let options = CheckOptions {
        extensions: args.extensions.clone(),
        fix: args.fix,
    };
    check_paths(&args.paths, &inspector, &options)
}

pub fn run_stop_words(settings: &Settings) {
    let config = settings.normalization_config();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stop word")]);
    apply_table_style(&mut table);
    for word in config.stop_words() {
        table.add_row(vec![word]);
    }
    println!("{table}");
}

pub fn run_normalize(text: &str, settings: &Settings) {
    println!("{}", settings.judge().normalizer().normalize(text));
}

/// Prints the similarity and whether `left` would be flagged as restating
/// `right`. Returns true when it would.
pub fn run_compare(left: &str, right: &str, settings: &Settings) -> bool {
    let judge = settings.judge();
    let similarity = judge.similarity(left, right);
    let flagged = judge.threshold().is_too_similar(&similarity);
    println!("{similarity}");
    println!("{}", similarity.explain());
    println!(
        "threshold {:.2}: {}",
        judge.threshold().value(),
        if flagged { "too similar" } else { "acceptable" }
    );
    flagged
}
