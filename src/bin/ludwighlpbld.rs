//! Converts a sequential help source into an indexed help file.
//!
//! Usage: `ludwighlpbld <source> <indexed>`

use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source, target] = args.as_slice() else {
        eprintln!("usage: ludwighlpbld <source> <indexed>");
        std::process::exit(1);
    };
    if let Err(error) = run(PathBuf::from(source), PathBuf::from(target)) {
        eprintln!("ludwighlpbld: {error}");
        std::process::exit(1);
    }
}

fn run(source: PathBuf, target: PathBuf) -> std::io::Result<()> {
    let input = std::fs::read(&source)?;
    let built = ludwig::help::build(&input);
    for warning in &built.warnings {
        eprintln!("{}: {}", source.display(), warning);
    }
    std::fs::write(&target, &built.output)?;
    println!(
        "{} sections, {} contents lines",
        built.index.len(),
        built.contents_lines
    );
    Ok(())
}
