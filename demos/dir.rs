use miette::{Context, Result};
use std::env::args;
use std::path::Path;
use table_conf::Document;
use walkdir::WalkDir;

fn main() -> Result<()> {
    let mut success = 0;
    let mut warned = 0;
    let mut err = Vec::new();
    let dir = args().nth(1).expect("no path provided");
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            name.ends_with(".conf") || name.ends_with(".toml")
        })
    {
        match try_parse(entry.path()) {
            Ok(document) => {
                success += 1;
                if !document.warnings().is_empty() {
                    warned += 1;
                }
                println!(
                    "{}: {} tables, {} warnings",
                    entry.path().display(),
                    document.tables().len(),
                    document.warnings().len()
                );
            }
            Err(e) => err.push(e),
        }
    }

    println!("successfully parsed {success} files, {warned} with warnings");
    println!("failed to read {} files", err.len());
    for e in err {
        println!("{:?}", e);
    }

    Ok(())
}

fn try_parse(path: &Path) -> Result<Document> {
    Document::load(path).wrap_err_with(|| format!("failed to parse {}", path.display()))
}
