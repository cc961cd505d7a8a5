use miette::{Context, Result};
use std::env::args;
use table_conf::Document;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = args().nth(1).expect("no path provided");
    let document = Document::load(&path).wrap_err("failed to load input")?;

    for (name, table) in document.iter() {
        println!("[{name}]");
        for (key, value) in table.iter() {
            println!("{key} = {:?}", value.as_str());
        }
    }

    for warning in document.warnings() {
        eprintln!("{:?}", miette::Report::new(warning.clone()));
    }
    Ok(())
}
