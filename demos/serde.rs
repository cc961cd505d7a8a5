use miette::{Context, Result};
use serde::Deserialize;
use std::env::args;
use table_conf::{from_document, Document};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Service {
    server: Server,
    database: Option<Database>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Server {
    host: String,
    port: u16,
    #[serde(default)]
    secure: bool,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Database {
    url: String,
    pool: Option<u8>,
}

fn main() -> Result<()> {
    let path = args().nth(1).expect("no path provided");
    let document = Document::load(path).wrap_err("failed to read input")?;
    let service: Service = from_document(&document).wrap_err("failed to read service config")?;
    dbg!(service);
    Ok(())
}
