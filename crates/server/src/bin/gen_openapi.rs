//! Export the OpenAPI document for the REST surface.
//!
//! `gen-openapi [OUTPUT]` writes to OUTPUT, or to stdout when no path is given.

use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = ApiDoc::openapi().to_pretty_json()?;
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, doc)?;
            eprintln!("OpenAPI document written to {path}");
        }
        None => println!("{doc}"),
    }
    Ok(())
}
