//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::query::get_records;
use crate::redirect;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let records = ContentLoader::new(folio).load_records()?;
            let ordered = get_records(&records, None)?;
            println!("Posts ({}):", ordered.len());
            for record in ordered {
                println!(
                    "  {} - {} {} [{}]",
                    record.date.format("%Y-%m-%d"),
                    record.title,
                    record.path,
                    record.source
                );
            }
        }
        "redirect" | "redirects" => {
            let redirects = redirect::resolve_all(&folio.config);
            println!("Redirects ({}):", redirects.len());
            for r in redirects {
                println!("  {} -> {}", r.route, r.location);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, redirect",
                content_type
            );
        }
    }

    Ok(())
}
