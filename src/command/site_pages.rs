use anyhow::Result;
use betasdk::api::{BetaService, GraphConfig};
use graph_serialization::serialize_content;
use serde_json::Value;

use crate::argsets::SitePagesArgs;

/// Fetches pages of a site and prints them as a JSON array.
pub fn site_pages(args: SitePagesArgs) -> Result<()> {
    let service = BetaService::new(GraphConfig::from_env()?)?;
    let pages = if args.page_ids.is_empty() {
        service.list_site_pages(&args.site_id)?
    } else {
        service.get_site_pages(&args.site_id, &args.page_ids)?
    };
    log::info!("Fetched {} pages of site {}", pages.len(), args.site_id);

    let mut output = Vec::with_capacity(pages.len());
    for page in &pages {
        output.push(serde_json::from_slice::<Value>(&serialize_content(page)?)?);
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
