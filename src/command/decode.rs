use std::fs;

use anyhow::{Context, Result};
use betasdk::models::EntityKind;
use graph_serialization::{create_from_bytes, serialize_content};
use serde_json::Value;

use crate::argsets::DecodeArgs;

/// Parses a Graph payload from a file and prints it back as normalised JSON.
pub fn decode(args: DecodeArgs) -> Result<()> {
    let bytes = fs::read(&args.path)
        .with_context(|| format!("Unable to read {}", args.path.display()))?;
    let entity = create_from_bytes(&bytes, EntityKind::create_from_discriminator_value)
        .with_context(|| format!("Unable to decode {}", args.path.display()))?;
    log::info!(
        "Decoded {} as {}",
        args.path.display(),
        entity.odata_type().unwrap_or("an entity of unknown type")
    );

    let normalised: Value = serde_json::from_slice(&serialize_content(&entity)?)?;
    println!("{}", serde_json::to_string_pretty(&normalised)?);
    Ok(())
}
