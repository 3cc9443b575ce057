use std::path::PathBuf;

pub struct DecodeArgs {
    pub path: PathBuf,
}

pub struct SitePagesArgs {
    pub site_id: String,
    /// All pages of the site when empty.
    pub page_ids: Vec<String>,
}
