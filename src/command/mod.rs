mod decode;
mod site_pages;

pub use decode::decode;
pub use site_pages::site_pages;
