pub mod html;
pub mod static_files;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_response, no_content, text_response};
pub use static_files::static_file;
