pub mod home;

pub use home::{browser_panel, home_page};
