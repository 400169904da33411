pub mod snackbar;

pub use snackbar::snackbar;
