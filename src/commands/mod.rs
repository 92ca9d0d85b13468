pub mod otc_form;

pub use otc_form::*;
