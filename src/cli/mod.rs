pub mod convert;
pub mod list;
pub mod rate;
pub mod ui;
