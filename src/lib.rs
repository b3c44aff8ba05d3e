pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod list;
pub mod logging;
pub mod pointer;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
