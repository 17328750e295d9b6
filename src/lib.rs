pub mod analyzers;
pub mod dataset;
pub mod filters;
pub mod output;
pub mod pager;
pub mod prompt;
pub mod session;

#[cfg(test)]
mod test_utils;
