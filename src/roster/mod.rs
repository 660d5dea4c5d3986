pub mod champion;
pub mod filter;
pub mod ranking;
pub mod selector;
pub mod sort;
pub mod view;
