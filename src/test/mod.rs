pub mod utils;

mod cache;
mod studio;
