pub use articles::*;
pub use db::*;

mod articles;
mod db;
