pub use article::*;
pub use body::*;

mod article;
mod body;
