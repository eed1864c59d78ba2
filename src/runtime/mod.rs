//! Runtime dispatch for boosted functions

mod dispatcher;
mod value;

pub use dispatcher::{apply, apply_with_config, Boosted};
pub use value::Value;
