mod coerce;
mod error;
mod extract;
mod field_value;
mod kind;
mod mapping;
mod record;
mod resolve;
mod tags;
mod util;
mod value;
mod zero;

pub use ::anyhow::Context;
pub use coerce::*;
pub use error::*;
pub use extract::*;
pub use field_value::*;
pub use kind::*;
pub use mapping::*;
pub use record::*;
pub use resolve::*;
pub use tags::*;
pub use util::*;
pub use value::*;
pub use zero::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
