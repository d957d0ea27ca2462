pub mod invoke;
pub mod resolver;
pub mod weather;

pub use crate::domain::model::{AddressFamily, DegreeType, Invocation, Payload, WeatherQuery};
pub use crate::domain::ports::{Handler, NameResolver, WeatherProvider};
pub use crate::utils::error::Result;
