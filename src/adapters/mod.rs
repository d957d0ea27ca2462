// Adapters layer: concrete implementations of the domain ports (system resolver, weather http client).

pub mod dns;
pub mod weather;

pub use dns::SystemResolver;
pub use weather::MsnWeatherClient;
