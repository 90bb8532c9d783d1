//! Weather provider and the Weather Impact Scorer.

pub mod impact;
pub mod openweather;

pub use impact::score as score_weather;
pub use openweather::OpenWeatherProvider;
