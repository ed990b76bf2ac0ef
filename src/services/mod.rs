pub mod series_service;
pub use series_service::{SeriesError, SeriesService};

pub mod series_service_impl;
pub use series_service_impl::SeaOrmSeriesService;
