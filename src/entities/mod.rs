pub mod prelude;

pub mod series;
