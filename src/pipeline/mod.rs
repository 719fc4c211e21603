pub mod compare;
pub mod enrich;
pub mod flyby;
pub mod gpx;
pub mod pace;
pub mod streams;
