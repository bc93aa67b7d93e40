mod clock;
mod seed_source;

pub use clock::Clock;
pub use seed_source::SeedSource;
