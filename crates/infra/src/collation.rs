pub mod czech;

pub use czech::CzechCollator;
