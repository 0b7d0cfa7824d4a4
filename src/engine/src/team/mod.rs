pub mod collection;
pub mod team;

pub use collection::TeamCollection;
pub use team::Team;
