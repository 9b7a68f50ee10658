mod actor;
mod movie;

pub use actor::ActorView;
pub use movie::MovieView;
