pub mod timers;

pub use timers::Timers;
