pub mod typewriter;
