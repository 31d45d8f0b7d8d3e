pub mod aliases;
