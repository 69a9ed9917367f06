pub mod scalars;
