mod calculation;
mod common;
