mod json;

pub use json::{JsonOutput, ModuleOutput, ProjectInfo};
