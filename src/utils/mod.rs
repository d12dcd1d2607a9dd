pub mod environment;
pub mod paths;

pub use environment::resolve_home_dir;
pub use paths::{decode_project_dir_name, format_path_with_tilde};
