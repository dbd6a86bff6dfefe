mod resolver;

pub use resolver::{IconResolver, frame_file_name, frame_resource_path, wrap_frame_index};

pub(crate) use resolver::LOADING_ICON;
