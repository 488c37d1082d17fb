pub mod attachment_reader;
pub mod json_file_mirror;
pub mod memory_mirror;
pub mod paths;

pub use attachment_reader::read_attachment;
pub use json_file_mirror::JsonFileMirror;
pub use memory_mirror::MemoryMirror;
pub use paths::EralabPaths;
