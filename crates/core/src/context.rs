//! Context-dependent defaults for "the files or buffer to operate on".

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque identifier of a host buffer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub String);

impl Display for BufferHandle {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "#<buffer {}>", self.0)
    }
}

/// What a files-or-buffer widget operates on. Exactly one variant is active.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum FileOrBufferValue {
    FileList(Vec<String>),
    Buffer(BufferHandle),
}

/// Host state consulted when resolving a default value.
pub trait ContextProvider {
    /// Whether the host is in a multi-selection mode, such as a file browser
    /// with marked entries.
    fn is_multi_selection(&self) -> bool;

    /// Marked entries in their existing order. Only meaningful in
    /// multi-selection mode.
    fn marked_entries(&self) -> Vec<String>;

    /// Path of the file backing the active buffer, if any.
    fn buffer_file(&self) -> Option<String>;

    /// Handle of the active buffer.
    fn active_buffer(&self) -> BufferHandle;
}

/// A plain snapshot of host state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    pub multi_selection: bool,
    pub marked: Vec<String>,
    pub buffer_file: Option<String>,
    pub buffer: BufferHandle,
}

impl HostContext {
    #[must_use]
    pub fn marked(marked: Vec<String>) -> Self {
        Self {
            multi_selection: true,
            marked,
            buffer_file: None,
            buffer: BufferHandle("*marked*".to_string()),
        }
    }

    #[must_use]
    pub fn file_buffer(name: &str, path: &str) -> Self {
        Self {
            multi_selection: false,
            marked: Vec::new(),
            buffer_file: Some(path.to_string()),
            buffer: BufferHandle(name.to_string()),
        }
    }

    #[must_use]
    pub fn buffer(name: &str) -> Self {
        Self {
            multi_selection: false,
            marked: Vec::new(),
            buffer_file: None,
            buffer: BufferHandle(name.to_string()),
        }
    }
}

impl ContextProvider for HostContext {
    fn is_multi_selection(&self) -> bool {
        self.multi_selection
    }

    fn marked_entries(&self) -> Vec<String> {
        self.marked.clone()
    }

    fn buffer_file(&self) -> Option<String> {
        self.buffer_file.clone()
    }

    fn active_buffer(&self) -> BufferHandle {
        self.buffer.clone()
    }
}

/// Resolves the default files-or-buffer value for `context`.
///
/// Marked entries win in multi-selection mode, then the file backing the
/// active buffer, then the buffer itself.
pub fn resolve<C: ContextProvider + ?Sized>(context: &C) -> FileOrBufferValue {
    if context.is_multi_selection() {
        return FileOrBufferValue::FileList(context.marked_entries());
    }

    match context.buffer_file() {
        Some(path) => FileOrBufferValue::FileList(vec![path]),
        None => FileOrBufferValue::Buffer(context.active_buffer()),
    }
}
