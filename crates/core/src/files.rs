//! A widget holding either a list of files or a buffer.

use log::debug;

use crate::context::{self, ContextProvider, FileOrBufferValue};
use crate::display::{Rendered, Segment};
use crate::error::Result;
use crate::paths::{display_path_here, expand_file_name};
use crate::prompt::Prompter;

/// Placeholder shown while a files-or-buffer widget has no value.
pub const DEFAULT_FILES_ARGUMENT: &str = "FILES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOrBufferWidget {
    pub key: char,
    pub description: String,
    pub argument: String,
    pub value: Option<FileOrBufferValue>,
}

impl FileOrBufferWidget {
    pub fn new(key: char, description: &str, argument: Option<&str>) -> Self {
        Self {
            key,
            description: description.to_string(),
            argument: argument.unwrap_or(DEFAULT_FILES_ARGUMENT).to_string(),
            value: None,
        }
    }

    /// Sets the value from the host context, see [`context::resolve`].
    pub fn init_value<C: ContextProvider + ?Sized>(&mut self, context: &C) {
        let value = initial_value(context);
        debug!("Default for `{}`: {:?}", self.description, value);
        self.value = Some(value);
    }

    /// Prompts for a single existing file, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or the path cannot be expanded.
    pub fn read(&mut self, prompter: &mut dyn Prompter) -> Result<&FileOrBufferValue> {
        let entered = prompter.read_file(&format!("{}: ", self.description))?;
        let path = expand_file_name(&entered)?;
        let value = self
            .value
            .insert(FileOrBufferValue::FileList(vec![path.to_string_lossy().to_string()]));
        Ok(&*value)
    }

    pub fn render(&self) -> Rendered {
        match &self.value {
            None => Rendered::single(Segment::inactive(self.argument.clone())),
            Some(FileOrBufferValue::FileList(paths)) => Rendered::single(Segment::active(
                paths
                    .iter()
                    .map(|path| display_path_here(path))
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
            Some(FileOrBufferValue::Buffer(buffer)) => {
                Rendered::single(Segment::active(buffer.to_string()))
            }
        }
    }

    /// Arguments contributed to the assembled command. A buffer contributes
    /// none; the host feeds its content to the command instead.
    pub fn args(&self) -> Vec<String> {
        match &self.value {
            Some(FileOrBufferValue::FileList(paths)) => paths.clone(),
            Some(FileOrBufferValue::Buffer(_)) | None => Vec::new(),
        }
    }
}

/// The value a new files-or-buffer widget starts with.
pub fn initial_value<C: ContextProvider + ?Sized>(context: &C) -> FileOrBufferValue {
    context::resolve(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BufferHandle, HostContext};
    use crate::display::Face;

    struct FixedFile(String);

    impl Prompter for FixedFile {
        fn read_file(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.0.clone())
        }

        fn read_choice(
            &mut self,
            _prompt: &str,
            _choices: &[String],
            _initial: Option<&str>,
        ) -> Result<Option<String>> {
            unreachable!("files widget never reads a choice")
        }
    }

    #[test]
    fn test_unset_renders_placeholder() {
        let widget = FileOrBufferWidget::new('f', "Files", None);
        let rendered = widget.render();
        assert_eq!(rendered.to_string(), DEFAULT_FILES_ARGUMENT);
        assert_eq!(rendered.segments()[0].face, Face::Inactive);
        assert!(widget.args().is_empty());
    }

    #[test]
    fn test_init_value_from_marked_entries() {
        let mut widget = FileOrBufferWidget::new('f', "Files", None);
        widget.init_value(&HostContext::marked(vec![
            "/a.txt".to_string(),
            "/b.txt".to_string(),
        ]));
        assert_eq!(widget.args(), vec!["/a.txt", "/b.txt"]);
        let rendered = widget.render();
        assert_eq!(rendered.segments()[0].face, Face::Active);
    }

    #[test]
    fn test_file_list_renders_paths_relative_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let mut widget = FileOrBufferWidget::new('f', "Files", None);
        widget.value = Some(FileOrBufferValue::FileList(vec![
            cwd.join("a.txt").to_string_lossy().to_string(),
            cwd.join("docs").join("b.txt").to_string_lossy().to_string(),
        ]));

        let rendered = widget.render();
        assert_eq!(rendered.segments().len(), 1);
        assert_eq!(rendered.segments()[0].face, Face::Active);
        assert_eq!(rendered.to_string(), "a.txt docs/b.txt");
    }

    #[test]
    fn test_buffer_renders_handle() {
        let mut widget = FileOrBufferWidget::new('f', "Files", None);
        widget.init_value(&HostContext::buffer("*scratch*"));
        assert_eq!(
            widget.value,
            Some(FileOrBufferValue::Buffer(BufferHandle("*scratch*".to_string())))
        );
        assert_eq!(widget.render().to_string(), "#<buffer *scratch*>");
        assert!(widget.args().is_empty());
    }

    #[test]
    fn test_read_replaces_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let mut widget = FileOrBufferWidget::new('f', "Files", None);
        widget.init_value(&HostContext::marked(vec![
            "/a.txt".to_string(),
            "/b.txt".to_string(),
        ]));

        let value = widget.read(&mut FixedFile(path.clone())).unwrap().clone();
        assert_eq!(value, FileOrBufferValue::FileList(vec![path.clone()]));
        assert_eq!(widget.args(), vec![path]);
    }
}
