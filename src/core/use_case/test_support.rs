use crate::core::port::output::{OutputBoundary, OutputError};

pub struct RecordingOutput<T> {
    pub output: Option<T>,
}

impl<T> Default for RecordingOutput<T> {
    fn default() -> Self {
        Self { output: None }
    }
}

impl<T: Send + Sync> OutputBoundary<T> for RecordingOutput<T> {
    fn execute(&mut self, output: T) -> Result<(), OutputError> {
        self.output = Some(output);
        Ok(())
    }
}
