use crate::utils::error::Result;

/// Where command lines come from.
pub trait LineSource {
    /// Shows `prompt` if the source is interactive and reads one line.
    /// `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn show_banner(&self) -> bool;
}
