use super::InputError;

/// a conversation with the operator. implementations answer one prompt at a
/// time and report [`InputError::EndOfInput`] once no answers remain, so a
/// finite script of answers always terminates.
pub trait InputSource {
    /// shows a prompt and returns the operator's answer without its line ending.
    fn prompt(&mut self, prompt: &str) -> Result<String, InputError>;

    /// shows an informational line.
    fn message(&mut self, message: &str) -> Result<(), InputError>;
}
