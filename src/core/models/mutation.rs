/// Instruction to write `new_full_content` as the entire content of
/// `target_file_name`, creating the file or overwriting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub target_file_name: String,
    pub new_full_content: String,
}

impl Mutation {
    pub fn new(target_file_name: impl Into<String>, new_full_content: impl Into<String>) -> Self {
        Self {
            target_file_name: target_file_name.into(),
            new_full_content: new_full_content.into(),
        }
    }
}
