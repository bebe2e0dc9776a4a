#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch { id: u64, query: String },
}
