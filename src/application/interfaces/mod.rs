/// Skills API endpoint interface
pub mod skills;
