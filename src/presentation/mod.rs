/// Skill, skill type and extraction records
pub mod skill;

pub use skill::*;
