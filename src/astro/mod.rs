pub mod planet;
pub mod system;
