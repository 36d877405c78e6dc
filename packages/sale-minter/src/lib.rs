pub mod helpers;
pub mod msg;

pub use crate::helpers::SaleMinterContract;
pub use crate::msg::SaleMinterExecuteMsg;
