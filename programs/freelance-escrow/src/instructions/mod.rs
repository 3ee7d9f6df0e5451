pub mod accept_pay_change;
pub mod apply_job;
pub mod approve_job;
pub mod create_job;
pub mod decline_job;
pub mod dismiss_employee;
pub mod initialize;
pub mod pay_employee;
pub mod push_price;
pub mod set_pay_rate;
pub mod update_board;

pub use accept_pay_change::*;
pub use apply_job::*;
pub use approve_job::*;
pub use create_job::*;
pub use decline_job::*;
pub use dismiss_employee::*;
pub use initialize::*;
pub use pay_employee::*;
pub use push_price::*;
pub use set_pay_rate::*;
pub use update_board::*;
