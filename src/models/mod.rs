pub mod claim;
pub mod report;

pub use claim::{ClaimStatus, ClaimTicket};
pub use report::{LostItemReport, NewLostItem};
