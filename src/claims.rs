use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::models::{ClaimStatus, ClaimTicket};
use crate::store::StoreError;

pub type SharedClaimsSource = Arc<dyn ClaimsSource>;

/// Where claim tickets come from. Only the static generator exists today;
/// a collection-backed source can replace it without touching the handlers.
#[async_trait]
pub trait ClaimsSource: Send + Sync {
    async fn list(&self) -> Result<Vec<ClaimTicket>, StoreError>;
}

/// Generates the same three tickets on every call, dated relative to now.
/// Nothing is cached, so repeated calls track the clock.
pub struct StaticClaims;

#[async_trait]
impl ClaimsSource for StaticClaims {
    async fn list(&self) -> Result<Vec<ClaimTicket>, StoreError> {
        let now = Utc::now();

        Ok(vec![
            ClaimTicket {
                id: "001".to_string(),
                item_name: "Black Backpack".to_string(),
                item_id: "45A9".to_string(),
                status: ClaimStatus::Verified,
                date: now,
            },
            ClaimTicket {
                id: "002".to_string(),
                item_name: "Silver Key Set".to_string(),
                item_id: "B17D".to_string(),
                status: ClaimStatus::Pending,
                date: now - Duration::days(1),
            },
            ClaimTicket {
                id: "003".to_string(),
                item_name: "Green Jacket".to_string(),
                item_id: "F90C".to_string(),
                status: ClaimStatus::Rejected,
                date: now - Duration::days(2),
            },
        ])
    }
}
