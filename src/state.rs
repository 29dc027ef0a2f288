use std::sync::Arc;

use crate::claims::SharedClaimsSource;
use crate::config::Config;
use crate::store::SharedReportStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: SharedReportStore,
    pub claims: SharedClaimsSource,
    pub config: Config,
}
