use crate::domain::model::Suite;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a suite of cases comes from.
#[async_trait]
pub trait CaseSource: Send + Sync {
    async fn load_suite(&self) -> Result<Suite>;
}
