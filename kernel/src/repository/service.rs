use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ServiceId,
    list::PaginatedList,
    service::{Service, ServiceListOptions},
};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn find_all(&self, options: ServiceListOptions) -> AppResult<PaginatedList<Service>>;
    async fn find_by_id(&self, service_id: ServiceId) -> AppResult<Option<Service>>;
}
