use garde::Validate;
use kernel::model::{
    id::ServiceId,
    list::PaginatedList,
    service::{Service, ServiceListOptions},
};
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: i64 = 20;
const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
    #[garde(skip)]
    #[serde(default)]
    pub category: Option<String>,
}

impl From<ServiceListQuery> for ServiceListOptions {
    fn from(value: ServiceListQuery) -> Self {
        let ServiceListQuery {
            limit,
            offset,
            category,
        } = value;
        Self {
            category,
            limit,
            offset,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedServiceResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<ServiceResponse>,
}

impl From<PaginatedList<Service>> for PaginatedServiceResponse {
    fn from(value: PaginatedList<Service>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value;
        Self {
            total,
            limit,
            offset,
            items: items.into_iter().map(ServiceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: ServiceId,
    pub name: String,
    pub price: i64,
    pub category: String,
}

impl From<Service> for ServiceResponse {
    fn from(value: Service) -> Self {
        let Service {
            service_id,
            name,
            price,
            category,
        } = value;
        Self {
            id: service_id,
            name,
            price,
            category,
        }
    }
}
