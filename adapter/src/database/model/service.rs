use kernel::model::{id::ServiceId, service::Service};

#[derive(sqlx::FromRow)]
pub struct ServiceRow {
    pub service_id: ServiceId,
    pub name: String,
    pub price: i64,
    pub category: String,
}

impl From<ServiceRow> for Service {
    fn from(value: ServiceRow) -> Self {
        let ServiceRow {
            service_id,
            name,
            price,
            category,
        } = value;
        Service {
            service_id,
            name,
            price,
            category,
        }
    }
}
