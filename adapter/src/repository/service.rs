use async_trait::async_trait;
use derive_new::new;
use sqlx::{Postgres, QueryBuilder};

use kernel::model::{
    id::ServiceId,
    list::PaginatedList,
    service::{Service, ServiceListOptions},
};
use kernel::repository::service::ServiceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::service::ServiceRow, ConnectionPool};

#[derive(new)]
pub struct ServiceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryImpl {
    async fn find_all(&self, options: ServiceListOptions) -> AppResult<PaginatedList<Service>> {
        let ServiceListOptions {
            category,
            limit,
            offset,
        } = options;

        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM services WHERE TRUE");
        if let Some(category) = &category {
            count_builder.push(" AND category = ");
            count_builder.push_bind(category.clone());
        }
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT service_id, name, price, category FROM services WHERE TRUE",
        );
        if let Some(category) = &category {
            builder.push(" AND category = ");
            builder.push_bind(category.clone());
        }
        builder.push(" ORDER BY name ASC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows: Vec<ServiceRow> = builder
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items: rows.into_iter().map(Service::from).collect(),
        })
    }

    async fn find_by_id(&self, service_id: ServiceId) -> AppResult<Option<Service>> {
        let row: Option<ServiceRow> = sqlx::query_as(
            r#"
                SELECT service_id, name, price, category
                FROM services
                WHERE service_id = $1
            "#,
        )
        .bind(service_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Service::from))
    }
}
