use crate::model::id::ServiceId;

/// 修理サービスのカタログ項目。この層からは読み取り専用の参照データ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub service_id: ServiceId,
    pub name: String,
    // 価格は最小通貨単位の非負整数（例: VND）
    pub price: i64,
    pub category: String,
}

/// サービス一覧取得の条件
#[derive(Debug)]
pub struct ServiceListOptions {
    pub category: Option<String>,
    pub limit: i64,
    pub offset: i64,
}
