/// ページネーション付きの取得結果。
/// total はフィルタ適用後の「見える件数」の総数であり、
/// items.len() はこのページに載った件数である。
#[derive(Debug)]
pub struct PaginatedList<T> {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

impl<T> PaginatedList<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}
