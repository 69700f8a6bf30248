pub mod event;

/// Redis に保存される不透明なアクセストークン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
