use sea_orm::entity::prelude::*;

/// Account record owned by the accounts service.
///
/// `role`, `status`, and `plan_selection` are stored as snake_case strings;
/// they are narrowed to the closed enums in `lutrin-domain` exactly once,
/// at the repository read boundary. `created_at` is nullable because legacy
/// rows predate the column; quota logic treats a missing value as an
/// already-expired trial.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: String,
    pub organization: String,
    pub role: String,
    pub status: String,
    pub is_active: bool,
    pub plan_selection: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub generation_count: i32,
    pub chat_message_count: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
