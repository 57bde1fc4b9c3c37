use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BombAmountDto {
    pub type_bomb: String,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryDto {
    pub id_user: Uuid,
    pub bombs: Vec<BombAmountDto>,
}

/// Signed change applied to the caller's stock of one bomb type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeBombAmountDto {
    pub type_bomb: String,
    pub amount: i32,
}
