//! Secret DTOs

use serde::{Deserialize, Serialize};

/// Request to create or overwrite a secret (`PUT /secrets`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSecret {
    pub name: String,
    pub value: String,
}
