use async_trait::async_trait;

use crate::domain::haiku::errors::HaikuError;
use crate::domain::haiku::model::Haiku;

#[async_trait]
pub trait GenerateHaikuUseCase: Send + Sync {
    async fn execute(&self) -> Result<Haiku, HaikuError>;
}
