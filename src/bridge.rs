//! Request/response boundary to the calculation service.
//!
//! All operations are asynchronous and run on the UI thread, hence `?Send`.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::UserInfo;

#[async_trait(?Send)]
pub trait Bridge {
    /// Takes a JSON encoded `CalculationPayload`, returns display text.
    async fn calculate(&self, payload: &str) -> Result<String>;

    /// JSON encoded `Defaults`.
    async fn get_defaults(&self) -> Result<String>;

    async fn get_userinfo(&self) -> Result<UserInfo>;

    /// JSON settings document; may be empty.
    async fn get_settings(&self) -> Result<String>;

    async fn set_theme(&self, stylesheet: &str) -> Result<()>;
}
