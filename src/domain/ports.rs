use crate::domain::model::UserProfile;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where user profiles come from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile>;
}

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// A page whose elements are addressed by id. Only text content is written.
pub trait Document {
    fn has_element(&self, id: &str) -> bool;
    fn set_text_content(&mut self, id: &str, text: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn template_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}
