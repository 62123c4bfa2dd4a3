use crate::error::Result;

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

///
/// An externally supplied asynchronous operation, such as "follow this account".
///
/// The controller invokes and awaits it but never implements it.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Capability: Send + Sync {
    async fn invoke(&self) -> Result<()>;
}

pub struct FnCapability<F>(F);

#[async_trait]
impl<F, Fut> Capability for FnCapability<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send,
{
    async fn invoke(&self) -> Result<()> {
        (self.0)().await
    }
}

/// Wrap an async closure as a shareable capability.
pub fn from_fn<F, Fut>(f: F) -> Arc<dyn Capability>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    Arc::new(FnCapability(f))
}

///
/// Backend able to create or remove a follow relation between two accounts.
///
#[async_trait]
pub trait FollowService: Send + Sync {
    async fn set_following(&self, follower_id: &str, target_id: &str, value: bool) -> Result<()>;
}

/// A [FollowService] call bound to one follower/target pair and direction.
pub struct FollowBinding<S: ?Sized> {
    service: Arc<S>,
    follower_id: String,
    target_id: String,
    value: bool,
}

impl<S: FollowService + ?Sized> FollowBinding<S> {
    pub fn follow(service: Arc<S>, follower_id: &str, target_id: &str) -> Self {
        Self::new(service, follower_id, target_id, true)
    }

    pub fn unfollow(service: Arc<S>, follower_id: &str, target_id: &str) -> Self {
        Self::new(service, follower_id, target_id, false)
    }

    fn new(service: Arc<S>, follower_id: &str, target_id: &str, value: bool) -> Self {
        Self {
            service,
            follower_id: follower_id.to_string(),
            target_id: target_id.to_string(),
            value,
        }
    }
}

#[async_trait]
impl<S: FollowService + ?Sized> Capability for FollowBinding<S> {
    async fn invoke(&self) -> Result<()> {
        tracing::debug!(
            follower_id = %self.follower_id,
            target_id = %self.target_id,
            value = self.value,
            "setting follow relation"
        );
        self.service
            .set_following(&self.follower_id, &self.target_id, self.value)
            .await
    }
}
