use profile_header::capability::{Capability, FollowBinding, FollowService};
use profile_header::config::Config;
use profile_header::error::{Error, Result};
use profile_header::view::spawn_renderer;
use profile_header::{Action, InteractionController, ProfileHeaderProps, UiEvent};

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

struct Behavior {
    latency: Duration,
    failure: Option<String>,
}

/// Follow backend living in memory, with configurable latency and failures.
struct SimulatedFollowService {
    follow: Behavior,
    unfollow: Behavior,
    follows: Mutex<BTreeSet<(String, String)>>,
}

impl SimulatedFollowService {
    fn new(config: &Config) -> Self {
        Self {
            follow: Behavior {
                latency: config.follow_latency(),
                failure: config.fail_follow.clone(),
            },
            unfollow: Behavior {
                latency: config.unfollow_latency(),
                failure: config.fail_unfollow.clone(),
            },
            follows: Mutex::new(BTreeSet::new()),
        }
    }
}

#[async_trait]
impl FollowService for SimulatedFollowService {
    async fn set_following(&self, follower_id: &str, target_id: &str, value: bool) -> Result<()> {
        let behavior = if value { &self.follow } else { &self.unfollow };
        tokio::time::sleep(behavior.latency).await;

        if follower_id.is_empty() {
            return Err(Error::Unauthorized);
        }
        if target_id.is_empty() {
            return Err(Error::ProfileNotFound);
        }

        if let Some(message) = &behavior.failure {
            return Err(anyhow::anyhow!(message.clone()).into());
        }

        let pair = (follower_id.to_string(), target_id.to_string());
        let mut follows = self.follows.lock().await;
        if value {
            follows.insert(pair);
        } else {
            follows.remove(&pair);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::parse();
    let props: ProfileHeaderProps = serde_json::from_str(
        &tokio::fs::read_to_string(&config.props)
            .await
            .with_context(|| format!("failed to read {}", config.props.display()))?,
    )
    .context("invalid profile header props")?;

    let service = Arc::new(SimulatedFollowService::new(&config));
    let identity = &props.identity;
    let follow = (!config.no_follow).then(|| {
        Arc::new(FollowBinding::follow(
            service.clone(),
            &identity.auth_user_id,
            &identity.account_id,
        )) as Arc<dyn Capability>
    });
    let unfollow = (!config.no_unfollow).then(|| {
        Arc::new(FollowBinding::unfollow(
            service.clone(),
            &identity.auth_user_id,
            &identity.account_id,
        )) as Arc<dyn Capability>
    });
    let controller = InteractionController::new(follow, unfollow);

    let printer = spawn_renderer(props.clone(), controller.subscribe(), |view| {
        println!("{view}\n");
    });

    for action in Action::ALL {
        let visible = match action {
            Action::Follow => props.visibility.follow_button_visible,
            Action::Unfollow => props.visibility.unfollow_button_visible,
        };
        if !visible {
            continue;
        }

        let mut event = UiEvent::new();
        if config.double_trigger {
            let mut repeat = UiEvent::new();
            let (first, second) = tokio::join!(controller.trigger(action, &mut event), async {
                tokio::task::yield_now().await;
                controller.trigger(action, &mut repeat).await
            });
            tracing::info!(%action, ?first, ?second, "pressed twice");
        } else {
            let outcome = controller.trigger(action, &mut event).await;
            tracing::info!(%action, ?outcome, "pressed");
        }
    }

    drop(controller);
    printer.await.context("view printer panicked")?;

    for (follower, target) in service.follows.lock().await.iter() {
        println!("{follower} follows {target}");
    }

    Ok(())
}
