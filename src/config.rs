use std::path::PathBuf;
use std::time::Duration;

/// Settings of the `profile-header` demo driver.
#[derive(clap::Parser, Debug)]
#[clap(about = "Render a profile header and drive its follow/unfollow controls")]
pub struct Config {
    /// JSON file with the header props (camelCase keys).
    #[clap(long, env = "PROFILE_HEADER_PROPS")]
    pub props: PathBuf,

    #[clap(long, env, default_value = "50")]
    pub follow_latency_ms: u64,

    #[clap(long, env, default_value = "50")]
    pub unfollow_latency_ms: u64,

    /// Make the follow capability fail with this message.
    #[clap(long, env)]
    pub fail_follow: Option<String>,

    /// Make the unfollow capability fail with this message.
    #[clap(long, env)]
    pub fail_unfollow: Option<String>,

    /// Do not supply a follow capability.
    #[clap(long)]
    pub no_follow: bool,

    /// Do not supply an unfollow capability.
    #[clap(long)]
    pub no_unfollow: bool,

    /// Fire a second trigger while the first is still pending.
    #[clap(long)]
    pub double_trigger: bool,
}

impl Config {
    pub fn follow_latency(&self) -> Duration {
        Duration::from_millis(self.follow_latency_ms)
    }

    pub fn unfollow_latency(&self) -> Duration {
        Duration::from_millis(self.unfollow_latency_ms)
    }
}
