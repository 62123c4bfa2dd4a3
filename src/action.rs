/// The two user-triggered interactions of a profile header.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Follow,
    Unfollow,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Follow, Action::Unfollow];

    pub fn idle_label(self) -> &'static str {
        match self {
            Self::Follow => "Follow",
            Self::Unfollow => "Unfollow",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Follow => "Following...",
            Self::Unfollow => "Unfollowing...",
        }
    }

    /// Context string passed to the diagnostic sink when the action fails.
    pub fn failure_context(self) -> &'static str {
        match self {
            Self::Follow => "Error following user",
            Self::Unfollow => "Error unfollowing user",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_context_names_the_action() {
        assert!(Action::Follow.failure_context().contains("following"));
        assert!(Action::Unfollow.failure_context().contains("unfollowing"));
    }

    #[test]
    fn labels() {
        assert_eq!("Follow", Action::Follow.idle_label());
        assert_eq!("Unfollowing...", Action::Unfollow.busy_label());
        assert_eq!("unfollow", Action::Unfollow.to_string());
    }
}
