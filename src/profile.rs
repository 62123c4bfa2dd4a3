/// Profile `type` for which the edit affordance is never shown.
pub const COMMUNITY_PROFILE_TYPE: &str = "Community";

#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileIdentity {
    pub account_id: String,
    pub auth_user_id: String,
    pub name: String,
    pub username: String,
    pub img_url: String,
    pub bio: String,
}

impl ProfileIdentity {
    pub fn is_own_profile(&self) -> bool {
        self.account_id == self.auth_user_id
    }
}

/// Caller-driven. Both flags may be set at once.
#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFlags {
    #[serde(default)]
    pub follow_button_visible: bool,
    #[serde(default)]
    pub unfollow_button_visible: bool,
}

/// Rendering inputs of a profile header.
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Eq, Debug)]
pub struct ProfileHeaderProps {
    #[serde(flatten)]
    pub identity: ProfileIdentity,
    #[serde(flatten)]
    pub visibility: VisibilityFlags,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
}

impl ProfileHeaderProps {
    pub fn is_community(&self) -> bool {
        self.profile_type.as_deref() == Some(COMMUNITY_PROFILE_TYPE)
    }

    pub fn shows_edit_affordance(&self) -> bool {
        self.identity.is_own_profile() && !self.is_community()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_props_with_defaults() {
        let props: ProfileHeaderProps = serde_json::from_str(
            r#"{
                "accountId": "a1",
                "authUserId": "u1",
                "name": "Alice",
                "username": "alice",
                "imgUrl": "/alice.png",
                "bio": "hi"
            }"#,
        )
        .unwrap();

        assert_eq!("a1", props.identity.account_id);
        assert_eq!("/alice.png", props.identity.img_url);
        assert_eq!(VisibilityFlags::default(), props.visibility);
        assert_eq!(None, props.profile_type);
    }

    #[test]
    fn deserializes_type_and_visibility() {
        let props: ProfileHeaderProps = serde_json::from_str(
            r#"{
                "accountId": "c1",
                "authUserId": "c1",
                "name": "Rustaceans",
                "username": "rust",
                "imgUrl": "/rust.png",
                "bio": "",
                "followButtonVisible": true,
                "unfollowButtonVisible": true,
                "type": "Community"
            }"#,
        )
        .unwrap();

        assert!(props.visibility.follow_button_visible);
        assert!(props.visibility.unfollow_button_visible);
        assert!(props.is_community());
        assert!(props.identity.is_own_profile());
        assert!(!props.shows_edit_affordance());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result = serde_json::from_str::<ProfileHeaderProps>(
            r#"{"accountId": "a1", "authUserId": "u1", "name": "Alice"}"#,
        );

        assert!(result.is_err());
    }
}
