use crate::action::Action;
use crate::controller::InteractionState;
use crate::profile::ProfileHeaderProps;

use std::fmt;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const EDIT_PROFILE_HREF: &str = "/profile/edit";
pub const EDIT_ICON_SRC: &str = "/assets/edit.svg";

#[derive(serde::Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Avatar {
    pub src: String,
    pub alt: &'static str,
}

#[derive(serde::Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Icon {
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(serde::Serialize, Clone, PartialEq, Eq, Debug)]
pub struct EditLink {
    pub href: &'static str,
    pub icon: Icon,
    pub label: &'static str,
}

#[derive(serde::Serialize, Clone, PartialEq, Eq, Debug)]
pub struct ButtonView {
    pub action: Action,
    pub label: &'static str,
    pub disabled: bool,
}

impl ButtonView {
    fn new(action: Action, state: InteractionState) -> Self {
        let busy = state.in_progress(action);
        Self {
            action,
            label: if busy {
                action.busy_label()
            } else {
                action.idle_label()
            },
            disabled: busy,
        }
    }
}

/// Everything a profile header shows, for one props/state pair.
#[derive(serde::Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub avatar: Avatar,
    pub name: String,
    pub handle: String,
    pub edit: Option<EditLink>,
    pub follow_button: Option<ButtonView>,
    pub unfollow_button: Option<ButtonView>,
    pub bio: String,
}

pub fn render(props: &ProfileHeaderProps, state: InteractionState) -> HeaderView {
    let identity = &props.identity;
    let visibility = props.visibility;

    HeaderView {
        avatar: Avatar {
            src: identity.img_url.clone(),
            alt: "Profile Image",
        },
        name: identity.name.clone(),
        handle: format!("@{}", identity.username),
        edit: props.shows_edit_affordance().then(|| EditLink {
            href: EDIT_PROFILE_HREF,
            icon: Icon {
                src: EDIT_ICON_SRC,
                width: 16,
                height: 16,
            },
            label: "Edit",
        }),
        follow_button: visibility
            .follow_button_visible
            .then(|| ButtonView::new(Action::Follow, state)),
        unfollow_button: visibility
            .unfollow_button_visible
            .then(|| ButtonView::new(Action::Unfollow, state)),
        bio: identity.bio.clone(),
    }
}

/// Render the current state right away, then again after every transition.
///
/// The first view is emitted before this returns, so it always shows the state
/// at subscription time. The task ends when the controller is dropped.
pub fn spawn_renderer<F>(
    props: ProfileHeaderProps,
    mut state: watch::Receiver<InteractionState>,
    mut emit: F,
) -> JoinHandle<()>
where
    F: FnMut(HeaderView) + Send + 'static,
{
    emit(render(&props, *state.borrow_and_update()));

    tokio::spawn(async move {
        while state.changed().await.is_ok() {
            let current = *state.borrow_and_update();
            emit(render(&props, current));
        }
    })
}

impl fmt::Display for ButtonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.disabled {
            write!(f, "[{} (disabled)]", self.label)
        } else {
            write!(f, "[{}]", self.label)
        }
    }
}

impl fmt::Display for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {} {}", self.avatar.src, self.name, self.handle)?;
        if let Some(edit) = &self.edit {
            write!(f, " <{} {} -> {}>", edit.icon.src, edit.label, edit.href)?;
        }
        for button in self.follow_button.iter().chain(self.unfollow_button.iter()) {
            write!(f, " {button}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.bio)
    }
}
