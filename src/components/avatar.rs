//! Avatar Component

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AvatarSize {
    Small,
    #[default]
    Default,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar avatar-sm",
            AvatarSize::Default => "avatar",
            AvatarSize::Large => "avatar avatar-lg",
        }
    }
}

/// Round (or square) image avatar
#[component]
pub fn Avatar(
    #[prop(into)] src: String,
    #[prop(optional)] size: AvatarSize,
    #[prop(optional)] square: bool,
) -> impl IntoView {
    let class = if square {
        format!("{} avatar-square", size.class())
    } else {
        size.class().to_string()
    };
    view! {
        <span class=class>
            <img src=src alt="" />
        </span>
    }
}
