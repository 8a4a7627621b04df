use yew::prelude::*;

/// Line icons drawn from Lucide path data (lucide.dev).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,
    Menu,
    X,

    // Content
    Search,
    Smartphone,
    Sparkles,
    Star,

    // Actions
    Download,
    ExternalLink,
    Github,
    Heart,
    Mail,
    Send,
}

impl IconName {
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::X => "M18 6 6 18M6 6l12 12",

            IconName::Search => "m21 21-6-6m2-5a7 7 0 1 1-14 0 7 7 0 0 1 14 0z",
            IconName::Smartphone => {
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM12 18h.01"
            },
            IconName::Sparkles => "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9z",
            IconName::Star => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 \
                 9.27l6.91-1.01L12 2z"
            },

            IconName::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            IconName::ExternalLink => {
                "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"
            },
            IconName::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 \
                 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 \
                 18c-4.51 2-5-2-7-2"
            },
            IconName::Heart => {
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 \
                 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"
            },
            IconName::Send => "m22 2-7 20-4-9-9-4zM22 2 11 13",
        }
    }

    /// Closed outlines that can be filled for an "active" look.
    pub fn fillable(&self) -> bool {
        matches!(self, IconName::Heart | IconName::Star)
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    /// Fill the shape with the stroke colour (only for fillable icons).
    #[prop_or_default]
    pub filled: bool,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        filled,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };
    let fill = if *filled && name.fillable() { color.clone() } else { "none".to_string() };

    html! {
        <svg
            class={classes!("inline-flex", "shrink-0", "transition-all", "duration-200", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Round icon-only button.
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    /// Accessible label, since the button has no text.
    pub label: AttrValue,

    #[prop_or(20)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[44px]",
        "min-h-[44px]",
        "rounded-full",
        "bg-white/80",
        "dark:bg-slate-800/80",
        "text-slate-700",
        "dark:text-slate-200",
        "shadow-md",
        "transition-all",
        "duration-150",
        "hover:scale-105",
        "hover:bg-white",
        "dark:hover:bg-slate-700",
        props.class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            aria-label={props.label.clone()}
            onclick={props.onclick.clone()}
        >
            <Icon name={props.icon} size={props.size} />
        </button>
    }
}
