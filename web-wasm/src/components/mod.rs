pub mod action_buttons;
pub mod header;
pub mod loading_view;
pub mod media_preview;
pub mod toast_host;
pub mod upload_area;
pub mod verdict_banner;
