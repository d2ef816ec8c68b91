//! Primary-language labels for text the documents do not carry.
//!
//! Each constant is the fallback passed to the translator; the key it is
//! looked up under sits next to it at the call site.

#![allow(missing_docs)]

// Navigation
pub const NAV_HOME: &str = "Trang chủ";
pub const NAV_ABOUT: &str = "Giới thiệu";
pub const NAV_PROJECTS: &str = "Dự án";
pub const NAV_SKILLS: &str = "Kỹ năng";
pub const NAV_CONTACT: &str = "Liên hệ";

// Section titles
pub const SKILLS_TITLE: &str = "Kỹ năng kỹ thuật";
pub const PROJECTS_TITLE: &str = "Dự án nổi bật";

// Project modal
pub const MODAL_DESCRIPTION: &str = "Mô tả dự án";
pub const MODAL_STATUS: &str = "Trạng thái";
pub const MODAL_ROLE: &str = "Vai trò";
pub const MODAL_TECHNOLOGIES: &str = "Công nghệ sử dụng";
pub const MODAL_FEATURES: &str = "Tính năng chính";
pub const MODAL_ACHIEVEMENTS: &str = "Thành quả đạt được";
pub const MODAL_SKILLS: &str = "Kỹ năng áp dụng";
pub const MODAL_GITHUB: &str = "GitHub Code";
pub const MODAL_DEMO: &str = "Live Demo";

// Project card buttons
pub const CARD_CODE: &str = "Code";
pub const CARD_DEMO: &str = "Demo";

// Contact methods
pub const CONTACT_EMAIL: &str = "Email";
pub const CONTACT_LINKEDIN: &str = "LinkedIn";
pub const CONTACT_GITHUB: &str = "GitHub";
pub const CONTACT_PHONE: &str = "Số điện thoại";
pub const CONTACT_ZALO: &str = "Zalo";
pub const CONTACT_FACEBOOK: &str = "Facebook";

// Shown when a profile URL has no usable last segment
pub const LINKEDIN_PROFILE: &str = "LinkedIn Profile";
pub const GITHUB_PROFILE: &str = "GitHub Profile";
pub const FACEBOOK_PROFILE: &str = "Facebook Profile";
pub const ZALO_CHAT: &str = "Zalo Chat";

/// Positional dictionary keys for skill categories without an `id`.
pub const SKILL_CATEGORY_KEYS: [&str; 3] = ["gameDevelopment", "toolsTechnologies", "softSkills"];
