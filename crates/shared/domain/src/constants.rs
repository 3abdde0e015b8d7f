//! Shared string constants: content sections, feature keys, API doc tags.

/// Required top-level sections of every content document.
pub const COMPANY: &str = "company";
pub const HERO: &str = "hero";
pub const ABOUT: &str = "about";

/// Optional sections that pass through resolution untouched.
pub const SERVICES: &str = "services";
pub const CONTACT: &str = "contact";
pub const FOOTER: &str = "footer";

/// The content leaf rewritten by the editor endpoint.
pub const HERO_TYPE: &str = "type";

// Feature keys (package-tier gating)
pub const CONTACT_FORM: &str = "contact_form";
pub const GALLERY: &str = "gallery";
pub const TESTIMONIALS: &str = "testimonials";
pub const SEO_TOOLS: &str = "seo_tools";
pub const CUSTOM_DOMAIN: &str = "custom_domain";
pub const ONLINE_BOOKING: &str = "online_booking";
pub const ANALYTICS: &str = "analytics";
pub const PRIORITY_SUPPORT: &str = "priority_support";

/// Every known feature key, in table order.
pub const KNOWN_FEATURES: &[&str] = &[
    CONTACT_FORM,
    GALLERY,
    TESTIMONIALS,
    SEO_TOOLS,
    CUSTOM_DOMAIN,
    ONLINE_BOOKING,
    ANALYTICS,
    PRIORITY_SUPPORT,
];

// OpenAPI doc tags
pub const SYSTEM_TAG: &str = "System";
pub const CONTENT_TAG: &str = "Content";
pub const THEME_TAG: &str = "Theme";
pub const EDITOR_TAG: &str = "Editor";
