//! Generated avatars for users and teams without an uploaded image.

use url::form_urlencoded;

/// Path prefix of the avatar endpoint, relative to the site root.
pub const AVATAR_PATH: &str = "api/v1/avatar/";

const PALETTE: [&str; 10] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#06B6D4", "#EC4899", "#84CC16",
    "#F97316", "#22C55E",
];

const AVATAR_SIZE: u32 = 96;

/// Builds `api/v1/avatar/<name>` with the name form-url-escaped.
pub fn default_avatar_url(name: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{}{}", AVATAR_PATH, escaped)
}

/// Returns the stored avatar or the generated default for `name`.
pub fn avatar_url_or_default(avatar_url: Option<String>, name: &str) -> String {
    avatar_url.unwrap_or_else(|| default_avatar_url(name))
}

/// Renders a square SVG with the upper-cased initial of `name` on a palette colour.
///
/// The colour depends only on the trimmed name, so the same name always renders the
/// same avatar.
pub fn render_avatar_svg(name: &str) -> String {
    let label = name.trim();
    let initial = label
        .chars()
        .next()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string());
    let color = PALETTE[palette_index(label)];

    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}'>\
<rect width='100%' height='100%' fill='{color}' />\
<text x='50%' y='56%' dominant-baseline='middle' text-anchor='middle' \
font-family='Arial, Helvetica, sans-serif' font-size='{font}' fill='#fff'>{initial}</text>\
</svg>",
        size = AVATAR_SIZE,
        font = AVATAR_SIZE / 2,
        color = color,
        initial = initial,
    )
}

fn palette_index(label: &str) -> usize {
    let hash = label
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    hash as usize % PALETTE.len()
}
