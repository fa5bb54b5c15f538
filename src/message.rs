use crate::players::types::PlayerProfile;

/// Three-line post: name, birth date, position (last line may be blank).
pub fn format_post(profile: &PlayerProfile) -> String {
    format!(
        "{}\nBorn {} {}, {}\n{}",
        profile.full_name(),
        profile.birth_month,
        strip_leading_zeros(&profile.birth_day),
        strip_leading_zeros(&profile.birth_year),
        profile.position.as_deref().unwrap_or("")
    )
}

/// "05" → "5". Non-numeric tokens pass through untouched.
fn strip_leading_zeros(token: &str) -> String {
    let token = token.trim();
    match token.parse::<u32>() {
        Ok(n) => n.to_string(),
        Err(_) => token.to_string(),
    }
}
