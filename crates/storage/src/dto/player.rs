use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{PlayerRecord, PlayerRole, SocialLinks};
use crate::services::roster::RosterFilter;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterQuery {
    #[validate(length(max = 100, message = "search must be at most 100 characters"))]
    pub search: Option<String>,

    #[serde(default)]
    #[param(inline)]
    pub role: RosterFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstagramLink {
    pub url: String,
    pub handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub id: String,
    pub full_name: String,
    pub jersey_number: Option<i32>,
    pub role: PlayerRole,
    pub role_label: String,
    pub has_role_badge: bool,
    pub position: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub instagram: Option<InstagramLink>,
    pub ultiscore_url: Option<String>,
}

impl From<&PlayerRecord> for PlayerResponse {
    fn from(p: &PlayerRecord) -> Self {
        let role = p.role();
        let links = SocialLinks::resolve(p.instagram_url.as_deref(), p.ultiscore_url.as_deref());

        Self {
            id: p.id.clone(),
            full_name: p.full_name.clone(),
            jersey_number: p.jersey_number,
            role,
            role_label: role.label().to_string(),
            has_role_badge: role.has_badge(),
            position: p.position.clone(),
            tagline: p.tagline.clone(),
            bio: p.bio.clone(),
            photo_url: p.photo_url.clone(),
            instagram: links
                .instagram
                .map(|(url, handle)| InstagramLink { url, handle }),
            ultiscore_url: links.ultiscore,
        }
    }
}
